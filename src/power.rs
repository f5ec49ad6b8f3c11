//! Power and engine enable control
//!
//! The ENABLE register (0x80) gates every engine of the APDS-9960:
//! - **PON**: internal oscillator; nothing runs without it
//! - **AEN / PEN / GEN**: ALS, proximity and gesture engines
//! - **WEN**: wait state between ALS/proximity cycles
//! - **AIEN / PIEN**: ALS and proximity interrupt outputs
//!
//! The gesture engine is entered from the proximity engine, so gesture
//! sensing requires PON, WEN, PEN and GEN together.
//!
//! # Example
//!
//! ```ignore
//! # use apds9960::{Apds9960Driver, Feature};
//! # let mut sensor: Apds9960Driver<_> = todo!();
//! sensor.set_mode(Feature::Power, true)?;
//! sensor.set_mode(Feature::Proximity, true)?;
//!
//! let status = sensor.enable_status()?;
//! assert!(status.proximity);
//! # Ok::<(), apds9960::Error<()>>(())
//! ```

/// ENABLE value with every engine and interrupt turned on
pub const ENABLE_ALL: u8 = 0x7F;

/// Mask that must be fully set for the gesture engine to deliver data (PON | GEN)
pub const GESTURE_ACTIVE_MASK: u8 = 0x41;

/// Selector for [`set_mode`](crate::Apds9960Driver::set_mode)
///
/// The single-bit features carry their bit position in ENABLE as the
/// discriminant. [`Feature::All`] addresses the whole register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feature {
    /// Power on (PON)
    Power = 0,
    /// Ambient light sensing (AEN)
    AmbientLight = 1,
    /// Proximity detection (PEN)
    Proximity = 2,
    /// Wait state (WEN)
    Wait = 3,
    /// Ambient light interrupt (AIEN)
    AmbientLightInterrupt = 4,
    /// Proximity interrupt (PIEN)
    ProximityInterrupt = 5,
    /// Gesture engine (GEN)
    Gesture = 6,
    /// Every feature at once
    All = 7,
}

impl Feature {
    /// Bit mask of this feature in ENABLE, `None` for [`Feature::All`]
    #[must_use]
    pub const fn mask(self) -> Option<u8> {
        match self {
            Self::All => None,
            feature => Some(1 << (feature as u8)),
        }
    }

    /// ENABLE value after switching this feature on or off
    #[must_use]
    pub const fn apply(self, current: u8, enable: bool) -> u8 {
        match (self.mask(), enable) {
            (Some(mask), true) => current | mask,
            (Some(mask), false) => current & !mask,
            (None, true) => ENABLE_ALL,
            (None, false) => 0x00,
        }
    }
}

/// Decoded ENABLE register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct EnableStatus {
    /// Oscillator powered
    pub power: bool,
    /// ALS engine enabled
    pub ambient_light: bool,
    /// Proximity engine enabled
    pub proximity: bool,
    /// Wait state enabled
    pub wait: bool,
    /// ALS interrupt enabled
    pub ambient_light_interrupt: bool,
    /// Proximity interrupt enabled
    pub proximity_interrupt: bool,
    /// Gesture engine enabled
    pub gesture: bool,
}

impl EnableStatus {
    /// Decode a raw ENABLE value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            power: bits & 0x01 != 0,
            ambient_light: bits & 0x02 != 0,
            proximity: bits & 0x04 != 0,
            wait: bits & 0x08 != 0,
            ambient_light_interrupt: bits & 0x10 != 0,
            proximity_interrupt: bits & 0x20 != 0,
            gesture: bits & 0x40 != 0,
        }
    }

    /// Whether the gesture engine can deliver FIFO data (power and gesture both on)
    #[must_use]
    pub const fn gesture_active(&self) -> bool {
        self.power && self.gesture
    }
}
