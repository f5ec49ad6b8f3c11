//! Interrupt configuration and status
//!
//! The APDS-9960 has a single open-drain INT pin, asserted by:
//! - ALS clear channel leaving the `[low, high]` threshold window
//! - Proximity leaving its `[low, high]` threshold window
//! - The gesture FIFO reaching its threshold
//! - Photodiode saturation (CONFIG2 saturation interrupt enables)
//!
//! ALS and proximity interrupts latch until cleared through their clear
//! addresses; the persistence filter sets how many consecutive
//! out-of-window cycles are needed before the pin asserts.
//!
//! # Example
//!
//! ```ignore
//! # use apds9960::{Apds9960Driver, Persistence};
//! # let mut sensor: Apds9960Driver<_> = todo!();
//! sensor.set_proximity_int_low_threshold(0)?;
//! sensor.set_proximity_int_high_threshold(50)?;
//! sensor.set_persistence(Persistence::new(4, 1))?;
//! sensor.enable_proximity_sensor(true)?;
//!
//! // ... INT pin asserted ...
//! let proximity = sensor.read_proximity()?;
//! sensor.clear_proximity_interrupt()?;
//! # Ok::<(), apds9960::Error<()>>(())
//! ```

/// Interrupt persistence filter (PERS, 0x8C)
///
/// Each nibble is the raw persistence code: 0 asserts on every cycle, larger
/// codes require more consecutive out-of-window cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Persistence {
    /// Proximity persistence code (PPERS, 0-15)
    pub proximity: u8,
    /// ALS persistence code (APERS, 0-15)
    pub ambient_light: u8,
}

impl Persistence {
    /// Create a persistence filter; codes are truncated to 4 bits
    #[must_use]
    pub const fn new(proximity: u8, ambient_light: u8) -> Self {
        Self {
            proximity: proximity & 0x0F,
            ambient_light: ambient_light & 0x0F,
        }
    }

    /// Decode a raw PERS value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self::new(bits >> 4, bits)
    }

    /// Raw PERS value
    #[must_use]
    pub const fn bits(&self) -> u8 {
        (self.proximity << 4) | (self.ambient_light & 0x0F)
    }
}

impl Default for Persistence {
    /// Power-on default used by `init()` (0x11)
    fn default() -> Self {
        Self::from_bits(0x11)
    }
}

/// Decoded STATUS register (0x93)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct DeviceStatus {
    /// ALS cycle completed, color data valid
    pub ambient_light_valid: bool,
    /// Proximity cycle completed, PDATA valid
    pub proximity_valid: bool,
    /// Gesture interrupt asserted
    pub gesture_interrupt: bool,
    /// ALS interrupt asserted
    pub ambient_light_interrupt: bool,
    /// Proximity interrupt asserted
    pub proximity_interrupt: bool,
    /// Proximity or gesture analog saturation
    pub proximity_saturation: bool,
    /// Clear photodiode saturation
    pub clear_saturation: bool,
}

impl DeviceStatus {
    /// Whether any interrupt source is currently latched
    #[must_use]
    pub const fn any_interrupt(&self) -> bool {
        self.gesture_interrupt || self.ambient_light_interrupt || self.proximity_interrupt
    }
}
