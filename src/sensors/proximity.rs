//! Proximity sensor types
//!
//! The proximity engine fires the IR LED and measures the reflected energy.
//! LED drive and boost are shared with the gesture engine, which has its own
//! drive field but the same current steps.

/// LED drive strength (`LDRIVE` in CONTROL bits 7:6, `GLDRIVE` in GCONF2 bits 4:3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedDrive {
    /// 100 mA (power-on default)
    #[default]
    Ma100 = 0,
    /// 50 mA
    Ma50 = 1,
    /// 25 mA
    Ma25 = 2,
    /// 12.5 mA
    Ma12_5 = 3,
}

impl LedDrive {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Ma100,
            1 => Self::Ma50,
            2 => Self::Ma25,
            _ => Self::Ma12_5,
        }
    }

    /// Drive current in tenths of a milliamp
    #[must_use]
    pub const fn deci_milliamps(self) -> u16 {
        match self {
            Self::Ma100 => 1000,
            Self::Ma50 => 500,
            Self::Ma25 => 250,
            Self::Ma12_5 => 125,
        }
    }
}

/// Proximity gain (`PGAIN`, CONTROL bits 3:2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProximityGain {
    /// 1x gain
    X1 = 0,
    /// 2x gain
    X2 = 1,
    /// 4x gain (power-on default)
    #[default]
    X4 = 2,
    /// 8x gain
    X8 = 3,
}

impl ProximityGain {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::X1,
            1 => Self::X2,
            2 => Self::X4,
            _ => Self::X8,
        }
    }

    /// Gain multiplier
    #[must_use]
    pub const fn multiplier(self) -> u8 {
        1 << (self as u8)
    }
}

/// Additional LED current during proximity and gesture (`LED_BOOST`, CONFIG2 bits 5:4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedBoost {
    /// 100 % (no boost)
    #[default]
    Percent100 = 0,
    /// 150 %
    Percent150 = 1,
    /// 200 %
    Percent200 = 2,
    /// 300 % (used by the gesture engine)
    Percent300 = 3,
}

impl LedBoost {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Percent100,
            1 => Self::Percent150,
            2 => Self::Percent200,
            _ => Self::Percent300,
        }
    }

    /// Boost as a percentage of the configured drive current
    #[must_use]
    pub const fn percent(self) -> u16 {
        match self {
            Self::Percent100 => 100,
            Self::Percent150 => 150,
            Self::Percent200 => 200,
            Self::Percent300 => 300,
        }
    }
}
