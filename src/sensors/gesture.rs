//! Gesture engine field types

/// Gesture gain (`GGAIN`, GCONF2 bits 6:5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureGain {
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

impl GestureGain {
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
}

/// Wait time between gesture detection cycles (`GWTIME`, GCONF2 bits 2:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureWaitTime {
    /// 0 ms
    Ms0 = 0,
    /// 2.8 ms (power-on default)
    #[default]
    Ms2_8 = 1,
    /// 5.6 ms
    Ms5_6 = 2,
    /// 8.4 ms
    Ms8_4 = 3,
    /// 14.0 ms
    Ms14_0 = 4,
    /// 22.4 ms
    Ms22_4 = 5,
    /// 30.8 ms
    Ms30_8 = 6,
    /// 39.2 ms
    Ms39_2 = 7,
}

impl GestureWaitTime {
    /// Decode the 3-bit field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => Self::Ms0,
            1 => Self::Ms2_8,
            2 => Self::Ms5_6,
            3 => Self::Ms8_4,
            4 => Self::Ms14_0,
            5 => Self::Ms22_4,
            6 => Self::Ms30_8,
            _ => Self::Ms39_2,
        }
    }

    /// Wait time in tenths of a millisecond
    #[must_use]
    pub const fn deci_millis(self) -> u16 {
        match self {
            Self::Ms0 => 0,
            Self::Ms2_8 => 28,
            Self::Ms5_6 => 56,
            Self::Ms8_4 => 84,
            Self::Ms14_0 => 140,
            Self::Ms22_4 => 224,
            Self::Ms30_8 => 308,
            Self::Ms39_2 => 392,
        }
    }
}
