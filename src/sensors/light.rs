//! Ambient light and color sensor types
//!
//! The ALS engine integrates four photodiodes (clear, red, green, blue) into
//! 16-bit counts. Gain is shared by all four channels.

/// ALS and color gain (`AGAIN`, CONTROL bits 1:0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmbientLightGain {
    /// 1x gain
    X1 = 0,
    /// 4x gain (power-on default)
    #[default]
    X4 = 1,
    /// 16x gain
    X16 = 2,
    /// 64x gain
    X64 = 3,
}

impl AmbientLightGain {
    /// Decode the 2-bit field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::X1,
            1 => Self::X4,
            2 => Self::X16,
            _ => Self::X64,
        }
    }

    /// Gain multiplier
    #[must_use]
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::X1 => 1,
            Self::X4 => 4,
            Self::X16 => 16,
            Self::X64 => 64,
        }
    }
}

/// Raw color channel counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorData {
    /// Clear (ambient) channel
    pub clear: u16,
    /// Red channel
    pub red: u16,
    /// Green channel
    pub green: u16,
    /// Blue channel
    pub blue: u16,
}

impl ColorData {
    /// Decode the 8-byte CDATAL..BDATAH block (little-endian channel pairs)
    #[must_use]
    pub const fn from_le_block(block: &[u8; 8]) -> Self {
        Self {
            clear: u16::from_le_bytes([block[0], block[1]]),
            red: u16::from_le_bytes([block[2], block[3]]),
            green: u16::from_le_bytes([block[4], block[5]]),
            blue: u16::from_le_bytes([block[6], block[7]]),
        }
    }
}
