#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

pub mod fifo;
pub mod gesture;
pub mod interrupt;
pub mod power;

// Re-export main types
pub use device::Apds9960Driver;
pub use interface::{ByteAccess, I2cInterface};
pub use sensors::{
    AmbientLightGain, ColorData, GestureGain, GestureWaitTime, LedBoost, LedDrive, ProximityGain,
};

pub use fifo::{GESTURE_FIFO_DEPTH, GestureBatch, QUAD_SIZE, Quad};
pub use gesture::{GestureSession, Motion, SessionState};
pub use interrupt::{DeviceStatus, Persistence};
pub use power::{EnableStatus, Feature};

/// APDS-9960 I2C address (fixed, not strappable)
pub const I2C_ADDRESS: u8 = 0x39;

/// Accepted values of the `ID` register
///
/// Two silicon revisions are in circulation; both are register compatible.
pub const DEVICE_IDS: [u8; 2] = [0xAB, 0x9C];

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Unrecognised `ID` register value (contains the actual value read)
    InvalidDevice(u8),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
