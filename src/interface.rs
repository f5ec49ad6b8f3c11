//! Bus interface for the APDS-9960
//!
//! This module binds an `embedded-hal` I2C bus to the `device-driver`
//! register traits, and provides [`ByteAccess`], the byte-level shim the
//! driver uses for plain register reads, writes and FIFO block transfers.

use crate::I2C_ADDRESS;

use device_driver::RegisterInterface;

/// Largest single write transaction (register address excluded)
const MAX_WRITE_LEN: usize = 32;

/// I2C interface for the APDS-9960
///
/// The device answers on the fixed 7-bit address [`I2C_ADDRESS`] (0x39).
/// The interface takes exclusive ownership of the bus handle; share a bus
/// between several devices with `embedded-hal-bus` before handing it over.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::new(i2c);
    /// let mut sensor = Apds9960Driver::new(interface);
    /// ```
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        self.i2c.write_read(I2C_ADDRESS, &[address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Register address followed by the data, in one transaction
        let mut buffer = [0u8; MAX_WRITE_LEN + 1];
        buffer[0] = address;
        let len = write_data.len().min(MAX_WRITE_LEN);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        self.i2c.write(I2C_ADDRESS, &buffer[..=len])
    }
}

/// Byte-level register access
///
/// Every transfer is a single bus transaction and is never retried; a
/// failure is returned unchanged to the caller. Blanket-implemented for any
/// [`RegisterInterface`] with 8-bit addresses.
pub trait ByteAccess: RegisterInterface<AddressType = u8> {
    /// Write one byte to `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.write_register(register, 8, &[value])
    }

    /// Read one byte from `register`
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut value = [0u8];
        self.read_register(register, 8, &mut value)?;
        Ok(value[0])
    }

    /// Fill `buffer` with consecutive bytes starting at `register`
    ///
    /// The device auto-increments its internal pointer, except inside the
    /// gesture FIFO window (0xFC-0xFF) where it wraps to keep streaming
    /// quads.
    ///
    /// # Errors
    ///
    /// Returns the bus error if the transaction fails.
    fn read_block(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        #[allow(clippy::cast_possible_truncation)]
        let size_bits = (buffer.len() * 8) as u32;
        self.read_register(register, size_bits, buffer)
    }
}

impl<T> ByteAccess for T where T: RegisterInterface<AddressType = u8> {}
