//! I2C bus trait used by the gyro driver

use crate::platform::Result;

/// Blocking I2C master
///
/// Addresses are 7-bit. The bus is owned by a single driver; sharing it
/// between devices is left to the implementation.
pub trait I2cInterface {
    /// Write `data` to the device at `addr`
    ///
    /// Used for register writes: the first byte is the register, the rest is
    /// the value.
    ///
    /// # Errors
    ///
    /// `PlatformError::I2c` on NACK, arbitration loss or a bus fault.
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Write a register pointer, then read back with a repeated start
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;
}
