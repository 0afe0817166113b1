//! I2C bus adapter

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::I2cInterface,
    Result,
};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Blocking `embedded-hal` I2C bus as an [`I2cInterface`]
pub struct HalI2c<B> {
    bus: B,
}

impl<B: I2c> HalI2c<B> {
    /// Wrap an initialized I2C bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the wrapped bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2c> I2cInterface for HalI2c<B> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.bus.write(addr, data).map_err(|e| map_error(e.kind()))
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.bus
            .write_read(addr, write_data, read_buffer)
            .map_err(|e| map_error(e.kind()))
    }
}

/// Map HAL I2C errors to platform I2C errors
fn map_error(kind: ErrorKind) -> PlatformError {
    match kind {
        ErrorKind::NoAcknowledge(_) => PlatformError::I2c(I2cError::Nack),
        ErrorKind::ArbitrationLoss => PlatformError::I2c(I2cError::ArbitrationLost),
        _ => PlatformError::I2c(I2cError::BusError),
    }
}
