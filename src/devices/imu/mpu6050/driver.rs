//! MPU-6050 I2C Driver Implementation

use super::registers;
use crate::devices::traits::{GyroError, RateSensor};
use crate::platform::traits::I2cInterface;
use gyro_turn_core::parameters::GyroParams;

/// Maximum consecutive errors before marking sensor unhealthy
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mpu6050Config {
    /// 7-bit I2C address (0x68 or 0x69)
    pub i2c_address: u8,
    /// Raw counts per deg/s
    pub sensitivity: f32,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            i2c_address: registers::MPU6050_ADDR,
            sensitivity: registers::GYRO_SENSITIVITY_250DPS,
        }
    }
}

impl Mpu6050Config {
    /// Default address with the sensitivity from the gyro parameters
    pub fn from_params(params: &GyroParams) -> Self {
        Self {
            sensitivity: params.sensitivity,
            ..Self::default()
        }
    }
}

/// Convert a big-endian two's-complement sample to deg/s
pub fn decode_rate(bytes: [u8; 2], sensitivity: f32) -> f32 {
    i16::from_be_bytes(bytes) as f32 / sensitivity
}

/// MPU-6050 Z-axis rate driver
///
/// Implements `RateSensor` over any [`I2cInterface`]. Construction does not
/// touch the bus; call [`RateSensor::wake`] first.
pub struct Mpu6050Gyro<I> {
    /// I2C bus handle
    i2c: I,

    /// Driver configuration
    config: Mpu6050Config,

    /// Health status
    healthy: bool,

    /// Consecutive error count
    error_count: u32,

    /// Wake completed flag
    initialized: bool,
}

impl<I: I2cInterface> Mpu6050Gyro<I> {
    /// Create a driver; the sensor stays asleep until `wake`
    pub fn new(i2c: I, config: Mpu6050Config) -> Self {
        Self {
            i2c,
            config,
            healthy: false,
            error_count: 0,
            initialized: false,
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &Mpu6050Config {
        &self.config
    }

    /// Read the WHO_AM_I register
    ///
    /// Clones answer with other IDs, so the value is informational only.
    pub fn who_am_i(&mut self) -> Result<u8, GyroError> {
        let mut buf = [0u8; 1];
        self.read_registers(registers::WHO_AM_I, &mut buf)?;
        if buf[0] != registers::MPU6050_WHO_AM_I_VALUE {
            crate::log_warn!(
                "Unexpected gyro WHO_AM_I: {:#x} (expected {:#x})",
                buf[0],
                registers::MPU6050_WHO_AM_I_VALUE
            );
        }
        Ok(buf[0])
    }

    /// Release the I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    /// Borrow the I2C bus
    pub fn i2c(&self) -> &I {
        &self.i2c
    }

    /// Mutably borrow the I2C bus
    pub fn i2c_mut(&mut self) -> &mut I {
        &mut self.i2c
    }

    /// Write a register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), GyroError> {
        let result = self.i2c.write(self.config.i2c_address, &[reg, value]);
        self.track(result.is_ok())?;
        Ok(())
    }

    /// Read consecutive registers starting at `reg`
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), GyroError> {
        let result = self
            .i2c
            .write_read(self.config.i2c_address, &[reg], buf);
        self.track(result.is_ok())
    }

    /// Update health tracking after a bus transaction
    fn track(&mut self, ok: bool) -> Result<(), GyroError> {
        if ok {
            self.error_count = 0;
            if self.initialized {
                self.healthy = true;
            }
            return Ok(());
        }

        self.error_count += 1;
        if self.error_count >= MAX_CONSECUTIVE_ERRORS {
            self.healthy = false;
        }
        Err(GyroError::I2cError)
    }
}

impl<I: I2cInterface> RateSensor for Mpu6050Gyro<I> {
    fn wake(&mut self) -> Result<(), GyroError> {
        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE)?;
        self.initialized = true;
        self.healthy = true;
        crate::log_info!("MPU-6050 awake at {:#x}", self.config.i2c_address);
        Ok(())
    }

    fn read_rate(&mut self) -> Result<f32, GyroError> {
        if !self.initialized {
            return Err(GyroError::NotInitialized);
        }

        let mut buf = [0u8; 2];
        self.read_registers(registers::GYRO_ZOUT_H, &mut buf)?;
        Ok(decode_rate(buf, self.config.sensitivity))
    }

    fn is_healthy(&self) -> bool {
        self.healthy
    }
}
