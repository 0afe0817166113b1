//! Rate gyro trait
//!
//! Single-axis (yaw) angular rate source for heading estimation.
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_turn::devices::traits::RateSensor;
//!
//! fn sample<S: RateSensor>(gyro: &mut S) -> Result<f32, GyroError> {
//!     gyro.wake()?;
//!     gyro.read_rate()
//! }
//! ```

use core::fmt;

/// Gyro error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroError {
    /// I2C communication failed
    I2cError,

    /// Sensor has not been woken yet
    NotInitialized,
}

impl GyroError {
    /// Short name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            GyroError::I2cError => "i2c error",
            GyroError::NotInitialized => "not initialized",
        }
    }
}

impl fmt::Display for GyroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GyroError::I2cError => write!(f, "Gyro I2C communication failed"),
            GyroError::NotInitialized => write!(f, "Gyro not initialized"),
        }
    }
}

/// Yaw rate sensor
///
/// Positive rates are counter-clockwise seen from above.
pub trait RateSensor {
    /// Bring the sensor out of sleep
    ///
    /// Must succeed before [`RateSensor::read_rate`] returns data.
    fn wake(&mut self) -> Result<(), GyroError>;

    /// Read one raw (uncalibrated) Z rate sample in deg/s
    fn read_rate(&mut self) -> Result<f32, GyroError>;

    /// Get sensor health status
    ///
    /// Returns false after repeated consecutive read errors.
    fn is_healthy(&self) -> bool;
}
