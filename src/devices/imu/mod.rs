//! Rate gyro drivers
//!
//! ## Available Drivers
//!
//! - `mpu6050`: MPU-6050 Z-axis gyro over any [`I2cInterface`]
//! - `mock`: Mock gyro for testing (`cfg(test)` or `mock` feature)
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_turn::devices::imu::{Mpu6050Config, Mpu6050Gyro};
//! use gyro_turn::devices::traits::RateSensor;
//!
//! let mut gyro = Mpu6050Gyro::new(i2c, Mpu6050Config::default());
//! gyro.wake()?;
//! let rate_dps = gyro.read_rate()?;
//! ```
//!
//! [`I2cInterface`]: crate::platform::traits::I2cInterface

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub mod mpu6050;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockGyro;

pub use mpu6050::{Mpu6050Config, Mpu6050Gyro};
