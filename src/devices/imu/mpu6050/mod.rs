//! MPU-6050 gyro driver
//!
//! Only the Z (yaw) rate channel is used. The device is woken with a single
//! power-management write and then polled register by register.

mod driver;
pub mod registers;

pub use driver::{decode_rate, Mpu6050Config, Mpu6050Gyro};
