//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use gyro_turn::platform::mock::MockTimer;
//! use gyro_turn::platform::traits::TimerInterface;
//!
//! let mut timer = MockTimer::new();
//! timer.delay_ms(10).unwrap();
//! assert_eq!(timer.now_ms(), 10);
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;
mod pwm;
mod timer;

pub use i2c::{I2cTransaction, MockI2c};
pub use pwm::MockPwm;
pub use timer::MockTimer;
