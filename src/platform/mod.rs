//! Platform abstraction layer
//!
//! Hardware access for the turn controller goes through the traits in this
//! module: an I2C bus for the gyro, PWM channels for the motor drivers and a
//! millisecond timer for pauses and timestamps.
//!
//! Boards built on `embedded-hal` 1.0 plug in through the adapters in
//! [`hal`]; host tests use the [`mock`] implementations.

pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{I2cInterface, PwmInterface, TimerInterface};
