//! Device traits
//!
//! Hardware-independent trait definitions consumed by the control
//! subsystems. Mock implementations live next to the real drivers.

pub mod gyro;
pub mod indicator;

pub use gyro::{GyroError, RateSensor};
pub use indicator::{StatusIndicator, StatusPattern};
