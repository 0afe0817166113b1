//! Device drivers
//!
//! Drivers here only talk to hardware through the platform traits, so the
//! same code runs against a real bus or the mocks.
//!
//! ## Modules
//!
//! - `imu`: Z-axis rate gyro drivers (MPU-6050, mock)
//! - `indicator`: status patterns and indicator implementations
//! - `motor`: PWM-backed H-bridge motor wiring
//! - `traits`: Device trait definitions (RateSensor, StatusIndicator)

pub mod imu;
pub mod indicator;
pub mod motor;
pub mod traits;
