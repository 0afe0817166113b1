#![cfg_attr(not(test), no_std)]

//! gyro_turn - Gyro-stabilised turning for differential-drive robots
//!
//! This library provides platform abstraction, device drivers, and the
//! heading and turn control subsystems for a two-motor robot with a
//! single-axis rate gyro. Pure control math lives in `gyro_turn_core`.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Platform abstraction layer (I2C, PWM, timer)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core infrastructure (logging)
pub mod core;

// Control subsystems (heading estimation, turn control)
pub mod subsystems;

pub use gyro_turn_core::motor::{DifferentialDrive, MotorError};
pub use gyro_turn_core::parameters::{DriveParams, GyroParams, TurnParams};
pub use gyro_turn_core::turn::{TurnDirection, TurnOutcome, TurnPhase, TurnReport, TurnRequest};
pub use subsystems::{ControlError, HeadingEstimator, TurnController};
