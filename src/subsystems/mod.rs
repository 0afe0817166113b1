//! Control subsystems
//!
//! - `heading`: gyro bias calibration and heading integration
//! - `turn`: gyro-stabilised turn controller and timed straight driving
//! - `error`: errors surfaced by both

pub mod error;
pub mod heading;
pub mod turn;

pub use error::ControlError;
pub use heading::HeadingEstimator;
pub use turn::TurnController;
