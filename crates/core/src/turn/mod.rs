//! Turn request types and phase decision rules
//!
//! A turn runs through four sequential phases:
//!
//! ```text
//! Reset -> CoarseApproach -> Brake -> FineCorrection -> Complete
//! ```
//!
//! The coarse approach runs at the requested speed and deliberately stops
//! `stop_early_buffer` degrees short of the target to absorb rotational
//! momentum. A short reverse pulse brakes the robot, and a bang-bang fine
//! correction at a fixed low speed closes the remaining gap, bounded by a
//! timeout.
//!
//! The functions here only decide; the blocking control loop that reads the
//! gyro and drives the motors lives in the `gyro_turn` crate.
//!
//! # Sign convention
//!
//! A left turn drives the right wheel forward, which the gyro reports as a
//! positive rate. The accumulated heading is therefore positive for left
//! turns and negative for right turns, and all comparisons use its
//! magnitude.

use crate::parameters::TurnParams;

/// Turn direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnDirection {
    /// Counter-clockwise seen from above
    Left,
    /// Clockwise seen from above
    Right,
}

impl TurnDirection {
    /// Opposite direction
    pub fn reversed(self) -> Self {
        match self {
            TurnDirection::Left => TurnDirection::Right,
            TurnDirection::Right => TurnDirection::Left,
        }
    }

    /// Wheel command that spins the robot in this direction at `speed`
    ///
    /// Left: left wheel backwards, right wheel forwards. Right: inverted.
    pub fn wheel_command(self, speed: f32) -> WheelCommand {
        let speed = libm::fabsf(speed);
        match self {
            TurnDirection::Left => WheelCommand::new(-speed, speed),
            TurnDirection::Right => WheelCommand::new(speed, -speed),
        }
    }

    /// Short name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
        }
    }
}

/// Left/right motor command pair (percent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelCommand {
    /// Left motor command
    pub left: f32,
    /// Right motor command
    pub right: f32,
}

impl WheelCommand {
    /// Create a command pair
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Same magnitude, opposite sign on both wheels
    pub fn reversed(self) -> Self {
        Self::new(-self.left, -self.right)
    }
}

/// A single turn request
///
/// Immutable for the duration of one turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnRequest {
    /// Direction to rotate
    pub direction: TurnDirection,
    /// Rotation to perform (degrees, positive)
    pub target_angle: f32,
    /// Requested speed; only the magnitude is used
    pub speed: f32,
}

impl TurnRequest {
    /// Create a turn request
    pub const fn new(direction: TurnDirection, target_angle: f32, speed: f32) -> Self {
        Self {
            direction,
            target_angle,
            speed,
        }
    }

    /// Whether the request can be executed
    ///
    /// The target must be finite and strictly positive; the speed must be
    /// finite (its sign is ignored).
    pub fn is_valid(&self) -> bool {
        self.target_angle.is_finite() && self.target_angle > 0.0 && self.speed.is_finite()
    }

    /// Absolute speed clamped to the configured window
    ///
    /// Never panics: with an inverted window the upper bound wins.
    pub fn clamped_speed(&self, params: &TurnParams) -> f32 {
        libm::fminf(
            libm::fmaxf(libm::fabsf(self.speed), params.min_speed),
            params.max_speed,
        )
    }
}

/// Phase of the turn currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnPhase {
    /// No turn running
    Idle,
    /// Heading and timer reset
    Reset,
    /// Full-speed open-loop rotation towards the early-stop point
    CoarseApproach,
    /// Reverse pulse, stop, settle
    Brake,
    /// Closed-loop bang-bang correction
    FineCorrection,
    /// Motors stopped, turn finished
    Complete,
}

impl TurnPhase {
    /// Short name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            TurnPhase::Idle => "idle",
            TurnPhase::Reset => "reset",
            TurnPhase::CoarseApproach => "coarse",
            TurnPhase::Brake => "brake",
            TurnPhase::FineCorrection => "fine",
            TurnPhase::Complete => "complete",
        }
    }
}

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnOutcome {
    /// Heading within tolerance of the target
    TargetReached,
    /// Fine correction hit its timeout before reaching tolerance
    CorrectionTimedOut,
}

impl TurnOutcome {
    /// Short name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            TurnOutcome::TargetReached => "target reached",
            TurnOutcome::CorrectionTimedOut => "correction timed out",
        }
    }
}

/// Summary of a completed turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    /// How the turn ended
    pub outcome: TurnOutcome,
    /// Estimated heading when the motors were stopped (degrees, signed)
    pub final_angle: f32,
    /// Clamped speed used for the coarse approach
    pub speed: f32,
    /// Iterations of the coarse-approach loop
    pub coarse_iterations: u32,
    /// Iterations of the fine-correction loop
    pub correction_iterations: u32,
    /// Wall-clock time spent in fine correction (ms)
    pub correction_elapsed_ms: u64,
}

impl TurnReport {
    /// Remaining error between the target and the achieved rotation (degrees)
    pub fn error_deg(&self, target_angle: f32) -> f32 {
        libm::fabsf(self.final_angle) - target_angle
    }
}

/// Degrees short of the target at which the coarse approach stops
///
/// Slower turns carry less momentum and use the smaller buffer.
pub fn stop_early_buffer(speed: f32, params: &TurnParams) -> f32 {
    if speed < params.slow_speed_threshold {
        params.slow_stop_early_buffer
    } else {
        params.stop_early_buffer
    }
}

/// Whether the coarse approach has rotated far enough
pub fn coarse_reached(current_angle: f32, target_angle: f32, buffer: f32) -> bool {
    libm::fabsf(current_angle) >= target_angle - buffer
}

/// Whether the heading is within `tolerance` of the target
pub fn within_tolerance(current_angle: f32, target_angle: f32, tolerance: f32) -> bool {
    libm::fabsf(libm::fabsf(current_angle) - target_angle) <= tolerance
}

/// Bang-bang correction command
///
/// Undershoot drives on in the turn direction; overshoot (or an exact hit)
/// drives back. The speed is the fixed correction speed, never the
/// requested one.
pub fn correction_command(
    direction: TurnDirection,
    current_angle: f32,
    target_angle: f32,
    correction_speed: f32,
) -> WheelCommand {
    if libm::fabsf(current_angle) < target_angle {
        direction.wheel_command(correction_speed)
    } else {
        direction.reversed().wheel_command(correction_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_command_signs() {
        assert_eq!(
            TurnDirection::Left.wheel_command(50.0),
            WheelCommand::new(-50.0, 50.0)
        );
        assert_eq!(
            TurnDirection::Right.wheel_command(50.0),
            WheelCommand::new(50.0, -50.0)
        );
        // Sign of the speed is ignored
        assert_eq!(
            TurnDirection::Left.wheel_command(-30.0),
            WheelCommand::new(-30.0, 30.0)
        );
    }

    #[test]
    fn test_wheel_command_reversed() {
        let cmd = TurnDirection::Left.wheel_command(40.0).reversed();
        assert_eq!(cmd, WheelCommand::new(40.0, -40.0));
        assert_eq!(cmd, TurnDirection::Right.wheel_command(40.0));
    }

    #[test]
    fn test_clamped_speed() {
        let params = TurnParams::default();
        assert_eq!(TurnRequest::new(TurnDirection::Left, 90.0, 5.0).clamped_speed(&params), 20.0);
        assert_eq!(
            TurnRequest::new(TurnDirection::Right, 90.0, 150.0).clamped_speed(&params),
            100.0
        );
        assert_eq!(
            TurnRequest::new(TurnDirection::Right, 90.0, -60.0).clamped_speed(&params),
            60.0
        );
    }

    #[test]
    fn test_clamped_speed_inverted_window() {
        let params = TurnParams {
            min_speed: 80.0,
            max_speed: 30.0,
            ..TurnParams::default()
        };
        let request = TurnRequest::new(TurnDirection::Left, 90.0, 50.0);
        assert_eq!(request.clamped_speed(&params), 30.0);
    }

    #[test]
    fn test_request_validation() {
        assert!(TurnRequest::new(TurnDirection::Left, 90.0, 50.0).is_valid());
        assert!(TurnRequest::new(TurnDirection::Left, 90.0, -50.0).is_valid());
        assert!(!TurnRequest::new(TurnDirection::Left, 0.0, 50.0).is_valid());
        assert!(!TurnRequest::new(TurnDirection::Left, -90.0, 50.0).is_valid());
        assert!(!TurnRequest::new(TurnDirection::Left, f32::NAN, 50.0).is_valid());
        assert!(!TurnRequest::new(TurnDirection::Left, 90.0, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_stop_early_buffer_by_speed() {
        let params = TurnParams::default();
        assert_eq!(stop_early_buffer(20.0, &params), 8.0);
        assert_eq!(stop_early_buffer(39.9, &params), 8.0);
        assert_eq!(stop_early_buffer(40.0, &params), 15.0);
        assert_eq!(stop_early_buffer(100.0, &params), 15.0);
    }

    #[test]
    fn test_coarse_reached_uses_magnitude() {
        assert!(!coarse_reached(74.9, 90.0, 15.0));
        assert!(coarse_reached(75.0, 90.0, 15.0));
        assert!(coarse_reached(-75.0, 90.0, 15.0));
        // Buffer larger than target finishes immediately
        assert!(coarse_reached(0.0, 10.0, 15.0));
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(89.0, 90.0, 1.0));
        assert!(within_tolerance(-91.0, 90.0, 1.0));
        assert!(!within_tolerance(88.9, 90.0, 1.0));
        assert!(!within_tolerance(-91.5, 90.0, 1.0));
    }

    #[test]
    fn test_correction_command_bang_bang() {
        // Left turn, undershoot: keep turning left
        assert_eq!(
            correction_command(TurnDirection::Left, 80.0, 90.0, 25.0),
            WheelCommand::new(-25.0, 25.0)
        );
        // Left turn, overshoot: turn back right
        assert_eq!(
            correction_command(TurnDirection::Left, 95.0, 90.0, 25.0),
            WheelCommand::new(25.0, -25.0)
        );
        // Right turn uses magnitude of the negative heading
        assert_eq!(
            correction_command(TurnDirection::Right, -80.0, 90.0, 25.0),
            WheelCommand::new(25.0, -25.0)
        );
        assert_eq!(
            correction_command(TurnDirection::Right, -92.0, 90.0, 25.0),
            WheelCommand::new(-25.0, 25.0)
        );
        // Exact hit counts as overshoot
        assert_eq!(
            correction_command(TurnDirection::Left, 90.0, 90.0, 25.0),
            WheelCommand::new(25.0, -25.0)
        );
    }

    #[test]
    fn test_report_error() {
        let report = TurnReport {
            outcome: TurnOutcome::TargetReached,
            final_angle: -89.5,
            speed: 50.0,
            coarse_iterations: 10,
            correction_iterations: 3,
            correction_elapsed_ms: 60,
        };
        assert!(libm::fabsf(report.error_deg(90.0) - (-0.5)) < 1e-6);
    }
}
