//! Gyro-stabilised turn controller
//!
//! Owns the heading estimator, the differential drive, the timer and the
//! status indicator, and runs each turn as a blocking sequence:
//!
//! 1. **Reset**: heading zeroed at the current time.
//! 2. **Coarse approach**: spin at the clamped speed until the heading is
//!    within the stop-early buffer of the target.
//! 3. **Brake**: reverse pulse, stop, settle. The heading is not sampled here;
//!    the first correction sample integrates across the gap.
//! 4. **Fine correction**: bang-bang at the correction speed until the
//!    heading is within tolerance or the correction timeout expires.
//!
//! Every loop iteration is sensor read, integrate, command, pause.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = TurnController::new(
//!     HeadingEstimator::new(gyro, GyroParams::default()),
//!     drive,
//!     timer,
//!     indicator,
//!     TurnParams::default(),
//!     DriveParams::default(),
//! );
//!
//! controller.calibrate()?;
//! let report = controller.turn(TurnDirection::Left, 90.0, 50.0)?;
//! controller.drive_distance(30.0)?;
//! ```

use crate::devices::traits::{RateSensor, StatusIndicator, StatusPattern};
use crate::platform::traits::TimerInterface;
use crate::subsystems::error::ControlError;
use crate::subsystems::heading::HeadingEstimator;
use gyro_turn_core::motor::DifferentialDrive;
use gyro_turn_core::parameters::{DriveParams, GyroParams, ParameterStore, TurnParams};
use gyro_turn_core::turn::{
    coarse_reached, correction_command, stop_early_buffer, within_tolerance, TurnDirection,
    TurnOutcome, TurnPhase, TurnReport, TurnRequest,
};

/// Turn controller for a two-motor differential-drive robot
pub struct TurnController<S, D, T, L> {
    estimator: HeadingEstimator<S>,
    drive: D,
    timer: T,
    indicator: L,
    turn_params: TurnParams,
    drive_params: DriveParams,
    phase: TurnPhase,
}

impl<S, D, T, L> TurnController<S, D, T, L>
where
    S: RateSensor,
    D: DifferentialDrive,
    T: TimerInterface,
    L: StatusIndicator,
{
    /// Create a controller; the estimator still needs calibrating
    pub fn new(
        estimator: HeadingEstimator<S>,
        drive: D,
        timer: T,
        indicator: L,
        turn_params: TurnParams,
        drive_params: DriveParams,
    ) -> Self {
        Self {
            estimator,
            drive,
            timer,
            indicator,
            turn_params,
            drive_params,
            phase: TurnPhase::Idle,
        }
    }

    /// Create a controller with every tunable loaded from a parameter store
    pub fn from_store(sensor: S, drive: D, timer: T, indicator: L, store: &ParameterStore) -> Self {
        Self::new(
            HeadingEstimator::new(sensor, GyroParams::from_store(store)),
            drive,
            timer,
            indicator,
            TurnParams::from_store(store),
            DriveParams::from_store(store),
        )
    }

    /// Wake and calibrate the gyro; the robot must stay still
    ///
    /// # Returns
    ///
    /// The measured bias (deg/s)
    pub fn calibrate(&mut self) -> Result<f32, ControlError> {
        self.estimator.calibrate(&mut self.timer, &mut self.indicator)
    }

    /// Rotate in place by `target_angle` degrees
    ///
    /// Only the magnitude of `speed` is used, clamped to the configured
    /// speed window. Blocks until the turn finishes.
    ///
    /// A correction timeout is not an error: it is reported as
    /// [`TurnOutcome::CorrectionTimedOut`].
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` for a non-positive or non-finite target, a
    ///   non-finite speed, or turn parameters that fail
    ///   [`TurnParams::is_valid`]
    /// - `NotCalibrated` before a successful [`calibrate`](Self::calibrate)
    /// - `SensorUnavailable`, `Motor` or `Timer` if a collaborator fails
    ///   mid-turn; the motors are stopped on a best-effort basis first
    pub fn turn(
        &mut self,
        direction: TurnDirection,
        target_angle: f32,
        speed: f32,
    ) -> Result<TurnReport, ControlError> {
        self.execute(&TurnRequest::new(direction, target_angle, speed))
    }

    /// Run a prepared turn request
    pub fn execute(&mut self, request: &TurnRequest) -> Result<TurnReport, ControlError> {
        if !request.is_valid() {
            crate::log_warn!(
                "Rejected turn: target {} deg, speed {}",
                request.target_angle,
                request.speed
            );
            return Err(ControlError::InvalidRequest);
        }
        if !self.turn_params.is_valid() {
            crate::log_warn!(
                "Rejected turn: invalid parameters (speed window {} to {})",
                self.turn_params.min_speed,
                self.turn_params.max_speed
            );
            return Err(ControlError::InvalidRequest);
        }
        if !self.estimator.is_calibrated() {
            crate::log_warn!("Rejected turn: gyro not calibrated");
            return Err(ControlError::NotCalibrated);
        }

        match self.run_turn(request) {
            Ok(report) => {
                crate::log_info!(
                    "Turn {}: {} deg after {} ms of correction",
                    report.outcome.as_str(),
                    report.final_angle,
                    report.correction_elapsed_ms
                );
                Ok(report)
            }
            Err(e) => {
                crate::log_error!(
                    "Turn aborted in {} phase: {}",
                    self.phase.as_str(),
                    e.as_str()
                );
                // Best effort stop; the turn error takes precedence
                let _ = self.drive.stop_all();
                self.indicator.clear();
                self.phase = TurnPhase::Idle;
                Err(e)
            }
        }
    }

    fn run_turn(&mut self, request: &TurnRequest) -> Result<TurnReport, ControlError> {
        let params = self.turn_params;
        let target = request.target_angle;
        let speed = request.clamped_speed(&params);
        let buffer = stop_early_buffer(speed, &params);
        let command = request.direction.wheel_command(speed);

        self.enter(TurnPhase::Reset);
        self.estimator.reset(self.timer.now_ms());
        crate::log_info!(
            "Turn {} {} deg at speed {} (stop early {} deg)",
            request.direction.as_str(),
            target,
            speed,
            buffer
        );

        self.enter(TurnPhase::CoarseApproach);
        self.drive.set_motors(command.left, command.right)?;
        let mut coarse_iterations = 0u32;
        while !coarse_reached(self.estimator.current_angle(), target, buffer) {
            self.estimator.update_angle(self.timer.now_ms())?;
            coarse_iterations += 1;
            self.timer.delay_ms(params.coarse_period_ms)?;
        }

        self.enter(TurnPhase::Brake);
        let brake = command.reversed();
        self.drive.set_motors(brake.left, brake.right)?;
        self.timer.delay_ms(params.brake_ms)?;
        self.drive.stop_all()?;
        self.timer.delay_ms(params.settle_ms)?;

        self.enter(TurnPhase::FineCorrection);
        let fix_start = self.timer.now_ms();
        let timeout = params.correction_timeout_ms as u64;
        let mut correction_iterations = 0u32;
        while !within_tolerance(self.estimator.current_angle(), target, params.tolerance_deg)
            && self.timer.now_ms().saturating_sub(fix_start) < timeout
        {
            let angle = self.estimator.update_angle(self.timer.now_ms())?;
            let fix = correction_command(request.direction, angle, target, params.correction_speed);
            self.drive.set_motors(fix.left, fix.right)?;
            correction_iterations += 1;
            self.timer.delay_ms(params.fine_period_ms)?;
        }
        let correction_elapsed_ms = self.timer.now_ms().saturating_sub(fix_start);

        self.drive.stop_all()?;
        self.indicator.clear();

        let final_angle = self.estimator.current_angle();
        let outcome = if within_tolerance(final_angle, target, params.tolerance_deg) {
            TurnOutcome::TargetReached
        } else {
            crate::log_warn!(
                "Correction timed out {} deg from target",
                libm::fabsf(final_angle) - target
            );
            TurnOutcome::CorrectionTimedOut
        };
        self.enter(TurnPhase::Complete);

        Ok(TurnReport {
            outcome,
            final_angle,
            speed,
            coarse_iterations,
            correction_iterations,
            correction_elapsed_ms,
        })
    }

    /// Drive straight for `distance_cm` without feedback
    ///
    /// Both motors run at the cruise speed for the time the measured ground
    /// speed needs to cover the distance, then stop. Negative distances
    /// drive backwards. Calibration is not required.
    ///
    /// # Returns
    ///
    /// The run time (ms)
    ///
    /// # Errors
    ///
    /// `InvalidRequest` for a non-finite distance, drive parameters that
    /// fail [`DriveParams::is_valid`], or a run time beyond `u32::MAX` ms.
    pub fn drive_distance(&mut self, distance_cm: f32) -> Result<u32, ControlError> {
        if !distance_cm.is_finite() || !self.drive_params.is_valid() {
            crate::log_warn!("Rejected drive: {} cm", distance_cm);
            return Err(ControlError::InvalidRequest);
        }
        let Some(duration_ms) = self.drive_params.duration_ms(distance_cm) else {
            crate::log_warn!("Rejected drive: {} cm is out of range", distance_cm);
            return Err(ControlError::InvalidRequest);
        };
        let speed = if distance_cm < 0.0 {
            -self.drive_params.cruise_speed
        } else {
            self.drive_params.cruise_speed
        };
        crate::log_info!("Drive {} cm at {} for {} ms", distance_cm, speed, duration_ms);

        let result = self.run_drive(speed, duration_ms);
        if let Err(e) = result {
            crate::log_error!("Drive aborted: {}", e.as_str());
            let _ = self.drive.stop_all();
            return Err(e);
        }
        Ok(duration_ms)
    }

    fn run_drive(&mut self, speed: f32, duration_ms: u32) -> Result<(), ControlError> {
        self.drive.set_motors(speed, speed)?;
        self.timer.delay_ms(duration_ms)?;
        self.drive.stop_all()?;
        Ok(())
    }

    /// Show the car logo on the status indicator
    pub fn show_logo(&mut self) {
        self.indicator.show(StatusPattern::Logo);
    }

    fn enter(&mut self, phase: TurnPhase) {
        self.phase = phase;
        crate::log_debug!("Turn phase: {}", phase.as_str());
    }

    /// Phase of the current or most recent turn
    ///
    /// `Complete` after a finished turn, `Idle` before the first turn and
    /// after an aborted one.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Heading estimator
    pub fn estimator(&self) -> &HeadingEstimator<S> {
        &self.estimator
    }

    /// Mutable heading estimator
    pub fn estimator_mut(&mut self) -> &mut HeadingEstimator<S> {
        &mut self.estimator
    }

    /// Differential drive
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Timer
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Status indicator
    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Turn parameters
    pub fn turn_params(&self) -> &TurnParams {
        &self.turn_params
    }

    /// Replace the turn parameters
    pub fn set_turn_params(&mut self, params: TurnParams) {
        self.turn_params = params;
    }

    /// Distance drive parameters
    pub fn drive_params(&self) -> &DriveParams {
        &self.drive_params
    }
}
