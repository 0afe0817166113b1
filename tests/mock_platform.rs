//! Controller wired to the mock platform through the public API
//!
//! Requires the `mock` feature.

use gyro_turn::devices::imu::MockGyro;
use gyro_turn::devices::indicator::{IndicatorEvent, MockIndicator};
use gyro_turn::devices::motor::{hbridge_drive, PwmDrive};
use gyro_turn::devices::traits::StatusPattern;
use gyro_turn::platform::mock::{MockPwm, MockTimer};
use gyro_turn::platform::PwmInterface;
use gyro_turn::{
    ControlError, DriveParams, GyroParams, HeadingEstimator, TurnController, TurnDirection,
    TurnOutcome, TurnParams, TurnPhase,
};

type MockController = TurnController<MockGyro, PwmDrive<MockPwm>, MockTimer, MockIndicator>;

fn controller() -> MockController {
    TurnController::new(
        HeadingEstimator::new(MockGyro::with_rate(0.0), GyroParams::default()),
        hbridge_drive(MockPwm::new(), MockPwm::new(), MockPwm::new(), MockPwm::new()),
        MockTimer::new(),
        MockIndicator::new(),
        TurnParams::default(),
        DriveParams::default(),
    )
}

fn duties(controller: &MockController) -> [f32; 4] {
    let drive = controller.drive();
    [
        drive.left().in1().pwm().duty_cycle(),
        drive.left().in2().pwm().duty_cycle(),
        drive.right().in1().pwm().duty_cycle(),
        drive.right().in2().pwm().duty_cycle(),
    ]
}

#[test]
fn test_turn_before_calibration_is_rejected() {
    let mut controller = controller();
    assert_eq!(
        controller.turn(TurnDirection::Left, 90.0, 50.0),
        Err(ControlError::NotCalibrated)
    );
    assert_eq!(controller.phase(), TurnPhase::Idle);
    assert_eq!(duties(&controller), [0.0; 4]);
}

#[test]
fn test_calibration_shows_patterns() {
    let mut controller = controller();
    let bias = controller.calibrate().unwrap();

    assert_eq!(bias, 0.0);
    assert_eq!(
        controller.indicator().events(),
        &[
            IndicatorEvent::Show(StatusPattern::Calibrating),
            IndicatorEvent::Show(StatusPattern::Ready),
        ]
    );
}

#[test]
fn test_runaway_gyro_times_out_with_motors_stopped() {
    let mut controller = controller();
    controller.calibrate().unwrap();
    // Robot keeps spinning left no matter what the motors are told
    controller
        .estimator_mut()
        .sensor_mut()
        .set_default_rate(100.0);

    let report = controller.turn(TurnDirection::Left, 90.0, 50.0).unwrap();

    assert_eq!(report.outcome, TurnOutcome::CorrectionTimedOut);
    assert!(report.final_angle > 91.0);
    assert!(report.correction_elapsed_ms >= 3000);
    assert_eq!(report.speed, 50.0);
    assert_eq!(controller.phase(), TurnPhase::Complete);
    assert_eq!(controller.indicator().last(), Some(IndicatorEvent::Clear));
    assert_eq!(duties(&controller), [0.0; 4]);
}

#[test]
fn test_drive_distance_and_logo() {
    let mut controller = controller();
    controller.show_logo();

    let elapsed = controller.drive_distance(30.0).unwrap();

    assert_eq!(elapsed, 1000);
    assert!(controller.timer().delays().contains(&1000));
    assert_eq!(duties(&controller), [0.0; 4]);
    assert_eq!(
        controller.indicator().last(),
        Some(IndicatorEvent::Show(StatusPattern::Logo))
    );
}
