//! PWM-backed H-bridge motors
//!
//! Wires platform PWM channels into the motor abstractions from
//! `gyro_turn_core::motor`. Each motor takes two channels (IN1, IN2) of a
//! DRV8837-style H-bridge.
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_turn::devices::motor::hbridge_drive;
//! use gyro_turn_core::motor::DifferentialDrive;
//!
//! let mut drive = hbridge_drive(left_in1, left_in2, right_in1, right_in2);
//! drive.set_motors(-50.0, 50.0)?; // spin left
//! drive.stop_all()?;
//! ```

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::PwmInterface,
};
use gyro_turn_core::motor::{HBridgeMotor, MotorError, MotorPair, PwmPin};

/// Platform PWM channel used as an H-bridge input
pub struct PwmChannel<P> {
    pwm: P,
}

impl<P: PwmInterface> PwmChannel<P> {
    /// Wrap a PWM channel
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Borrow the underlying channel
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

impl<P: PwmInterface> PwmPin for PwmChannel<P> {
    fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        self.pwm.set_duty_cycle(duty).map_err(map_pwm_error)
    }
}

/// Map platform PWM failures to motor errors
fn map_pwm_error(error: PlatformError) -> MotorError {
    match error {
        PlatformError::Pwm(PwmError::InvalidDutyCycle) => MotorError::InvalidSpeed,
        _ => MotorError::HardwareFault,
    }
}

/// H-bridge motor on two platform PWM channels
pub type PwmMotor<P> = HBridgeMotor<PwmChannel<P>, PwmChannel<P>>;

/// Differential drive built from two PWM H-bridge motors
pub type PwmDrive<P> = MotorPair<PwmMotor<P>, PwmMotor<P>>;

/// Build a differential drive from four PWM channels
///
/// Both motors run in their natural direction; use
/// [`MotorPair::with_inversion`] for mirrored mounting.
pub fn hbridge_drive<P: PwmInterface>(
    left_in1: P,
    left_in2: P,
    right_in1: P,
    right_in2: P,
) -> PwmDrive<P> {
    MotorPair::new(
        HBridgeMotor::new(PwmChannel::new(left_in1), PwmChannel::new(left_in2)),
        HBridgeMotor::new(PwmChannel::new(right_in1), PwmChannel::new(right_in2)),
    )
}
