//! Motor driver abstraction
//!
//! This module provides a zero-cost abstraction for the two motors of a
//! differential-drive robot driven through H-bridges.
//!
//! # Features
//!
//! - Platform-independent `Motor` trait for a single DC motor
//! - H-bridge motor driver implementation (DRV8837 2-pin PWM control)
//! - `DifferentialDrive` trait taking left/right commands in percent
//! - `MotorPair` combining two motors into a differential drive
//!
//! # Design
//!
//! This module is pure `no_std`. Platform-specific PWM implementations
//! belong in the `gyro_turn` crate.

/// Full-scale drive command in percent
pub const FULL_SCALE_PERCENT: f32 = 100.0;

/// Motor control error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Speed value outside the accepted range
    InvalidSpeed,
    /// Hardware PWM channel unavailable or failed
    HardwareFault,
}

impl core::fmt::Display for MotorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MotorError::InvalidSpeed => write!(f, "motor speed out of range"),
            MotorError::HardwareFault => write!(f, "motor hardware fault"),
        }
    }
}

/// PWM pin abstraction for motor control
///
/// Platform-specific implementations wrap their HAL's PWM types.
pub trait PwmPin {
    /// Set PWM duty cycle as a fraction [0.0, 1.0]
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if PWM hardware fails.
    fn set_duty(&mut self, duty: f32) -> Result<(), MotorError>;
}

/// Motor control trait (platform-independent)
///
/// Speed values are normalized to [-1.0, +1.0]:
/// - `+1.0` = full forward
/// - `0.0` = stopped
/// - `-1.0` = full reverse
pub trait Motor {
    /// Set motor speed and direction
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidSpeed` if speed is outside [-1.0, +1.0] range.
    /// Returns `MotorError::HardwareFault` if PWM hardware fails.
    fn set_speed(&mut self, speed: f32) -> Result<(), MotorError>;

    /// Stop motor (coast mode - high-Z state)
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if PWM hardware fails.
    fn stop(&mut self) -> Result<(), MotorError>;

    /// Brake motor (short brake - active braking)
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if PWM hardware fails.
    fn brake(&mut self) -> Result<(), MotorError>;
}

/// Left/right motor actuator of a differential-drive robot
///
/// Commands are in percent of full scale, [-100.0, +100.0]. Only the sign
/// (direction) and magnitude (intensity) matter to callers; the mapping to
/// wheel speed is up to the implementation.
pub trait DifferentialDrive {
    /// Command both motors at once
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidSpeed` if a command is outside
    /// [-100.0, +100.0] or not finite.
    /// Returns `MotorError::HardwareFault` if motor hardware fails.
    fn set_motors(&mut self, left: f32, right: f32) -> Result<(), MotorError>;

    /// Stop both motors
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if motor hardware fails.
    fn stop_all(&mut self) -> Result<(), MotorError>;
}

/// DRV8837 H-bridge motor driver
///
/// Generic motor driver for H-bridges controlled by two PWM pins (IN1, IN2).
///
/// # DRV8837 Truth Table
///
/// | IN1 | IN2 | Motor State                                |
/// |-----|-----|--------------------------------------------|
/// | 0   | 0   | Coast (High-Z, motor freewheels)           |
/// | PWM | 0   | Forward (speed = PWM duty cycle)           |
/// | 0   | PWM | Reverse (speed = PWM duty cycle)           |
/// | 1   | 1   | Brake (short brake, both terminals to GND) |
pub struct HBridgeMotor<IN1, IN2>
where
    IN1: PwmPin,
    IN2: PwmPin,
{
    in1: IN1,
    in2: IN2,
}

impl<IN1, IN2> HBridgeMotor<IN1, IN2>
where
    IN1: PwmPin,
    IN2: PwmPin,
{
    /// Create new H-bridge motor with initialized PWM pins
    ///
    /// The motor is left in whatever state the pins are in; call
    /// [`Motor::stop`] to force coast.
    pub fn new(in1: IN1, in2: IN2) -> Self {
        Self { in1, in2 }
    }

    /// Get reference to IN1 pin
    pub fn in1(&self) -> &IN1 {
        &self.in1
    }

    /// Get reference to IN2 pin
    pub fn in2(&self) -> &IN2 {
        &self.in2
    }
}

impl<IN1, IN2> Motor for HBridgeMotor<IN1, IN2>
where
    IN1: PwmPin,
    IN2: PwmPin,
{
    #[inline]
    fn set_speed(&mut self, speed: f32) -> Result<(), MotorError> {
        if !(-1.0..=1.0).contains(&speed) {
            return Err(MotorError::InvalidSpeed);
        }

        if speed > 0.0 {
            self.in1.set_duty(speed)?;
            self.in2.set_duty(0.0)?;
        } else if speed < 0.0 {
            self.in1.set_duty(0.0)?;
            self.in2.set_duty(libm::fabsf(speed))?;
        } else {
            self.in1.set_duty(0.0)?;
            self.in2.set_duty(0.0)?;
        }
        Ok(())
    }

    #[inline]
    fn stop(&mut self) -> Result<(), MotorError> {
        self.in1.set_duty(0.0)?;
        self.in2.set_duty(0.0)?;
        Ok(())
    }

    #[inline]
    fn brake(&mut self) -> Result<(), MotorError> {
        self.in1.set_duty(1.0)?;
        self.in2.set_duty(1.0)?;
        Ok(())
    }
}

/// Two motors forming a differential drive
///
/// Percent commands are scaled to the normalized motor range. Motors that
/// are mounted mirrored can be inverted per side.
pub struct MotorPair<L: Motor, R: Motor> {
    left: L,
    right: R,
    invert_left: bool,
    invert_right: bool,
}

impl<L: Motor, R: Motor> MotorPair<L, R> {
    /// Create a motor pair with both motors in their natural direction
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            invert_left: false,
            invert_right: false,
        }
    }

    /// Reverse the direction of either side
    pub fn with_inversion(mut self, invert_left: bool, invert_right: bool) -> Self {
        self.invert_left = invert_left;
        self.invert_right = invert_right;
        self
    }

    /// Get reference to the left motor
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Get reference to the right motor
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Brake both motors (active braking)
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if either motor fails.
    pub fn brake_all(&mut self) -> Result<(), MotorError> {
        self.left.brake()?;
        self.right.brake()?;
        Ok(())
    }
}

/// Convert a percent command to a normalized motor speed
#[inline]
fn percent_to_speed(percent: f32, inverted: bool) -> Result<f32, MotorError> {
    if !percent.is_finite() || libm::fabsf(percent) > FULL_SCALE_PERCENT {
        return Err(MotorError::InvalidSpeed);
    }
    let speed = percent / FULL_SCALE_PERCENT;
    Ok(if inverted { -speed } else { speed })
}

impl<L: Motor, R: Motor> DifferentialDrive for MotorPair<L, R> {
    #[inline]
    fn set_motors(&mut self, left: f32, right: f32) -> Result<(), MotorError> {
        // Validate both before touching either motor
        let left_speed = percent_to_speed(left, self.invert_left)?;
        let right_speed = percent_to_speed(right, self.invert_right)?;

        self.left.set_speed(left_speed)?;
        self.right.set_speed(right_speed)?;
        Ok(())
    }

    #[inline]
    fn stop_all(&mut self) -> Result<(), MotorError> {
        self.left.stop()?;
        self.right.stop()?;
        Ok(())
    }
}
