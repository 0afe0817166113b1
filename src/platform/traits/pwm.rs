//! PWM interface trait

use crate::platform::Result;

/// Single PWM output channel
///
/// Duty cycle is expressed as a fraction in `0.0..=1.0`.
pub trait PwmInterface {
    /// Set duty cycle
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the value
    /// is outside `0.0..=1.0`.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Current duty cycle
    fn duty_cycle(&self) -> f32;
}
