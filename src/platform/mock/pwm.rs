//! Mock PWM implementation for testing

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::PwmInterface,
    Result,
};

/// Mock PWM implementation
///
/// Tracks the duty cycle for test verification.
#[derive(Debug, Default)]
pub struct MockPwm {
    duty_cycle: f32,
    updates: u32,
}

impl MockPwm {
    /// Create a new mock PWM at 0% duty
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful duty cycle updates
    pub fn updates(&self) -> u32 {
        self.updates
    }
}

impl PwmInterface for MockPwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        self.updates += 1;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pwm_duty_cycle() {
        let mut pwm = MockPwm::new();
        assert_eq!(pwm.duty_cycle(), 0.0);

        pwm.set_duty_cycle(0.5).unwrap();
        assert_eq!(pwm.duty_cycle(), 0.5);
        assert_eq!(pwm.updates(), 1);

        // Test invalid duty cycle
        assert!(pwm.set_duty_cycle(-0.1).is_err());
        assert!(pwm.set_duty_cycle(1.1).is_err());
        assert_eq!(pwm.duty_cycle(), 0.5);
    }
}
