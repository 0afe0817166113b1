//! PWM channel adapter

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::PwmInterface,
    Result,
};
use embedded_hal::pwm::SetDutyCycle;

/// `embedded-hal` PWM channel as a [`PwmInterface`]
///
/// Fractional duty cycles are scaled to the channel's compare range.
pub struct HalPwm<P> {
    channel: P,
    duty_cycle: f32,
}

impl<P: SetDutyCycle> HalPwm<P> {
    /// Wrap a configured PWM channel
    pub fn new(channel: P) -> Self {
        Self {
            channel,
            duty_cycle: 0.0,
        }
    }

    /// Release the wrapped channel
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> PwmInterface for HalPwm<P> {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }

        let max = self.channel.max_duty_cycle();
        let compare = libm::roundf(duty_cycle * max as f32) as u16;
        self.channel
            .set_duty_cycle(compare)
            .map_err(|_| PlatformError::Pwm(PwmError::ChannelUnavailable))?;

        self.duty_cycle = duty_cycle;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }
}
