//! `embedded-hal` 1.0 adapters
//!
//! Wrap any HAL that implements the blocking `embedded-hal` 1.0 traits so it
//! can drive the gyro, the motor driver and the control loop timing:
//!
//! | Adapter       | Wraps                            | Provides           |
//! |---------------|----------------------------------|--------------------|
//! | [`HalI2c`]    | `embedded_hal::i2c::I2c`         | [`I2cInterface`]   |
//! | [`HalPwm`]    | `embedded_hal::pwm::SetDutyCycle`| [`PwmInterface`]   |
//! | [`HalTimer`]  | `embedded_hal::delay::DelayNs`   | [`TimerInterface`] |
//!
//! [`I2cInterface`]: crate::platform::traits::I2cInterface
//! [`PwmInterface`]: crate::platform::traits::PwmInterface
//! [`TimerInterface`]: crate::platform::traits::TimerInterface

mod i2c;
mod pwm;
mod timer;

pub use i2c::HalI2c;
pub use pwm::HalPwm;
pub use timer::HalTimer;
