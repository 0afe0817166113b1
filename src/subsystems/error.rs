//! Control subsystem errors

use crate::devices::traits::GyroError;
use crate::platform::PlatformError;
use core::fmt;
use gyro_turn_core::motor::MotorError;

/// Errors returned by calibration, turning and driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// `turn` was called before a successful calibration
    NotCalibrated,
    /// Gyro could not be configured or read
    SensorUnavailable(GyroError),
    /// Motor command failed
    Motor(MotorError),
    /// Pause failed
    Timer(PlatformError),
    /// Target or speed out of range
    InvalidRequest,
}

impl ControlError {
    /// Short name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlError::NotCalibrated => "not calibrated",
            ControlError::SensorUnavailable(_) => "sensor unavailable",
            ControlError::Motor(_) => "motor failure",
            ControlError::Timer(_) => "timer failure",
            ControlError::InvalidRequest => "invalid request",
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::NotCalibrated => write!(f, "Gyro not calibrated"),
            ControlError::SensorUnavailable(e) => write!(f, "Sensor unavailable: {}", e),
            ControlError::Motor(e) => write!(f, "Motor error: {}", e),
            ControlError::Timer(e) => write!(f, "Timer error: {}", e),
            ControlError::InvalidRequest => write!(f, "Invalid turn request"),
        }
    }
}

impl From<GyroError> for ControlError {
    fn from(error: GyroError) -> Self {
        ControlError::SensorUnavailable(error)
    }
}

impl From<MotorError> for ControlError {
    fn from(error: MotorError) -> Self {
        ControlError::Motor(error)
    }
}

impl From<PlatformError> for ControlError {
    fn from(error: PlatformError) -> Self {
        ControlError::Timer(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::TimerError;

    #[test]
    fn test_conversions() {
        assert_eq!(
            ControlError::from(GyroError::I2cError),
            ControlError::SensorUnavailable(GyroError::I2cError)
        );
        assert_eq!(
            ControlError::from(MotorError::HardwareFault),
            ControlError::Motor(MotorError::HardwareFault)
        );
        assert_eq!(
            ControlError::from(PlatformError::Timer(TimerError::DelayFailed)),
            ControlError::Timer(PlatformError::Timer(TimerError::DelayFailed))
        );
    }

    #[test]
    fn test_display() {
        let msg = std::format!("{}", ControlError::SensorUnavailable(GyroError::NotInitialized));
        assert_eq!(msg, "Sensor unavailable: Gyro not initialized");
    }
}
