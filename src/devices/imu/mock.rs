//! Mock gyro implementation for testing
//!
//! Provides a configurable mock gyro that implements the `RateSensor` trait.
//!
//! ## Usage
//!
//! ```ignore
//! use gyro_turn::devices::imu::MockGyro;
//! use gyro_turn::devices::traits::RateSensor;
//!
//! // Constant rate
//! let mut gyro = MockGyro::with_rate(0.5);
//!
//! // Sequence of rates, then the default
//! let mut gyro = MockGyro::with_rates(&[1.0, 2.0, 3.0]);
//!
//! gyro.wake()?;
//! let rate = gyro.read_rate()?;
//! ```

use crate::devices::traits::{GyroError, RateSensor};

/// Capacity of the scripted rate queue
pub const MOCK_GYRO_QUEUE: usize = 64;

/// Mock gyro for testing
///
/// Returns queued rates in order, then the default rate. Reads fail with
/// `NotInitialized` until `wake` and with `I2cError` while unhealthy.
pub struct MockGyro {
    /// Queue of rates to return (deg/s)
    rates: heapless::Deque<f32, MOCK_GYRO_QUEUE>,

    /// Rate returned when the queue is empty
    default_rate: f32,

    /// Health status (can be set for testing error handling)
    healthy: bool,

    /// Whether `wake` has been called
    awake: bool,

    /// Number of `wake` calls
    wake_count: u32,

    /// Number of successful reads
    read_count: u32,
}

impl MockGyro {
    /// Create a mock gyro that always reports `rate`
    pub fn with_rate(rate: f32) -> Self {
        Self {
            rates: heapless::Deque::new(),
            default_rate: rate,
            healthy: true,
            awake: false,
            wake_count: 0,
            read_count: 0,
        }
    }

    /// Create a mock gyro with a sequence of rates, then zero
    ///
    /// Rates beyond the queue capacity are dropped.
    pub fn with_rates(rates: &[f32]) -> Self {
        let mut gyro = Self::with_rate(0.0);
        for rate in rates.iter().take(MOCK_GYRO_QUEUE) {
            let _ = gyro.rates.push_back(*rate);
        }
        gyro
    }

    /// Set the rate returned when the queue is empty
    pub fn set_default_rate(&mut self, rate: f32) {
        self.default_rate = rate;
    }

    /// Push a rate onto the queue
    pub fn push_rate(&mut self, rate: f32) -> Result<(), f32> {
        self.rates.push_back(rate)
    }

    /// Set health status (for testing error handling)
    pub fn set_healthy(&mut self, healthy: bool) {
        self.healthy = healthy;
    }

    /// Number of `wake` calls so far
    pub fn wake_count(&self) -> u32 {
        self.wake_count
    }

    /// Number of successful reads so far
    pub fn read_count(&self) -> u32 {
        self.read_count
    }
}

impl RateSensor for MockGyro {
    fn wake(&mut self) -> Result<(), GyroError> {
        self.wake_count += 1;
        if !self.healthy {
            return Err(GyroError::I2cError);
        }
        self.awake = true;
        Ok(())
    }

    fn read_rate(&mut self) -> Result<f32, GyroError> {
        if !self.awake {
            return Err(GyroError::NotInitialized);
        }
        if !self.healthy {
            return Err(GyroError::I2cError);
        }

        self.read_count += 1;
        Ok(self.rates.pop_front().unwrap_or(self.default_rate))
    }

    fn is_healthy(&self) -> bool {
        self.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gyro_requires_wake() {
        let mut gyro = MockGyro::with_rate(1.0);
        assert_eq!(gyro.read_rate(), Err(GyroError::NotInitialized));
        gyro.wake().unwrap();
        assert_eq!(gyro.read_rate(), Ok(1.0));
        assert_eq!(gyro.wake_count(), 1);
    }

    #[test]
    fn test_mock_gyro_queue_then_default() {
        let mut gyro = MockGyro::with_rates(&[1.0, 2.0]);
        gyro.set_default_rate(-0.5);
        gyro.wake().unwrap();

        assert_eq!(gyro.read_rate(), Ok(1.0));
        assert_eq!(gyro.read_rate(), Ok(2.0));
        assert_eq!(gyro.read_rate(), Ok(-0.5));
        assert_eq!(gyro.read_count(), 3);
    }

    #[test]
    fn test_mock_gyro_unhealthy() {
        let mut gyro = MockGyro::with_rate(0.0);
        gyro.wake().unwrap();
        gyro.set_healthy(false);

        assert_eq!(gyro.read_rate(), Err(GyroError::I2cError));
        assert!(!gyro.is_healthy());
        assert_eq!(gyro.read_count(), 0);
    }
}
