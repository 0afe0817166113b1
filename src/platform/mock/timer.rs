//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, PlatformError, Result};
use std::vec::Vec;

/// Mock Timer implementation
///
/// Uses simulated time: `delay_ms` advances the clock instantly and records
/// the requested duration.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delays: Vec<u32>,
    error: Option<PlatformError>,
}

impl MockTimer {
    /// Create a new mock timer starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock timer starting at `start_ms`
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            now_us: start_ms.saturating_mul(1000),
            delays: Vec::new(),
            error: None,
        }
    }

    /// Advance the clock without recording a delay
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_us = self.now_us.saturating_add(ms.saturating_mul(1000));
    }

    /// Every delay requested so far (ms)
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }

    /// Make every following delay fail with `error` (`None` clears it)
    ///
    /// Failed delays are recorded but do not advance the clock.
    pub fn set_error(&mut self, error: Option<PlatformError>) {
        self.error = error;
    }

    /// Forget recorded delays
    pub fn clear_delays(&mut self) {
        self.delays.clear();
    }
}

impl TimerInterface for MockTimer {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delays.push(ms);
        if let Some(err) = self.error {
            return Err(err);
        }
        self.advance_ms(ms as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::TimerError;

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_ms(1).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_ms(), 6);
        assert_eq!(timer.delays(), &[1, 5]);
    }

    #[test]
    fn test_mock_timer_error_injection() {
        let mut timer = MockTimer::starting_at(10);
        let err = PlatformError::Timer(TimerError::DelayFailed);
        timer.set_error(Some(err));

        assert_eq!(timer.delay_ms(20), Err(err));
        assert_eq!(timer.now_ms(), 10);
        assert_eq!(timer.delays(), &[20]);

        timer.set_error(None);
        timer.delay_ms(20).unwrap();
        assert_eq!(timer.now_ms(), 30);
    }

    #[test]
    fn test_mock_timer_advance_is_not_recorded() {
        let mut timer = MockTimer::starting_at(100);
        timer.advance_ms(50);
        assert_eq!(timer.now_ms(), 150);
        assert!(timer.delays().is_empty());
    }
}
