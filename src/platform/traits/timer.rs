//! Timer interface trait

use crate::platform::Result;

/// Blocking delays and a monotonic clock
///
/// The clock starts at an arbitrary epoch and never goes backwards.
pub trait TimerInterface {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Monotonic time since the timer epoch (microseconds)
    fn now_us(&self) -> u64;

    /// Monotonic time since the timer epoch (milliseconds)
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
