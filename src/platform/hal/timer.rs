//! Delay and clock adapter

use crate::platform::{traits::TimerInterface, Result};
use embedded_hal::delay::DelayNs;

/// `embedded-hal` delay provider plus a monotonic clock as a [`TimerInterface`]
///
/// `embedded-hal` 1.0 has no clock trait, so the monotonic microsecond
/// counter is supplied as a function (typically reading the board's
/// free-running timer).
pub struct HalTimer<D, C> {
    delay: D,
    clock: C,
}

impl<D, C> HalTimer<D, C>
where
    D: DelayNs,
    C: Fn() -> u64,
{
    /// Combine a delay provider with a microsecond clock
    pub fn new(delay: D, clock: C) -> Self {
        Self { delay, clock }
    }
}

impl<D, C> TimerInterface for HalTimer<D, C>
where
    D: DelayNs,
    C: Fn() -> u64,
{
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay.delay_ms(ms);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        (self.clock)()
    }
}
