//! Status indicator implementations

pub use crate::devices::traits::{StatusIndicator, StatusPattern};

/// Indicator that discards everything
///
/// For robots without a display.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIndicator;

impl StatusIndicator for NoopIndicator {
    fn show(&mut self, _pattern: StatusPattern) {}

    fn clear(&mut self) {}
}

/// Indicator that renders bitmaps through a callback
///
/// The callback receives the 5x5 frame for each pattern (bit 4 is the
/// leftmost column) and an all-zero frame on clear.
pub struct BitmapIndicator<F> {
    render: F,
}

impl<F: FnMut(&[u8; 5])> BitmapIndicator<F> {
    /// Create an indicator around a frame renderer
    pub fn new(render: F) -> Self {
        Self { render }
    }
}

impl<F: FnMut(&[u8; 5])> StatusIndicator for BitmapIndicator<F> {
    fn show(&mut self, pattern: StatusPattern) {
        (self.render)(&pattern.bitmap());
    }

    fn clear(&mut self) {
        (self.render)(&[0; 5]);
    }
}

#[cfg(any(test, feature = "mock"))]
pub use mock::{IndicatorEvent, MockIndicator};

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::{StatusIndicator, StatusPattern};
    use std::vec::Vec;

    /// Recorded indicator call
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum IndicatorEvent {
        /// `show(pattern)`
        Show(StatusPattern),
        /// `clear()`
        Clear,
    }

    /// Indicator that records every call for test verification
    #[derive(Debug, Default)]
    pub struct MockIndicator {
        events: Vec<IndicatorEvent>,
    }

    impl MockIndicator {
        /// Create an empty recorder
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call so far, oldest first
        pub fn events(&self) -> &[IndicatorEvent] {
            &self.events
        }

        /// Most recent call
        pub fn last(&self) -> Option<IndicatorEvent> {
            self.events.last().copied()
        }
    }

    impl StatusIndicator for MockIndicator {
        fn show(&mut self, pattern: StatusPattern) {
            self.events.push(IndicatorEvent::Show(pattern));
        }

        fn clear(&mut self) {
            self.events.push(IndicatorEvent::Clear);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_indicator_renders_frames() {
        let mut frames: std::vec::Vec<[u8; 5]> = std::vec::Vec::new();
        {
            let mut indicator = BitmapIndicator::new(|frame: &[u8; 5]| frames.push(*frame));
            indicator.show(StatusPattern::Logo);
            indicator.clear();
        }
        assert_eq!(frames, vec![StatusPattern::Logo.bitmap(), [0; 5]]);
    }

    #[test]
    fn test_mock_indicator_records() {
        let mut indicator = MockIndicator::new();
        indicator.show(StatusPattern::Ready);
        indicator.clear();
        assert_eq!(
            indicator.events(),
            &[IndicatorEvent::Show(StatusPattern::Ready), IndicatorEvent::Clear]
        );
        assert_eq!(indicator.last(), Some(IndicatorEvent::Clear));
    }
}
