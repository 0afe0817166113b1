//! Status indicator trait
//!
//! Fire-and-forget visual feedback, typically a 5x5 LED matrix.

/// Patterns the controller can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusPattern {
    /// Car logo
    Logo,
    /// Cross shown while the gyro bias is being measured
    Calibrating,
    /// Tick shown once calibration has finished
    Ready,
}

impl StatusPattern {
    /// 5x5 bitmap, one byte per row, bit 4 is the leftmost column
    pub const fn bitmap(self) -> [u8; 5] {
        match self {
            StatusPattern::Logo => [0b01110, 0b10000, 0b11110, 0b00010, 0b01110],
            StatusPattern::Calibrating => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
            StatusPattern::Ready => [0b00000, 0b00001, 0b00010, 0b10100, 0b01000],
        }
    }

    /// Short name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            StatusPattern::Logo => "logo",
            StatusPattern::Calibrating => "calibrating",
            StatusPattern::Ready => "ready",
        }
    }
}

/// Visual status output
///
/// Display failures are not reported; the indicator is advisory only.
pub trait StatusIndicator {
    /// Show a pattern, replacing whatever is displayed
    fn show(&mut self, pattern: StatusPattern);

    /// Blank the display
    fn clear(&mut self);
}
