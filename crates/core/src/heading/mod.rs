//! Heading estimation from a single-axis rate gyro
//!
//! Provides the gyro bias calibration state and the rectangular (Euler)
//! integration of bias-corrected angular rate into an accumulated heading.
//!
//! Sensor I/O and timing live in the `gyro_turn` crate; everything here is
//! pure arithmetic on samples and millisecond timestamps.

/// Maximum number of samples a single calibration run may collect
pub const MAX_CALIBRATION_SAMPLES: usize = 64;

/// Gyro bias calibration state
///
/// Created zeroed and uncalibrated. Only a completed calibration run
/// changes it; every heading update reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationState {
    /// Rate offset observed while stationary (deg/s)
    bias: f32,
    /// Whether `bias` comes from a completed calibration run
    calibrated: bool,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationState {
    /// Create an uncalibrated state with zero bias
    pub const fn new() -> Self {
        Self {
            bias: 0.0,
            calibrated: false,
        }
    }

    /// Record the bias from a completed calibration run
    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
        self.calibrated = true;
    }

    /// Drop any previous calibration
    pub fn invalidate(&mut self) {
        self.bias = 0.0;
        self.calibrated = false;
    }

    /// Current bias (deg/s)
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Whether a calibration run has completed
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Subtract the bias from a raw rate sample
    #[inline]
    pub fn apply(&self, raw_rate: f32) -> f32 {
        raw_rate - self.bias
    }
}

/// Accumulated heading for the turn in progress
///
/// The angle is signed and unbounded (never wrapped to ±180 or 360).
/// It only has meaning between a [`HeadingState::reset`] and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadingState {
    current_angle: f32,
    last_sample_time_ms: u64,
}

impl HeadingState {
    /// Create a zeroed heading state
    pub const fn new() -> Self {
        Self {
            current_angle: 0.0,
            last_sample_time_ms: 0,
        }
    }

    /// Zero the heading and restart the integration clock at `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.current_angle = 0.0;
        self.last_sample_time_ms = now_ms;
    }

    /// Integrate one bias-corrected rate sample taken at `now_ms`
    ///
    /// Rectangular integration: the rate is assumed constant over the whole
    /// interval since the previous sample. A timestamp earlier than the
    /// previous one counts as zero elapsed time.
    ///
    /// # Returns
    ///
    /// The angle increment applied (degrees)
    pub fn integrate(&mut self, rate_dps: f32, now_ms: u64) -> f32 {
        let dt = elapsed_seconds(self.last_sample_time_ms, now_ms);
        self.last_sample_time_ms = now_ms;

        let delta = rate_dps * dt;
        self.current_angle += delta;
        delta
    }

    /// Accumulated heading (degrees, signed)
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Magnitude of the accumulated heading (degrees)
    pub fn magnitude(&self) -> f32 {
        libm::fabsf(self.current_angle)
    }

    /// Timestamp of the last integration step (ms)
    pub fn last_sample_time_ms(&self) -> u64 {
        self.last_sample_time_ms
    }
}

/// Convert a millisecond interval to seconds, saturating at zero
#[inline]
pub fn elapsed_seconds(from_ms: u64, to_ms: u64) -> f32 {
    to_ms.saturating_sub(from_ms) as f32 / 1000.0
}

/// Estimate gyro bias from stationary rate samples
///
/// The robot must not move while the samples are taken.
///
/// # Returns
///
/// Arithmetic mean of the samples (deg/s), or 0.0 for an empty slice
pub fn estimate_gyro_bias(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum: f32 = samples.iter().sum();
    sum / samples.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_calibration_default_is_uncalibrated() {
        let cal = CalibrationState::default();
        assert!(!cal.is_calibrated());
        assert_eq!(cal.bias(), 0.0);
    }

    #[test]
    fn test_calibration_set_and_invalidate() {
        let mut cal = CalibrationState::new();
        cal.set_bias(-0.75);
        assert!(cal.is_calibrated());
        assert!(libm::fabsf(cal.apply(1.25) - 2.0) < EPSILON);

        cal.invalidate();
        assert!(!cal.is_calibrated());
        assert_eq!(cal.bias(), 0.0);
    }

    #[test]
    fn test_estimate_gyro_bias_mean() {
        let samples = [
            0.5, 0.7, 0.6, 0.4, 0.8, 0.5, 0.6, 0.7, 0.3, 0.9, 0.6, 0.6, 0.5, 0.7, 0.4, 0.8, 0.6,
            0.5, 0.7, 0.6,
        ];
        let expected = samples.iter().sum::<f32>() / 20.0;
        assert!(libm::fabsf(estimate_gyro_bias(&samples) - expected) < 1e-6);
    }

    #[test]
    fn test_estimate_gyro_bias_empty() {
        assert_eq!(estimate_gyro_bias(&[]), 0.0);
    }

    #[test]
    fn test_zero_rate_keeps_heading() {
        let mut heading = HeadingState::new();
        heading.reset(1_000);

        for step in 1..=500u64 {
            heading.integrate(0.0, 1_000 + step * 37);
        }

        assert_eq!(heading.current_angle(), 0.0);
    }

    #[test]
    fn test_constant_rate_is_rectangular() {
        let mut heading = HeadingState::new();
        heading.reset(0);

        let rate = 42.0;
        let dt_ms = 10;
        let steps = 100u64;
        for step in 1..=steps {
            heading.integrate(rate, step * dt_ms);
        }

        let expected = rate * 0.01 * steps as f32;
        assert!(libm::fabsf(heading.current_angle() - expected) < EPSILON);
        assert_eq!(heading.last_sample_time_ms(), steps * dt_ms);
    }

    #[test]
    fn test_integrate_uses_first_interval_from_reset() {
        let mut heading = HeadingState::new();
        heading.reset(500);

        let delta = heading.integrate(-20.0, 750);
        assert!(libm::fabsf(delta - (-5.0)) < EPSILON);
        assert!(libm::fabsf(heading.magnitude() - 5.0) < EPSILON);
    }

    #[test]
    fn test_integrate_backwards_time_saturates() {
        let mut heading = HeadingState::new();
        heading.reset(2_000);

        let delta = heading.integrate(100.0, 1_000);
        assert_eq!(delta, 0.0);
        assert_eq!(heading.last_sample_time_ms(), 1_000);
    }

    #[test]
    fn test_reset_clears_angle() {
        let mut heading = HeadingState::new();
        heading.reset(0);
        heading.integrate(90.0, 1_000);
        assert!(heading.current_angle() > 0.0);

        heading.reset(5_000);
        assert_eq!(heading.current_angle(), 0.0);
        assert_eq!(heading.last_sample_time_ms(), 5_000);
    }
}
