//! Heading estimator
//!
//! Owns the rate gyro and turns its samples into an accumulated heading:
//! a one-shot bias calibration at startup, then a reset and a stream of
//! `update_angle` calls per turn.
//!
//! ## Usage
//!
//! ```ignore
//! let mut estimator = HeadingEstimator::new(gyro, GyroParams::default());
//! estimator.calibrate(&mut timer, &mut indicator)?;
//!
//! estimator.reset(timer.now_ms());
//! loop {
//!     let angle = estimator.update_angle(timer.now_ms())?;
//!     // ...
//! }
//! ```

use crate::devices::traits::{RateSensor, StatusIndicator, StatusPattern};
use crate::platform::traits::TimerInterface;
use crate::subsystems::error::ControlError;
use gyro_turn_core::heading::{
    estimate_gyro_bias, CalibrationState, HeadingState, MAX_CALIBRATION_SAMPLES,
};
use gyro_turn_core::parameters::GyroParams;

/// Gyro-backed heading estimator
pub struct HeadingEstimator<S> {
    sensor: S,
    params: GyroParams,
    calibration: CalibrationState,
    heading: HeadingState,
}

impl<S: RateSensor> HeadingEstimator<S> {
    /// Create an uncalibrated estimator
    pub fn new(sensor: S, params: GyroParams) -> Self {
        Self {
            sensor,
            params,
            calibration: CalibrationState::new(),
            heading: HeadingState::new(),
        }
    }

    /// Wake the gyro and measure its stationary bias
    ///
    /// The robot must stay still for the whole run. Shows the calibrating
    /// pattern while sampling and holds the ready pattern afterwards.
    ///
    /// Any previous calibration is dropped first, so a failed run leaves
    /// the estimator uncalibrated.
    ///
    /// # Returns
    ///
    /// The measured bias (deg/s)
    pub fn calibrate<T, L>(&mut self, timer: &mut T, indicator: &mut L) -> Result<f32, ControlError>
    where
        T: TimerInterface,
        L: StatusIndicator,
    {
        self.calibration.invalidate();
        indicator.show(StatusPattern::Calibrating);

        let bias = match self.sample_bias(timer) {
            Ok(bias) => bias,
            Err(e) => {
                indicator.clear();
                crate::log_error!("Gyro calibration failed: {}", e.as_str());
                return Err(e);
            }
        };

        self.calibration.set_bias(bias);
        crate::log_info!("Gyro calibrated: bias {} deg/s", bias);

        indicator.show(StatusPattern::Ready);
        timer.delay_ms(self.params.ready_display_ms)?;
        Ok(bias)
    }

    fn sample_bias<T: TimerInterface>(&mut self, timer: &mut T) -> Result<f32, ControlError> {
        let count = (self.params.calibration_samples as usize).min(MAX_CALIBRATION_SAMPLES);
        crate::log_info!("Gyro calibration: {} samples", count as u32);

        self.sensor.wake()?;
        timer.delay_ms(self.params.wake_delay_ms)?;

        let mut samples: heapless::Vec<f32, MAX_CALIBRATION_SAMPLES> = heapless::Vec::new();
        for _ in 0..count {
            let rate = self.sensor.read_rate()?;
            // count is capped at capacity
            let _ = samples.push(rate);
            timer.delay_ms(self.params.calibration_interval_ms)?;
        }

        Ok(estimate_gyro_bias(&samples))
    }

    /// Read one raw (uncalibrated) rate sample (deg/s)
    pub fn read_rate(&mut self) -> Result<f32, ControlError> {
        Ok(self.sensor.read_rate()?)
    }

    /// Integrate one bias-corrected sample taken at `now_ms`
    ///
    /// The sample is read before the heading is touched, so a failed read
    /// leaves the heading and its timestamp unchanged.
    ///
    /// # Returns
    ///
    /// The updated heading (degrees, signed)
    pub fn update_angle(&mut self, now_ms: u64) -> Result<f32, ControlError> {
        let raw = self.sensor.read_rate()?;
        let rate = self.calibration.apply(raw);
        self.heading.integrate(rate, now_ms);
        Ok(self.heading.current_angle())
    }

    /// Zero the heading and restart integration at `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.heading.reset(now_ms);
    }

    /// Accumulated heading since the last reset (degrees, signed)
    pub fn current_angle(&self) -> f32 {
        self.heading.current_angle()
    }

    /// Measured bias (deg/s), zero until calibrated
    pub fn bias(&self) -> f32 {
        self.calibration.bias()
    }

    /// Whether a calibration run has completed
    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Heading state
    pub fn heading(&self) -> &HeadingState {
        &self.heading
    }

    /// Gyro parameters
    pub fn params(&self) -> &GyroParams {
        &self.params
    }

    /// Borrow the sensor
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// Mutably borrow the sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::imu::MockGyro;
    use crate::devices::indicator::{IndicatorEvent, MockIndicator};
    use crate::devices::traits::GyroError;
    use crate::platform::error::{PlatformError, TimerError};
    use crate::platform::mock::MockTimer;

    const EPSILON: f32 = 1e-5;

    const SAMPLES: [f32; 20] = [
        0.52, 0.61, 0.48, 0.55, 0.70, 0.44, 0.59, 0.63, 0.50, 0.47, 0.58, 0.66, 0.41, 0.53,
        0.60, 0.57, 0.49, 0.62, 0.54, 0.51,
    ];

    fn calibrated(default_rate: f32) -> HeadingEstimator<MockGyro> {
        let mut estimator =
            HeadingEstimator::new(MockGyro::with_rate(default_rate), GyroParams::default());
        estimator
            .calibrate(&mut MockTimer::new(), &mut MockIndicator::new())
            .unwrap();
        estimator
    }

    #[test]
    fn test_calibrate_averages_samples() {
        let mut estimator = HeadingEstimator::new(MockGyro::with_rates(&SAMPLES), GyroParams::default());
        let mut timer = MockTimer::new();
        let mut indicator = MockIndicator::new();

        let bias = estimator.calibrate(&mut timer, &mut indicator).unwrap();

        let expected = SAMPLES.iter().sum::<f32>() / SAMPLES.len() as f32;
        assert!((bias - expected).abs() < EPSILON);
        assert!((estimator.bias() - expected).abs() < EPSILON);
        assert!(estimator.is_calibrated());
        assert_eq!(estimator.sensor().wake_count(), 1);
        assert_eq!(estimator.sensor().read_count(), 20);
    }

    #[test]
    fn test_calibrate_timing_and_indicator() {
        let mut estimator = HeadingEstimator::new(MockGyro::with_rate(0.0), GyroParams::default());
        let mut timer = MockTimer::new();
        let mut indicator = MockIndicator::new();

        estimator.calibrate(&mut timer, &mut indicator).unwrap();

        let delays = timer.delays();
        assert_eq!(delays.len(), 22);
        assert_eq!(delays[0], 100);
        assert!(delays[1..21].iter().all(|d| *d == 50));
        assert_eq!(delays[21], 500);
        assert_eq!(timer.now_ms(), 100 + 20 * 50 + 500);

        assert_eq!(
            indicator.events(),
            &[
                IndicatorEvent::Show(StatusPattern::Calibrating),
                IndicatorEvent::Show(StatusPattern::Ready)
            ]
        );
    }

    #[test]
    fn test_calibrate_sensor_failure() {
        let mut gyro = MockGyro::with_rate(0.3);
        gyro.set_healthy(false);
        let mut estimator = HeadingEstimator::new(gyro, GyroParams::default());
        let mut indicator = MockIndicator::new();

        let result = estimator.calibrate(&mut MockTimer::new(), &mut indicator);

        assert_eq!(
            result,
            Err(ControlError::SensorUnavailable(GyroError::I2cError))
        );
        assert!(!estimator.is_calibrated());
        assert_eq!(indicator.last(), Some(IndicatorEvent::Clear));
    }

    #[test]
    fn test_calibrate_timer_failure() {
        let mut estimator = HeadingEstimator::new(MockGyro::with_rate(0.3), GyroParams::default());
        let mut timer = MockTimer::new();
        let failure = PlatformError::Timer(TimerError::DelayFailed);
        timer.set_error(Some(failure));
        let mut indicator = MockIndicator::new();

        let result = estimator.calibrate(&mut timer, &mut indicator);

        assert_eq!(result, Err(ControlError::Timer(failure)));
        assert!(!estimator.is_calibrated());
        // Wake delay is the first pause; no samples follow it
        assert_eq!(timer.delays(), &[100]);
        assert_eq!(estimator.sensor().read_count(), 0);
        assert_eq!(indicator.last(), Some(IndicatorEvent::Clear));
    }

    #[test]
    fn test_recalibration_failure_drops_previous_bias() {
        let mut estimator = calibrated(0.8);
        assert!(estimator.is_calibrated());

        estimator.sensor_mut().set_healthy(false);
        assert!(estimator
            .calibrate(&mut MockTimer::new(), &mut MockIndicator::new())
            .is_err());
        assert!(!estimator.is_calibrated());
        assert_eq!(estimator.bias(), 0.0);
    }

    #[test]
    fn test_update_angle_subtracts_bias() {
        let mut estimator = calibrated(0.8);
        estimator.reset(0);

        // Stationary: raw rate equals bias
        for step in 1..=100u64 {
            estimator.update_angle(step * 10).unwrap();
        }
        assert!(estimator.current_angle().abs() < EPSILON);

        // 30.8 raw - 0.8 bias = 30 deg/s for 1 s
        estimator.sensor_mut().set_default_rate(30.8);
        estimator.reset(2_000);
        for step in 1..=50u64 {
            estimator.update_angle(2_000 + step * 20).unwrap();
        }
        assert!((estimator.current_angle() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_update_angle_failure_keeps_state() {
        let mut estimator = calibrated(10.0);
        estimator.sensor_mut().set_default_rate(20.0);
        estimator.reset(0);
        estimator.update_angle(100).unwrap();
        let angle = estimator.current_angle();

        estimator.sensor_mut().set_healthy(false);
        assert_eq!(
            estimator.update_angle(200),
            Err(ControlError::SensorUnavailable(GyroError::I2cError))
        );
        assert_eq!(estimator.current_angle(), angle);
        assert_eq!(estimator.heading().last_sample_time_ms(), 100);
    }

    #[test]
    fn test_read_rate_before_wake() {
        let mut estimator = HeadingEstimator::new(MockGyro::with_rate(1.0), GyroParams::default());
        assert_eq!(
            estimator.read_rate(),
            Err(ControlError::SensorUnavailable(GyroError::NotInitialized))
        );
    }
}
