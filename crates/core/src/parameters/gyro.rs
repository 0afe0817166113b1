//! Gyro Calibration Parameter Definitions
//!
//! # Parameters
//!
//! - `GYR_SENS` - Rate sensitivity (LSB per deg/s, 131 for the ±250 deg/s range).
//!   Read-only: the driver never changes the power-on full-scale range.
//! - `GYR_CAL_N` - Number of stationary samples averaged into the bias
//! - `GYR_CAL_MS` - Spacing between calibration samples (ms)
//! - `GYR_WAKE_MS` - Delay after waking the sensor before sampling (ms)
//! - `GYR_READY_MS` - How long the ready pattern is held after calibration (ms)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use super::{load_float, load_u32};
use crate::heading::MAX_CALIBRATION_SAMPLES;

// --- Defaults ---

const DEFAULT_SENSITIVITY: f32 = 131.0;
const DEFAULT_CALIBRATION_SAMPLES: u32 = 20;
const DEFAULT_CALIBRATION_INTERVAL_MS: u32 = 50;
const DEFAULT_WAKE_DELAY_MS: u32 = 100;
const DEFAULT_READY_DISPLAY_MS: u32 = 500;

// --- Ranges ---

const MIN_SENSITIVITY: f32 = 1.0;
const MAX_SENSITIVITY: f32 = 1000.0;

const MIN_SAMPLES: u32 = 1;
const MAX_SAMPLES: u32 = MAX_CALIBRATION_SAMPLES as u32;

const MAX_DELAY_MS: u32 = 5_000;

/// Gyro calibration and scaling parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GyroParams {
    /// Raw counts per deg/s
    pub sensitivity: f32,
    /// Number of samples averaged into the bias
    pub calibration_samples: u32,
    /// Pause after each calibration sample (ms)
    pub calibration_interval_ms: u32,
    /// Pause between waking the sensor and the first sample (ms)
    pub wake_delay_ms: u32,
    /// Hold time of the ready pattern after calibration (ms)
    pub ready_display_ms: u32,
}

impl Default for GyroParams {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            calibration_samples: DEFAULT_CALIBRATION_SAMPLES,
            calibration_interval_ms: DEFAULT_CALIBRATION_INTERVAL_MS,
            wake_delay_ms: DEFAULT_WAKE_DELAY_MS,
            ready_display_ms: DEFAULT_READY_DISPLAY_MS,
        }
    }
}

impl GyroParams {
    /// Register gyro parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "GYR_SENS",
            ParamValue::Float(DEFAULT_SENSITIVITY),
            ParamFlags::READ_ONLY,
        )?;
        store.register(
            "GYR_CAL_N",
            ParamValue::Int(DEFAULT_CALIBRATION_SAMPLES as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "GYR_CAL_MS",
            ParamValue::Int(DEFAULT_CALIBRATION_INTERVAL_MS as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "GYR_WAKE_MS",
            ParamValue::Int(DEFAULT_WAKE_DELAY_MS as i32),
            ParamFlags::empty(),
        )?;
        store.register(
            "GYR_READY_MS",
            ParamValue::Int(DEFAULT_READY_DISPLAY_MS as i32),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load gyro parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            sensitivity: load_float(
                store,
                "GYR_SENS",
                DEFAULT_SENSITIVITY,
                MIN_SENSITIVITY,
                MAX_SENSITIVITY,
            ),
            calibration_samples: load_u32(
                store,
                "GYR_CAL_N",
                DEFAULT_CALIBRATION_SAMPLES,
                MIN_SAMPLES,
                MAX_SAMPLES,
            ),
            calibration_interval_ms: load_u32(
                store,
                "GYR_CAL_MS",
                DEFAULT_CALIBRATION_INTERVAL_MS,
                0,
                MAX_DELAY_MS,
            ),
            wake_delay_ms: load_u32(store, "GYR_WAKE_MS", DEFAULT_WAKE_DELAY_MS, 0, MAX_DELAY_MS),
            ready_display_ms: load_u32(
                store,
                "GYR_READY_MS",
                DEFAULT_READY_DISPLAY_MS,
                0,
                MAX_DELAY_MS,
            ),
        }
    }

    /// Validate gyro parameters
    pub fn is_valid(&self) -> bool {
        (MIN_SENSITIVITY..=MAX_SENSITIVITY).contains(&self.sensitivity)
            && (MIN_SAMPLES..=MAX_SAMPLES).contains(&self.calibration_samples)
            && self.calibration_interval_ms <= MAX_DELAY_MS
            && self.wake_delay_ms <= MAX_DELAY_MS
            && self.ready_display_ms <= MAX_DELAY_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gyro_params_defaults() {
        let params = GyroParams::default();
        assert!(libm::fabsf(params.sensitivity - 131.0) < 0.001);
        assert_eq!(params.calibration_samples, 20);
        assert_eq!(params.calibration_interval_ms, 50);
        assert_eq!(params.wake_delay_ms, 100);
        assert_eq!(params.ready_display_ms, 500);
        assert!(params.is_valid());
    }

    #[test]
    fn test_from_store_limits_sample_count() {
        let mut store = ParameterStore::new();
        GyroParams::register_defaults(&mut store).unwrap();
        store.set("GYR_CAL_N", ParamValue::Int(500)).unwrap();

        let params = GyroParams::from_store(&store);
        assert_eq!(params.calibration_samples, MAX_CALIBRATION_SAMPLES as u32);
        assert!(params.is_valid());
    }

    #[test]
    fn test_sensitivity_is_read_only() {
        let mut store = ParameterStore::new();
        GyroParams::register_defaults(&mut store).unwrap();

        assert_eq!(
            store.set("GYR_SENS", ParamValue::Float(65.5)),
            Err(ParameterError::ReadOnly)
        );
        assert_eq!(GyroParams::from_store(&store).sensitivity, 131.0);
    }

    #[test]
    fn test_zero_samples_is_invalid() {
        let params = GyroParams {
            calibration_samples: 0,
            ..Default::default()
        };
        assert!(!params.is_valid());
    }
}
