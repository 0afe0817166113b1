//! Distance Drive Parameter Definitions
//!
//! Straight-line driving is open loop: distance is converted to a run time
//! using a measured ground speed. Measure `DRV_CM_PER_S` with a tape
//! measure at `DRV_SPEED` on the actual floor surface.
//!
//! # Parameters
//!
//! - `DRV_CM_PER_S` - Ground speed at `DRV_SPEED` (cm/s)
//! - `DRV_SPEED` - Motor command used for straight driving (percent)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use super::load_float;

const DEFAULT_CM_PER_SECOND: f32 = 30.0;
const DEFAULT_CRUISE_SPEED: f32 = 60.0;

const MIN_CM_PER_SECOND: f32 = 1.0;
const MAX_CM_PER_SECOND: f32 = 500.0;

const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 100.0;

/// Distance drive parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveParams {
    /// Measured ground speed at `cruise_speed` (cm/s)
    pub cm_per_second: f32,
    /// Motor command for straight driving (percent)
    pub cruise_speed: f32,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            cm_per_second: DEFAULT_CM_PER_SECOND,
            cruise_speed: DEFAULT_CRUISE_SPEED,
        }
    }
}

impl DriveParams {
    /// Register drive parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "DRV_CM_PER_S",
            ParamValue::Float(DEFAULT_CM_PER_SECOND),
            ParamFlags::empty(),
        )?;
        store.register(
            "DRV_SPEED",
            ParamValue::Float(DEFAULT_CRUISE_SPEED),
            ParamFlags::empty(),
        )?;
        Ok(())
    }

    /// Load drive parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            cm_per_second: load_float(
                store,
                "DRV_CM_PER_S",
                DEFAULT_CM_PER_SECOND,
                MIN_CM_PER_SECOND,
                MAX_CM_PER_SECOND,
            ),
            cruise_speed: load_float(store, "DRV_SPEED", DEFAULT_CRUISE_SPEED, MIN_SPEED, MAX_SPEED),
        }
    }

    /// Run time needed to cover `distance_cm` (ms, rounded to nearest)
    ///
    /// `None` when the time is not finite or does not fit in a `u32`, which
    /// happens for huge distances or a zero ground speed.
    pub fn duration_ms(&self, distance_cm: f32) -> Option<u32> {
        let ms = libm::roundf(libm::fabsf(distance_cm) / self.cm_per_second * 1000.0);
        if !ms.is_finite() || ms >= u32::MAX as f32 {
            return None;
        }
        Some(ms as u32)
    }

    /// Validate drive parameters
    pub fn is_valid(&self) -> bool {
        (MIN_CM_PER_SECOND..=MAX_CM_PER_SECOND).contains(&self.cm_per_second)
            && (MIN_SPEED..=MAX_SPEED).contains(&self.cruise_speed)
    }
}
