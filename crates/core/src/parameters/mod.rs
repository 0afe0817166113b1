//! Parameter management types and utilities
//!
//! This module provides the in-memory parameter store and the typed
//! parameter blocks for turning, gyro calibration and distance driving.
//! Values are not persisted; every power cycle starts from the defaults.

pub mod drive;
pub mod error;
pub mod gyro;
pub mod storage;
pub mod turn;

pub use drive::DriveParams;
pub use error::ParameterError;
pub use gyro::GyroParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
pub use turn::TurnParams;

/// Load a float parameter from store with clamping
pub(crate) fn load_float(store: &ParameterStore, name: &str, default: f32, min: f32, max: f32) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) if v.is_finite() => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Load an unsigned integer parameter from store with clamping
pub(crate) fn load_u32(store: &ParameterStore, name: &str, default: u32, min: u32, max: u32) -> u32 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => (*v).clamp(min as i32, max as i32) as u32,
        Some(ParamValue::Float(v)) if v.is_finite() => v.clamp(min as f32, max as f32) as u32,
        _ => default,
    }
}
