//! Turn Controller Parameter Definitions
//!
//! The stop-early buffers, correction speed and brake timing are empirical
//! and depend on the robot's mass, wheels and motors. Tune them per robot.
//!
//! # Parameters
//!
//! - `TRN_SPD_MIN` - Minimum commanded turn speed (percent)
//! - `TRN_SPD_MAX` - Maximum commanded turn speed (percent)
//! - `TRN_BUF` - Stop-early buffer at normal speed (degrees)
//! - `TRN_BUF_SLOW` - Stop-early buffer below `TRN_SLOW_SPD` (degrees)
//! - `TRN_SLOW_SPD` - Speed below which the slow buffer applies (percent)
//! - `TRN_CORR_SPD` - Fine-correction speed (percent)
//! - `TRN_BRAKE_MS` - Reverse-brake pulse duration (ms)
//! - `TRN_SETTLE_MS` - Pause after braking before fine correction (ms)
//! - `TRN_TOL` - Fine-correction tolerance (degrees)
//! - `TRN_FIX_TMO` - Fine-correction timeout (ms)
//! - `TRN_COARSE_MS` - Coarse-approach loop period (ms)
//! - `TRN_FINE_MS` - Fine-correction loop period (ms)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use super::{load_float, load_u32};

// --- Defaults ---

const DEFAULT_MIN_SPEED: f32 = 20.0;
const DEFAULT_MAX_SPEED: f32 = 100.0;
const DEFAULT_STOP_EARLY_BUFFER: f32 = 15.0;
const DEFAULT_SLOW_STOP_EARLY_BUFFER: f32 = 8.0;
const DEFAULT_SLOW_SPEED_THRESHOLD: f32 = 40.0;
const DEFAULT_CORRECTION_SPEED: f32 = 25.0;
const DEFAULT_BRAKE_MS: u32 = 100;
const DEFAULT_SETTLE_MS: u32 = 200;
const DEFAULT_TOLERANCE_DEG: f32 = 1.0;
const DEFAULT_CORRECTION_TIMEOUT_MS: u32 = 3000;
const DEFAULT_COARSE_PERIOD_MS: u32 = 10;
const DEFAULT_FINE_PERIOD_MS: u32 = 20;

// --- Ranges ---

const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 100.0;

const MIN_BUFFER: f32 = 0.0;
const MAX_BUFFER: f32 = 90.0;

const MIN_DURATION_MS: u32 = 0;
const MAX_DURATION_MS: u32 = 5_000;

const MIN_TOLERANCE: f32 = 0.1;
const MAX_TOLERANCE: f32 = 15.0;

const MIN_TIMEOUT_MS: u32 = 100;
const MAX_TIMEOUT_MS: u32 = 30_000;

const MIN_PERIOD_MS: u32 = 1;
const MAX_PERIOD_MS: u32 = 200;

/// Turn controller parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnParams {
    /// Lower clamp for the requested turn speed (percent)
    pub min_speed: f32,
    /// Upper clamp for the requested turn speed (percent)
    pub max_speed: f32,
    /// Degrees short of the target at which the coarse approach stops
    pub stop_early_buffer: f32,
    /// Stop-early buffer used below `slow_speed_threshold`
    pub slow_stop_early_buffer: f32,
    /// Clamped speeds strictly below this use `slow_stop_early_buffer`
    pub slow_speed_threshold: f32,
    /// Fixed fine-correction speed (percent), independent of the request
    pub correction_speed: f32,
    /// Reverse-brake pulse duration (ms)
    pub brake_ms: u32,
    /// Pause after stopping the brake pulse (ms)
    pub settle_ms: u32,
    /// Accepted heading error at the end of a turn (degrees)
    pub tolerance_deg: f32,
    /// Wall-clock limit of the fine-correction phase (ms)
    pub correction_timeout_ms: u32,
    /// Loop period during the coarse approach (ms)
    pub coarse_period_ms: u32,
    /// Loop period during fine correction (ms)
    pub fine_period_ms: u32,
}

impl Default for TurnParams {
    fn default() -> Self {
        Self {
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            stop_early_buffer: DEFAULT_STOP_EARLY_BUFFER,
            slow_stop_early_buffer: DEFAULT_SLOW_STOP_EARLY_BUFFER,
            slow_speed_threshold: DEFAULT_SLOW_SPEED_THRESHOLD,
            correction_speed: DEFAULT_CORRECTION_SPEED,
            brake_ms: DEFAULT_BRAKE_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            tolerance_deg: DEFAULT_TOLERANCE_DEG,
            correction_timeout_ms: DEFAULT_CORRECTION_TIMEOUT_MS,
            coarse_period_ms: DEFAULT_COARSE_PERIOD_MS,
            fine_period_ms: DEFAULT_FINE_PERIOD_MS,
        }
    }
}

impl TurnParams {
    /// Register turn parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let floats = [
            ("TRN_SPD_MIN", DEFAULT_MIN_SPEED),
            ("TRN_SPD_MAX", DEFAULT_MAX_SPEED),
            ("TRN_BUF", DEFAULT_STOP_EARLY_BUFFER),
            ("TRN_BUF_SLOW", DEFAULT_SLOW_STOP_EARLY_BUFFER),
            ("TRN_SLOW_SPD", DEFAULT_SLOW_SPEED_THRESHOLD),
            ("TRN_CORR_SPD", DEFAULT_CORRECTION_SPEED),
            ("TRN_TOL", DEFAULT_TOLERANCE_DEG),
        ];
        for (name, value) in floats {
            store.register(name, ParamValue::Float(value), ParamFlags::empty())?;
        }

        let ints = [
            ("TRN_BRAKE_MS", DEFAULT_BRAKE_MS),
            ("TRN_SETTLE_MS", DEFAULT_SETTLE_MS),
            ("TRN_FIX_TMO", DEFAULT_CORRECTION_TIMEOUT_MS),
            ("TRN_COARSE_MS", DEFAULT_COARSE_PERIOD_MS),
            ("TRN_FINE_MS", DEFAULT_FINE_PERIOD_MS),
        ];
        for (name, value) in ints {
            store.register(name, ParamValue::Int(value as i32), ParamFlags::empty())?;
        }

        Ok(())
    }

    /// Load turn parameters from parameter store
    ///
    /// Missing entries fall back to defaults; present ones are clamped to
    /// their valid range. An inverted speed window (`TRN_SPD_MIN` above
    /// `TRN_SPD_MAX`) falls back to the default window.
    pub fn from_store(store: &ParameterStore) -> Self {
        let mut min_speed = load_float(store, "TRN_SPD_MIN", DEFAULT_MIN_SPEED, MIN_SPEED, MAX_SPEED);
        let mut max_speed = load_float(store, "TRN_SPD_MAX", DEFAULT_MAX_SPEED, MIN_SPEED, MAX_SPEED);
        if min_speed > max_speed {
            min_speed = DEFAULT_MIN_SPEED;
            max_speed = DEFAULT_MAX_SPEED;
        }

        Self {
            min_speed,
            max_speed,
            stop_early_buffer: load_float(
                store,
                "TRN_BUF",
                DEFAULT_STOP_EARLY_BUFFER,
                MIN_BUFFER,
                MAX_BUFFER,
            ),
            slow_stop_early_buffer: load_float(
                store,
                "TRN_BUF_SLOW",
                DEFAULT_SLOW_STOP_EARLY_BUFFER,
                MIN_BUFFER,
                MAX_BUFFER,
            ),
            slow_speed_threshold: load_float(
                store,
                "TRN_SLOW_SPD",
                DEFAULT_SLOW_SPEED_THRESHOLD,
                MIN_SPEED,
                MAX_SPEED,
            ),
            correction_speed: load_float(
                store,
                "TRN_CORR_SPD",
                DEFAULT_CORRECTION_SPEED,
                MIN_SPEED,
                MAX_SPEED,
            ),
            brake_ms: load_u32(store, "TRN_BRAKE_MS", DEFAULT_BRAKE_MS, MIN_DURATION_MS, MAX_DURATION_MS),
            settle_ms: load_u32(
                store,
                "TRN_SETTLE_MS",
                DEFAULT_SETTLE_MS,
                MIN_DURATION_MS,
                MAX_DURATION_MS,
            ),
            tolerance_deg: load_float(
                store,
                "TRN_TOL",
                DEFAULT_TOLERANCE_DEG,
                MIN_TOLERANCE,
                MAX_TOLERANCE,
            ),
            correction_timeout_ms: load_u32(
                store,
                "TRN_FIX_TMO",
                DEFAULT_CORRECTION_TIMEOUT_MS,
                MIN_TIMEOUT_MS,
                MAX_TIMEOUT_MS,
            ),
            coarse_period_ms: load_u32(
                store,
                "TRN_COARSE_MS",
                DEFAULT_COARSE_PERIOD_MS,
                MIN_PERIOD_MS,
                MAX_PERIOD_MS,
            ),
            fine_period_ms: load_u32(
                store,
                "TRN_FINE_MS",
                DEFAULT_FINE_PERIOD_MS,
                MIN_PERIOD_MS,
                MAX_PERIOD_MS,
            ),
        }
    }

    /// Validate turn parameters
    pub fn is_valid(&self) -> bool {
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.min_speed)
            || !(MIN_SPEED..=MAX_SPEED).contains(&self.max_speed)
            || !(MIN_SPEED..=MAX_SPEED).contains(&self.correction_speed)
            || !(MIN_SPEED..=MAX_SPEED).contains(&self.slow_speed_threshold)
        {
            return false;
        }
        if !(MIN_BUFFER..=MAX_BUFFER).contains(&self.stop_early_buffer)
            || !(MIN_BUFFER..=MAX_BUFFER).contains(&self.slow_stop_early_buffer)
        {
            return false;
        }
        if !(MIN_TOLERANCE..=MAX_TOLERANCE).contains(&self.tolerance_deg) {
            return false;
        }
        if self.brake_ms > MAX_DURATION_MS || self.settle_ms > MAX_DURATION_MS {
            return false;
        }
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&self.correction_timeout_ms) {
            return false;
        }
        if !(MIN_PERIOD_MS..=MAX_PERIOD_MS).contains(&self.coarse_period_ms)
            || !(MIN_PERIOD_MS..=MAX_PERIOD_MS).contains(&self.fine_period_ms)
        {
            return false;
        }

        // Consistency: the speed window must not be empty
        self.min_speed <= self.max_speed
    }
}
