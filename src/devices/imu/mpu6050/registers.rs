//! MPU-6050 Register Definitions
//!
//! Subset of the MPU-6000/MPU-6050 Register Map (RM-MPU-6000A-00) used for
//! yaw rate readout.

// ============================================================================
// I2C Address
// ============================================================================

/// MPU-6050 I2C address when AD0 pin is low
pub const MPU6050_ADDR: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high
pub const MPU6050_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Gyroscope Z output, high byte
///
/// The low byte follows at 0x48; a two-byte burst read from here returns
/// both through register auto-increment.
pub const GYRO_ZOUT_H: u8 = 0x47;

/// Power management 1
pub const PWR_MGMT_1: u8 = 0x6B;

/// Device ID
pub const WHO_AM_I: u8 = 0x75;

// ============================================================================
// Register Values
// ============================================================================

/// PWR_MGMT_1: clear SLEEP, internal 8 MHz oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

/// MPU-6050 WHO_AM_I expected value
pub const MPU6050_WHO_AM_I_VALUE: u8 = 0x68;

/// Gyro sensitivity at ±250 deg/s full scale (LSB per deg/s)
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;
