//! gyro_turn_core - Pure no_std logic for gyro-stabilised turning
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any embedded dependencies.
//!
//! # Design Principles
//!
//! - **No platform cfg**: the only feature is the optional `defmt` derive
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Motors and PWM outputs injected via traits
//!
//! # Modules
//!
//! - [`heading`]: Gyro bias calibration and rate integration
//! - [`turn`]: Turn request types and phase decision rules
//! - [`motor`]: Motor driver abstraction for differential drive
//! - [`parameters`]: Parameter store and typed parameter blocks

#![no_std]

pub mod heading;
pub mod motor;
pub mod parameters;
pub mod turn;
