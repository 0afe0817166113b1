//! Core infrastructure
//!
//! Crate-wide plumbing shared by drivers and subsystems.

pub mod logging;
