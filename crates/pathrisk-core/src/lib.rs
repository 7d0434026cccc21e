//! Core types, constants, configuration, errors, and tracing for PathRisk.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod types;
