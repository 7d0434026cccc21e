//! Structured tracing: subscriber setup and named spans per operation.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, LOG_ENV_VAR};
