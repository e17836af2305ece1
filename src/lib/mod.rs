//! Shared library modules providing error types, path helpers, and diagnostics setup.

pub mod errors;
pub mod paths;
pub mod telemetry;
