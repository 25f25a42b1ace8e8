/// Configuration management.
pub mod config;
/// Structured lifecycle event log.
pub mod events;
/// Telemetry setup for logging and metrics.
pub mod telemetry;
