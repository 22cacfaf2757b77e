//! Input/output: errors, configuration, command line, rendering and progress

/// Command-line interface and run orchestration
pub mod cli;
/// Engine constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of labeled geometry
pub mod image;
/// Terminal progress display
pub mod progress;
