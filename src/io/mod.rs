//! Input/output operations: label-map import, colored export, CLI, progress

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for pipeline operations
pub mod error;
/// PNG label-map import and colored-map export
pub mod image;
/// Batch progress display
pub mod progress;
