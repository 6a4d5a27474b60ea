/// Constants used throughout the pipekit workspace
// Environment variable names read by the configuration loader
pub const PIPEKIT_LOG_VAR: &str = "PIPEKIT_LOG";
pub const PIPEKIT_LOG_FORMAT_VAR: &str = "PIPEKIT_LOG_FORMAT";
pub const PIPEKIT_LOG_ANSI_VAR: &str = "PIPEKIT_LOG_ANSI";

// Default `EnvFilter` directive
pub const DEFAULT_LOG_FILTER: &str = "info";

// Tracing target used by the traced tap helpers
pub const TAP_TARGET: &str = "pipekit::tap";
