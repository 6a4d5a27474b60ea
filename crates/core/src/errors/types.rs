//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for pipekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the ambient layers (configuration and logging).
///
/// The combinators never produce it: absence and failure travel in-band as
/// `Option` and `Result` values chosen by the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    Configuration { message: String },

    /// Environment variable related errors
    Environment { variable: String, message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tracing subscriber setup errors
    Logging { message: String },
}
