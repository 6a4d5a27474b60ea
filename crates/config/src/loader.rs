//! Configuration loader for pipekit logging
//!
//! Layers are applied in a fixed order: built-in defaults, then an optional
//! JSON file, then environment variable overrides. The merged result is
//! validated before it is handed back.

use crate::config::{LogFormat, TraceConfig};
use pipekit_core::{
    constants::{PIPEKIT_LOG_ANSI_VAR, PIPEKIT_LOG_FORMAT_VAR, PIPEKIT_LOG_VAR},
    option, Error, Result,
};
use std::env::VarError;
use std::path::{Path, PathBuf};

/// Builder that resolves a [`TraceConfig`]
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Optional JSON file layered over the defaults
    file: Option<PathBuf>,
    /// Whether environment variables override file and defaults
    use_env: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            file: None,
            use_env: true,
        }
    }

    /// Read a JSON configuration file on load
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Set whether environment variables are consulted
    pub fn use_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }

    /// Load the configuration
    pub fn load(self) -> Result<TraceConfig> {
        let mut config = match &self.file {
            Some(path) => Self::read_file(path)?,
            None => TraceConfig::default(),
        };

        if self.use_env {
            config = Self::apply_env(config)?;
        }

        config.validate()?;
        tracing::debug!(
            filter = %config.filter,
            format = %config.format,
            ansi = config.ansi,
            "resolved trace configuration"
        );
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<TraceConfig> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;

        serde_json::from_str(&contents).map_err(|e| Error::Json {
            message: format!("invalid trace configuration in '{}': {e}", path.display()),
            source: e,
        })
    }

    fn apply_env(mut config: TraceConfig) -> Result<TraceConfig> {
        if let Some(filter) = read_var(PIPEKIT_LOG_VAR)? {
            config.filter = filter;
        }

        if let Some(raw) = read_var(PIPEKIT_LOG_FORMAT_VAR)? {
            config.format = raw
                .parse::<LogFormat>()
                .map_err(|message| Error::environment(PIPEKIT_LOG_FORMAT_VAR, message))?;
        }

        if let Some(raw) = read_var(PIPEKIT_LOG_ANSI_VAR)? {
            config.ansi = option::to_result_else(parse_flag(&raw), || {
                Error::environment(
                    PIPEKIT_LOG_ANSI_VAR,
                    format!("expected true, false, 1 or 0, got '{raw}'"),
                )
            })?;
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an environment variable, treating an unset variable as absent
fn read_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(Error::environment(name, "value is not valid UTF-8")),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
