//! Logging configuration types
//!
//! `TraceConfig` describes how the tracing subscriber should filter and
//! render events. It is plain data: building one never touches the global
//! subscriber, so it can be loaded, inspected and validated before logging
//! is switched on.

use pipekit_core::{constants::DEFAULT_LOG_FILTER, Result, ResultExt, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output shape of the `fmt` layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogFormat {
    /// One line per event, fields inline
    #[default]
    Compact,
    /// Multi-line, human oriented
    Pretty,
    /// The `fmt` layer's default single-line output
    Full,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Full => "full",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "full" => Ok(LogFormat::Full),
            other => Err(format!(
                "unknown log format '{other}', expected one of: compact, pretty, full"
            )),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LogFormat> for String {
    fn from(format: LogFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Settings for the tracing subscriber.
///
/// Every field has a default, so a configuration file only needs to name the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// `EnvFilter` directive, e.g. `info` or `pipekit::tap=debug,warn`
    pub filter: String,

    pub format: LogFormat,

    /// Emit ANSI colour codes
    pub ansi: bool,

    /// Include the event target in each line
    pub with_target: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
            ansi: false,
            with_target: false,
        }
    }
}

impl TraceConfig {
    /// Create a configuration with the given filter and defaults elsewhere
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Check the configuration is usable. The filter must not be blank.
    pub fn validate(&self) -> Result<()> {
        Validate::not_empty(&self.filter, "filter").context("invalid trace configuration")
    }
}
