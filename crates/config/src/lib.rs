//! Logging configuration for pipekit
//!
//! This crate resolves the [`TraceConfig`] used to install the tracing
//! subscriber, merging defaults, an optional JSON file and environment
//! variables through [`ConfigLoader`].

pub mod config;
pub mod loader;


pub use config::{LogFormat, TraceConfig};
pub use loader::ConfigLoader;
