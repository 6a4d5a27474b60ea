//! Logging collaborators for pipekit
//!
//! This crate installs the tracing subscriber described by a
//! [`pipekit_config::TraceConfig`] and provides traced taps: closures that
//! plug into the `tap*` combinators of `pipekit-core` and log what flows
//! through a pipeline without changing it.

pub mod tracing;

pub use self::tracing::{init, init_from_env};
