//! Error types and result extensions for pipekit's configuration and logging layers

mod builders;
mod display;
mod extensions;
mod types;
mod validate;

pub use extensions::*;
pub use types::{Error, Result};
pub use validate::Validate;
