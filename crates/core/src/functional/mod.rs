//! Functional programming utilities
//!
//! Five independent components, composed only by the caller:
//! function combinators ([`composition`]), predicate combinators
//! ([`predicate`]), optional values ([`option`]), fallible results
//! ([`result`]) and ordered sequences ([`sequence`]). The option and result
//! modules meet only in their two conversion functions.

pub mod composition;
pub mod option;
pub mod predicate;
pub mod result;
pub mod sequence;

// Re-export commonly used traits and utilities
pub use composition::operators::{
    apply, compose, constant, curry, flip, forward_compose, identity, pipe, pipe2, pipe3, pipe4,
    tap, uncurry,
};
pub use composition::{Compose, Pipe};
pub use option::OptionExt;
pub use result::FallibleExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::operators::*;
    pub use super::composition::{Compose, Pipe};
    pub use super::option::OptionExt;
    pub use super::result::FallibleExt;
    pub use crate::{pipeline, try_pipeline};
}
