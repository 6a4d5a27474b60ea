//! Pipeline-friendly combinators over `Option`, `Result`, slices, plain
//! functions and predicates.
//!
//! Every combinator takes a value (and possibly a closure) and returns a new
//! value without mutating its input. The only effects are the ones a caller
//! hands to the `tap*` family.
//!
//! ## Key Components
//!
//! - **`functional`**: the combinators themselves, re-exported at the crate
//!   root as [`option`], [`result`], [`sequence`] and [`predicate`], with
//!   function combinators in [`functional::composition`].
//! - **`errors`**: the `Error` enum and `Result` alias used by the
//!   configuration and logging crates. The combinators are total and never
//!   return it.
//! - **`constants`**: environment variable names and tracing targets shared
//!   across the workspace.
//!
//! ```
//! use pipekit_core::{option, result, sequence};
//!
//! let parsed: Vec<Result<i32, String>> = ["4", "x", "9"]
//!     .iter()
//!     .map(|s| result::map_error(s.parse::<i32>(), |e| e.to_string()))
//!     .collect();
//! let numbers: Vec<i32> = parsed.into_iter().filter_map(option::from_result).collect();
//!
//! assert_eq!(sequence::chunk(&numbers, 1), vec![vec![4], vec![9]]);
//! ```

pub mod constants;
pub mod errors;
pub mod functional;

#[cfg(test)]
mod testing;

pub use self::{
    errors::{Error, Result, ResultExt, Validate},
    functional::{option, predicate, result, sequence},
};
