//! Combinators over optional values
//!
//! Every function takes the `Option` first so calls line up in a pipeline.
//! Names ending in `_else` take a closure and only call it on the branch that
//! needs it; their plain counterparts take an already evaluated value.
//!
//! ```
//! use pipekit_core::option;
//!
//! let port = option::filter(Some(8080), |p| *p > 1024);
//! let port = option::or_else(port, || Some(3000));
//! assert_eq!(option::to_result(port, "no port"), Ok(8080));
//! ```

/// Transform a present value
pub fn map<T, U, F>(opt: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    opt.map(f)
}

/// Chain an option-returning step; `f` is never called on `None`
pub fn and_then<T, U, F>(opt: Option<T>, f: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    match opt {
        Some(value) => f(value),
        None => None,
    }
}

pub fn unwrap_or<T>(opt: Option<T>, default: T) -> T {
    opt.unwrap_or(default)
}

/// The present value, or `f()` when absent. `f` runs at most once.
pub fn unwrap_or_else<T, F>(opt: Option<T>, f: F) -> T
where
    F: FnOnce() -> T,
{
    match opt {
        Some(value) => value,
        None => f(),
    }
}

/// Keep the value only if it satisfies `predicate`
pub fn filter<T, P>(opt: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    opt.filter(predicate)
}

/// `a` if present, otherwise `b`. Both are evaluated by the caller.
pub fn or<T>(a: Option<T>, b: Option<T>) -> Option<T> {
    match a {
        Some(_) => a,
        None => b,
    }
}

/// `a` if present, otherwise the fallback produced by `f`
pub fn or_else<T, F>(a: Option<T>, f: F) -> Option<T>
where
    F: FnOnce() -> Option<T>,
{
    match a {
        Some(_) => a,
        None => f(),
    }
}

pub fn to_result<T, E>(opt: Option<T>, err: E) -> Result<T, E> {
    opt.ok_or(err)
}

/// Like [`to_result`] but builds the error only when it is needed
pub fn to_result_else<T, E, F>(opt: Option<T>, err: F) -> Result<T, E>
where
    F: FnOnce() -> E,
{
    opt.ok_or_else(err)
}

/// Keep the success value, discard the error
pub fn from_result<T, E>(res: Result<T, E>) -> Option<T> {
    res.ok()
}

/// Combine two present values with `f`; absent if either side is absent
pub fn zip_with<T, U, V, F>(a: Option<T>, b: Option<U>, f: F) -> Option<V>
where
    F: FnOnce(T, U) -> V,
{
    match (a, b) {
        (Some(left), Some(right)) => Some(f(left, right)),
        _ => None,
    }
}

pub fn zip<T, U>(a: Option<T>, b: Option<U>) -> Option<(T, U)> {
    zip_with(a, b, |left, right| (left, right))
}

pub fn flatten<T>(opt: Option<Option<T>>) -> Option<T> {
    opt.flatten()
}

/// Run `f` on the value when present; the option is returned as is
pub fn tap_some<T, F>(opt: Option<T>, f: F) -> Option<T>
where
    F: FnOnce(&T),
{
    if let Some(value) = &opt {
        f(value);
    }
    opt
}

/// Run `f` when absent; the option is returned as is
pub fn tap_none<T, F>(opt: Option<T>, f: F) -> Option<T>
where
    F: FnOnce(),
{
    if opt.is_none() {
        f();
    }
    opt
}

/// `Some(value)` if `condition` holds. `value` is evaluated either way.
pub fn when<T>(condition: bool, value: T) -> Option<T> {
    condition.then_some(value)
}

pub fn is_some<T>(opt: &Option<T>) -> bool {
    opt.is_some()
}

pub fn is_none<T>(opt: &Option<T>) -> bool {
    opt.is_none()
}

/// Fold an option into a plain value, computing the default lazily
pub fn map_or_else<T, U, D, F>(opt: Option<T>, default: D, f: F) -> U
where
    D: FnOnce() -> U,
    F: FnOnce(T) -> U,
{
    match opt {
        Some(value) => f(value),
        None => default(),
    }
}

/// Collect the present values of a sequence, in order
pub fn values<T: Clone>(seq: &[Option<T>]) -> Vec<T> {
    seq.iter().flatten().cloned().collect()
}

/// Functional utilities for working with Options
pub trait OptionExt<T> {
    /// Apply a function if Some, otherwise use default
    fn map_or_else_with<U, F, D>(self, default: D, f: F) -> U
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> U;

    /// Chain multiple option-returning functions
    fn chain<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Tap into Some values for side effects
    fn tap_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&T);

    /// Tap into None for side effects
    fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce();
}

impl<T> OptionExt<T> for Option<T> {
    fn map_or_else_with<U, F, D>(self, default: D, f: F) -> U
    where
        F: FnOnce(T) -> U,
        D: FnOnce() -> U,
    {
        map_or_else(self, default, f)
    }

    fn chain<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        and_then(self, f)
    }

    fn tap_some<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        tap_some(self, f)
    }

    fn tap_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        tap_none(self, f)
    }
}
