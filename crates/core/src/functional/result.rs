//! Combinators over fallible results
//!
//! Mirrors [`crate::option`] for `Result<T, E>`. Whenever a combinator works
//! on one variant, the closure for the other variant is never invoked.

/// Transform the success value
pub fn map<T, U, E, F>(res: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    res.map(f)
}

/// Transform the failure value
pub fn map_error<T, E, G, F>(res: Result<T, E>, f: F) -> Result<T, G>
where
    F: FnOnce(E) -> G,
{
    res.map_err(f)
}

/// Chain a fallible step; a failure short-circuits without calling `f`
pub fn and_then<T, U, E, F>(res: Result<T, E>, f: F) -> Result<U, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    match res {
        Ok(value) => f(value),
        Err(error) => Err(error),
    }
}

/// Recover from a failure; a success passes through without calling `f`
pub fn or_else<T, E, G, F>(res: Result<T, E>, f: F) -> Result<T, G>
where
    F: FnOnce(E) -> Result<T, G>,
{
    match res {
        Ok(value) => Ok(value),
        Err(error) => f(error),
    }
}

pub fn unwrap_or<T, E>(res: Result<T, E>, default: T) -> T {
    res.unwrap_or(default)
}

/// The success value, or `f(error)` on failure
pub fn unwrap_or_else<T, E, F>(res: Result<T, E>, f: F) -> T
where
    F: FnOnce(E) -> T,
{
    match res {
        Ok(value) => value,
        Err(error) => f(error),
    }
}

pub fn is_ok<T, E>(res: &Result<T, E>) -> bool {
    res.is_ok()
}

pub fn is_error<T, E>(res: &Result<T, E>) -> bool {
    res.is_err()
}

/// Run `f` on the success value; the result is returned as is
pub fn tap_ok<T, E, F>(res: Result<T, E>, f: F) -> Result<T, E>
where
    F: FnOnce(&T),
{
    if let Ok(value) = &res {
        f(value);
    }
    res
}

/// Run `f` on the failure value; the result is returned as is
pub fn tap_error<T, E, F>(res: Result<T, E>, f: F) -> Result<T, E>
where
    F: FnOnce(&E),
{
    if let Err(error) = &res {
        f(error);
    }
    res
}

pub fn flatten<T, E>(res: Result<Result<T, E>, E>) -> Result<T, E> {
    res.and_then(|inner| inner)
}

/// Keep the success value, discard the error
pub fn to_option<T, E>(res: Result<T, E>) -> Option<T> {
    res.ok()
}

/// Combine multiple Results, failing fast on first error
pub fn sequence<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().collect()
}

/// Apply a function to multiple values, stopping at the first failure
pub fn traverse<T, U, E, I, F>(values: I, f: F) -> Result<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<U, E>,
{
    values.into_iter().map(f).collect()
}

/// Re-run `operation` until it succeeds or `max_attempts` is used up.
///
/// The last failure is returned. At least one attempt is always made.
pub fn retry<T, E, F>(mut operation: F, max_attempts: u32) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut attempts = 0;
    loop {
        match operation() {
            Ok(result) => return Ok(result),
            Err(e) => {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(e);
                }
            }
        }
    }
}

/// Method-style taps for `Result`
pub trait FallibleExt<T, E> {
    /// Tap into Ok values for side effects
    fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T);

    /// Tap into Err values for side effects
    fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E);
}

impl<T, E> FallibleExt<T, E> for Result<T, E> {
    fn tap_ok<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        tap_ok(self, f)
    }

    fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        tap_error(self, f)
    }
}
