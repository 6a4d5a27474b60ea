//! Function combinators: composition, pipelines, currying and friends

/// Function composition trait for creating pipelines
pub trait Compose<A, B> {
    /// Run `self` first, then feed its output into `g`
    fn then_apply<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
        Self: Fn(A) -> B + Sized;

    /// Run `g` first, then feed its output into `self`
    fn after<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
        Self: Fn(A) -> B + Sized;
}

impl<T, A, B> Compose<A, B> for T
where
    T: Fn(A) -> B,
{
    fn then_apply<G, C>(self, g: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        move |a| g(self(a))
    }

    fn after<G, Z>(self, g: G) -> impl Fn(Z) -> B
    where
        G: Fn(Z) -> A,
    {
        move |z| self(g(z))
    }
}

/// A value threaded through a chain of method-style steps.
///
/// `Pipe::new(x).pipe(f).pipe(g).into_inner()` is `g(f(x))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<T>(pub T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Feed the carried value to `f`
    pub fn pipe<F, U>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(f(self.0))
    }

    /// Feed the carried value to a step that may fail; the first failure
    /// ends the chain
    pub fn try_pipe<F, U, E>(self, f: F) -> Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        f(self.0).map(Pipe::new)
    }

    /// Run `f` only when `condition` is set
    pub fn pipe_if<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        self.pipe_when(|_| condition, f)
    }

    /// Run `f` only when the carried value satisfies `predicate`
    pub fn pipe_when<P, F>(self, predicate: P, f: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> T,
    {
        if predicate(&self.0) {
            self.pipe(f)
        } else {
            self
        }
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Observe the carried value without changing it
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        operators::tap(self.0, f).into()
    }
}

impl<T> From<T> for Pipe<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Free-standing function combinators
pub mod operators {
    use std::rc::Rc;

    /// Mathematical composition: `compose(f, g)(x) == f(g(x))`
    pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(B) -> C,
        G: Fn(A) -> B,
    {
        move |a| f(g(a))
    }

    /// Forward composition operator (f >> g)
    pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a| g(f(a))
    }

    /// Apply a homogeneous sequence of functions left to right.
    ///
    /// An empty sequence leaves `value` untouched. Closures of different types
    /// can be mixed by passing trait objects:
    ///
    /// ```
    /// use pipekit_core::functional::composition::operators::pipe;
    ///
    /// let add_one = |x: i32| x + 1;
    /// let double = |x: i32| x * 2;
    /// let steps: [&dyn Fn(i32) -> i32; 2] = [&add_one, &double];
    /// assert_eq!(pipe(5, steps), 12);
    /// ```
    pub fn pipe<T, I>(value: T, functions: I) -> T
    where
        I: IntoIterator,
        I::Item: FnOnce(T) -> T,
    {
        functions.into_iter().fold(value, |acc, f| f(acc))
    }

    pub fn pipe2<A, B, C>(value: A, f: impl FnOnce(A) -> B, g: impl FnOnce(B) -> C) -> C {
        g(f(value))
    }

    pub fn pipe3<A, B, C, D>(
        value: A,
        f: impl FnOnce(A) -> B,
        g: impl FnOnce(B) -> C,
        h: impl FnOnce(C) -> D,
    ) -> D {
        h(g(f(value)))
    }

    pub fn pipe4<A, B, C, D, E>(
        value: A,
        f: impl FnOnce(A) -> B,
        g: impl FnOnce(B) -> C,
        h: impl FnOnce(C) -> D,
        i: impl FnOnce(D) -> E,
    ) -> E {
        i(h(g(f(value))))
    }

    /// Identity function
    pub fn identity<T>(x: T) -> T {
        x
    }

    /// Constant function
    pub fn constant<T, U>(value: T) -> impl Fn(U) -> T
    where
        T: Clone,
    {
        move |_| value.clone()
    }

    /// Apply `f` to `value`
    pub fn apply<T, U, F>(value: T, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        f(value)
    }

    /// Run a side effect on `value` and hand it back untouched
    pub fn tap<T, F>(value: T, f: F) -> T
    where
        F: FnOnce(&T),
    {
        f(&value);
        value
    }

    /// Flip the arguments of a two-argument function
    pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |b, a| f(a, b)
    }

    /// Curry a two-argument function. Each partial application shares `f`.
    pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
    where
        F: Fn(A, B) -> C + 'static,
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        let f = Rc::new(f);
        move |a| {
            let f = Rc::clone(&f);
            Box::new(move |b| f(a.clone(), b))
        }
    }

    /// Uncurry a curried function
    pub fn uncurry<A, B, C, F, G>(f: F) -> impl Fn(A, B) -> C
    where
        F: Fn(A) -> G,
        G: FnOnce(B) -> C,
    {
        move |a, b| f(a)(b)
    }
}

/// Thread a value through each step in turn, yielding a [`Pipe`]
#[macro_export]
macro_rules! pipeline {
    ($value:expr) => {
        $crate::functional::composition::Pipe::new($value)
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let result = $crate::functional::composition::Pipe::new($value);
        $(
            let result = result.pipe($func);
        )+
        result
    }};
}

/// Like [`pipeline!`] for fallible steps; returns early with the first error
#[macro_export]
macro_rules! try_pipeline {
    ($value:expr) => {
        Ok($crate::functional::composition::Pipe::new($value))
    };
    ($value:expr, $($func:expr),+ $(,)?) => {{
        let result = $crate::functional::composition::Pipe::new($value);
        $(
            let result = result.try_pipe($func)?;
        )+
        Ok(result)
    }};
}
