//! Boolean combinators over predicates
//!
//! `and` and `or` evaluate strictly left to right and short-circuit: the
//! right-hand predicate is never called once the left-hand one decides the
//! outcome. Predicates with observable effects can rely on that ordering.

/// Boxed predicate, used where heterogeneous predicates share a collection
pub type BoxedPredicate<T> = Box<dyn Fn(&T) -> bool>;

/// Negate a predicate
pub fn not<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

/// Both predicates must hold; `right` is skipped when `left` fails
pub fn and<T, P, Q>(left: P, right: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| left(value) && right(value)
}

/// Either predicate may hold; `right` is skipped when `left` passes
pub fn or<T, P, Q>(left: P, right: Q) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    Q: Fn(&T) -> bool,
{
    move |value: &T| left(value) || right(value)
}

/// Every predicate must hold. Vacuously true when `predicates` is empty.
pub fn all_of<T: ?Sized>(predicates: Vec<BoxedPredicate<T>>) -> impl Fn(&T) -> bool {
    move |value: &T| predicates.iter().all(|predicate| predicate(value))
}

/// At least one predicate must hold. False when `predicates` is empty.
pub fn any_of<T: ?Sized>(predicates: Vec<BoxedPredicate<T>>) -> impl Fn(&T) -> bool {
    move |value: &T| predicates.iter().any(|predicate| predicate(value))
}
