//! Property-based tests for the combinator laws
//!
//! Generators live here so every law below draws from the same value shapes.

use crate::functional::prelude::*;
use crate::{option, result, sequence};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;
    use proptest::option as prop_option;

    /// Small integers keep arithmetic in the laws clear of overflow
    pub fn small_int() -> impl Strategy<Value = i32> {
        -1_000i32..1_000
    }

    /// Generate optional values
    pub fn maybe<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Option<T>> {
        prop_option::of(element)
    }

    /// Generate success or failure with a string error
    pub fn outcome<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = std::result::Result<T, String>> {
        prop_oneof![
            element.prop_map(Ok::<T, String>),
            "[a-z]{1,8}".prop_map(Err::<T, String>),
        ]
    }

    /// Generate lists of values for testing sequences, empty ones included
    pub fn list<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<T>> {
        vec(element, 0..=64)
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::proptest;
    use std::cell::Cell;

    fn add_three(n: i32) -> i32 {
        n + 3
    }

    fn double(n: i32) -> i32 {
        n * 2
    }

    proptest! {
        /// map(map(x, f), g) == map(x, compose(g, f)) for options
        #[test]
        fn option_functor_composition(opt in maybe(small_int())) {
            let stepwise = option::map(option::map(opt, add_three), double);
            let composed = option::map(opt, compose(double, add_three));
            prop_assert_eq!(stepwise, composed);
        }

        /// map(map(x, f), g) == map(x, compose(g, f)) for results
        #[test]
        fn result_functor_composition(res in outcome(small_int())) {
            let stepwise = result::map(result::map(res.clone(), add_three), double);
            let composed = result::map(res, compose(double, add_three));
            prop_assert_eq!(stepwise, composed);
        }

        /// and_then(Some(v), f) == f(v)
        #[test]
        fn option_left_identity(v in small_int()) {
            let f = |n: i32| option::when(n % 3 == 0, n / 3);
            prop_assert_eq!(option::and_then(Some(v), f), f(v));
        }

        /// and_then(opt, Some) == opt
        #[test]
        fn option_right_identity(opt in maybe(small_int())) {
            prop_assert_eq!(option::and_then(opt, Some), opt);
        }

        /// and_then(Ok(v), f) == f(v)
        #[test]
        fn result_left_identity(v in small_int()) {
            let f = |n: i32| {
                if n % 2 == 0 {
                    Ok(n / 2)
                } else {
                    Err(format!("{n} is odd"))
                }
            };
            prop_assert_eq!(result::and_then(Ok(v), f), f(v));
        }

        /// and_then(res, Ok) == res
        #[test]
        fn result_right_identity(res in outcome(small_int())) {
            prop_assert_eq!(result::and_then(res.clone(), Ok), res);
        }

        /// and_then(Err(e), f) never calls f
        #[test]
        fn result_and_then_short_circuits(error in "[a-z]{1,8}") {
            let calls = Cell::new(0);
            let out = result::and_then(Err::<i32, String>(error.clone()), |n| {
                calls.set(calls.get() + 1);
                Ok::<i32, String>(n)
            });
            prop_assert_eq!(out, Err(error));
            prop_assert_eq!(calls.get(), 0);
        }

        /// or_else on Some never calls the fallback
        #[test]
        fn option_or_else_is_lazy(v in small_int()) {
            let calls = Cell::new(0);
            let out = option::or_else(Some(v), || {
                calls.set(calls.get() + 1);
                None
            });
            prop_assert_eq!(out, Some(v));
            prop_assert_eq!(calls.get(), 0);
        }

        /// from_result(to_result(opt, e)) == opt
        #[test]
        fn option_result_round_trip(opt in maybe(small_int())) {
            prop_assert_eq!(option::from_result(option::to_result(opt, "e")), opt);
        }

        /// Concatenated chunks rebuild the input; only the last chunk may be short
        #[test]
        fn chunk_reconstructs_input(seq in list(small_int()), size in 1isize..10) {
            let chunks = sequence::chunk(&seq, size);
            let rebuilt: Vec<i32> = chunks.concat();
            prop_assert_eq!(&rebuilt, &seq);

            if let Some((last, init)) = chunks.split_last() {
                prop_assert!(init.iter().all(|c| c.len() == size as usize));
                prop_assert!(!last.is_empty() && last.len() <= size as usize);
            }
        }

        /// Non-positive sizes yield no chunks
        #[test]
        fn chunk_rejects_non_positive_sizes(seq in list(small_int()), size in isize::MIN..=0) {
            prop_assert!(sequence::chunk(&seq, size).is_empty());
        }

        /// uniq output has no repeats and keeps first-occurrence order
        #[test]
        fn uniq_is_ordered_subsequence(seq in list(0i32..10)) {
            let unique = sequence::uniq(&seq);
            let mut first_seen = Vec::new();
            for item in &seq {
                if !first_seen.contains(item) {
                    first_seen.push(*item);
                }
            }
            prop_assert_eq!(unique, first_seen);
        }

        /// compose(compose(f, g), h) == compose(f, compose(g, h))
        #[test]
        fn composition_is_associative(x in small_int()) {
            let f = |n: i32| n + 1;
            let g = |n: i32| n * 2;
            let h = |n: i32| n - 5;

            let result1 = compose(compose(f, g), h)(x);
            let result2 = compose(f, compose(g, h))(x);

            prop_assert_eq!(result1, result2);
        }

        /// Test that identity is the identity for composition
        #[test]
        fn identity_is_composition_identity(x in small_int()) {
            let f = |n: i32| n * 3 + 7;

            prop_assert_eq!(compose(identity, f)(x), f(x));
            prop_assert_eq!(compose(f, identity)(x), f(x));
        }

        /// flip(flip(f)) behaves like f
        #[test]
        fn flip_is_an_involution(a in small_int(), b in small_int()) {
            let sub = |x: i32, y: i32| x - y;
            prop_assert_eq!(flip(flip(sub))(a, b), sub(a, b));
        }

        /// uncurry(curry(f)) behaves like f, and curry(uncurry(g)) like g
        #[test]
        fn curry_round_trip(a in small_int(), b in small_int()) {
            let sub = |x: i32, y: i32| x - y;
            prop_assert_eq!(uncurry(curry(sub))(a, b), sub(a, b));
            prop_assert_eq!(curry(uncurry(curry(sub)))(a)(b), sub(a, b));
            prop_assert_eq!(curry(flip(sub))(b)(a), sub(a, b));
        }

        /// Test that pipe operations preserve values correctly
        #[test]
        fn pipe_operations_preserve_values(x in small_int()) {
            let result = Pipe::new(x)
                .pipe(|n| n + 1)
                .pipe(|n| n - 1)
                .into_inner();
            prop_assert_eq!(result, x);
        }

        /// all and any agree with their negated duals
        #[test]
        fn quantifier_duality(seq in list(small_int())) {
            let positive = |n: &i32| *n > 0;
            prop_assert_eq!(
                sequence::all(&seq, positive),
                !sequence::any(&seq, |n| !positive(n))
            );
        }
    }
}
