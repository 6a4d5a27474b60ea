//! Combinators over ordered sequences
//!
//! Inputs are borrowed slices and are never modified; every function builds a
//! fresh `Vec`. Elements are visited strictly left to right.

use indexmap::IndexSet;
use std::hash::Hash;

/// Map each element to a sequence and concatenate the results in order
pub fn flat_map<T, U, I, F>(seq: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = U>,
{
    seq.iter().flat_map(f).collect()
}

/// Split into consecutive groups of `size` elements; the last group may be
/// shorter. A `size` of zero or less yields no groups at all.
pub fn chunk<T: Clone>(seq: &[T], size: isize) -> Vec<Vec<T>> {
    match usize::try_from(size) {
        Ok(size) if size > 0 => seq.chunks(size).map(<[T]>::to_vec).collect(),
        _ => Vec::new(),
    }
}

/// Drop repeated elements, keeping the first occurrence of each
pub fn uniq<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    seq.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}

/// True as soon as one element matches; false for an empty sequence
pub fn any<T, P>(seq: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// False as soon as one element fails; true for an empty sequence
pub fn all<T, P>(seq: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    seq.iter().all(predicate)
}

pub fn filter<T, P>(seq: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|&item| predicate(item)).cloned().collect()
}

/// Split into `(matching, rest)`, both keeping the original order
pub fn partition<T, P>(seq: &[T], mut predicate: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().cloned().partition(|item| predicate(item))
}
