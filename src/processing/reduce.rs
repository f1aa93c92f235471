//! Left-to-right folds over slices.

use crate::error::{HofError, HofResult};

/// Fold `input` starting from `seed`, strictly left to right.
///
/// An empty `input` returns `seed` unchanged.
pub fn fold<A, T, F>(mut combine: F, input: &[T], seed: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = seed;
    for item in input {
        acc = combine(acc, item);
    }
    acc
}

/// Fold `input` using its first element as the initial accumulator.
///
/// Returns [`HofError::EmptyReduce`] if `input` is empty.
pub fn reduce<T, F>(combine: F, input: &[T]) -> HofResult<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    match input.split_first() {
        Some((first, rest)) => Ok(fold(combine, rest, first.clone())),
        None => Err(HofError::EmptyReduce),
    }
}

/// Like [`reduce`], but an empty `input` yields `T::default()`.
pub fn reduce_or_default<T, F>(combine: F, input: &[T]) -> T
where
    T: Clone + Default,
    F: FnMut(T, &T) -> T,
{
    match input.split_first() {
        Some((first, rest)) => fold(combine, rest, first.clone()),
        None => T::default(),
    }
}

/// Like [`fold`], but stops at the first error returned by `combine` and returns it unchanged.
pub fn try_fold<A, T, E, F>(mut combine: F, input: &[T], seed: A) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    let mut acc = seed;
    for item in input {
        acc = combine(acc, item)?;
    }
    Ok(acc)
}
