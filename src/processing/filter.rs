//! Order-preserving filtering over slices.

/// Returns a new vector holding the elements of `input` for which `predicate` is `true`.
///
/// Relative order is preserved. When nothing matches the result is an empty vector.
pub fn filter<T, F>(mut predicate: F, input: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    input.iter().filter(|&item| predicate(item)).cloned().collect()
}

/// Like [`filter`], but stops at the first error returned by `predicate` and returns it unchanged.
pub fn try_filter<T, E, F>(mut predicate: F, input: &[T]) -> Result<Vec<T>, E>
where
    T: Clone,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in input {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}
