//! Element-wise mapping over slices.

/// Returns a new vector with `transform` applied to every element of `input`, in order.
///
/// `transform` is called exactly once per element, starting at index 0.
pub fn map<T, U, F>(mut transform: F, input: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        out.push(transform(item));
    }
    out
}

/// Like [`map`], but stops at the first error returned by `transform` and returns it unchanged.
pub fn try_map<T, U, E, F>(mut transform: F, input: &[T]) -> Result<Vec<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        out.push(transform(item)?);
    }
    Ok(out)
}
