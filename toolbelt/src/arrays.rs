//! Conversions between plain slices and slices whose elements may be absent.
use crate::{Error, Result};

pub fn to_object<T: Copy>(array: &[T]) -> Vec<Option<T>> {
    array.iter().copied().map(Some).collect()
}

/// Unwraps every element, failing at the first absent one.
pub fn to_primitive<T: Copy>(array: &[Option<T>]) -> Result<Vec<T>> {
    array
        .iter()
        .enumerate()
        .map(|(index, value)| value.ok_or(Error::AbsentElement { index }))
        .collect()
}
