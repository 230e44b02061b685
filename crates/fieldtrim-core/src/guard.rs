//! Precondition checks shared by every public entry point.
//!
//! Each guard either hands the validated value back or fails with a
//! [`TrimError`]; none of them touch the value otherwise.

use crate::error::TrimError;

/// Fail with `NullReference` when `value` is absent.
pub fn require_non_null<T>(value: Option<T>, argument: &'static str) -> Result<T, TrimError> {
    value.ok_or_else(|| TrimError::null_reference(argument))
}

/// Fail with `InvalidArgument` when `text` is absent, empty or only whitespace.
pub fn require_non_blank<'a>(
    text: impl Into<Option<&'a str>>,
    argument: &'static str,
) -> Result<&'a str, TrimError> {
    match text.into() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(TrimError::invalid_argument(
            argument,
            "value cannot be empty or whitespace",
        )),
        None => Err(TrimError::invalid_argument(argument, "value cannot be null")),
    }
}

/// Fail with `InvalidArgument` when `items` is absent or holds no elements.
pub fn require_non_empty<'a, T>(
    items: Option<&'a mut [T]>,
    argument: &'static str,
) -> Result<&'a mut [T], TrimError> {
    match items {
        Some(items) if !items.is_empty() => Ok(items),
        Some(_) => Err(TrimError::invalid_argument(
            argument,
            "collection cannot be empty",
        )),
        None => Err(TrimError::invalid_argument(
            argument,
            "collection cannot be null",
        )),
    }
}

///
/// TESTS
///
