use std::fmt;

/// A wrapper for untrusted request data that must be validated before use.
///
/// `Tainted<T>` marks values taken from query strings, headers or path
/// segments. The inner value cannot be read from outside this crate; the only
/// way out is a [`Sanitizer`](crate::Sanitizer), which produces a
/// [`Verified<T>`](crate::Verified).
///
/// # Security Properties
///
/// - Does NOT implement `Deref` or any implicit conversion traits
/// - Inner value is inaccessible without sanitization
///
/// # Examples
///
/// ```
/// use query_guard::{ParamSpec, Sanitizer, Tainted};
///
/// let raw_limit = Tainted::new(Some("25".to_string()));
///
/// // Cannot be used as a number directly, only through a sanitizer:
/// let limit = ParamSpec::page_limit().sanitize(raw_limit).unwrap();
/// assert_eq!(*limit.as_ref(), 25);
/// ```
// Clone is needed: the same tainted input may be checked by several specs.
#[derive(Clone)]
pub struct Tainted<T> {
    // Must stay private; a public field bypasses validation entirely.
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value for sanitization.
    ///
    /// Only sanitizer implementations inside this crate may call this, and
    /// only to validate the value before wrapping it in `Verified<T>`.
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

// No Deref, AsRef, Borrow, From<T> or Into<T>: each would let raw request
// data skip validation.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}
