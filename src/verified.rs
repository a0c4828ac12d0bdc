/// A value that passed validation and is safe to use.
///
/// `Verified<T>` is only produced by a [`Sanitizer`](crate::Sanitizer). There
/// is no public constructor and no `From<T>`, so holding one proves the value
/// went through a validation path.
///
/// # Access
///
/// - [`AsRef::as_ref`]: Borrow the verified value
/// - [`into_inner`](Self::into_inner): Consume and extract the value
///
/// # Examples
///
/// External callers cannot create `Verified<T>` directly:
///
/// ```compile_fail
/// use query_guard::Verified;
///
/// let verified = Verified::new(40_i64);
/// ```
///
/// ```
/// use query_guard::{ParamSpec, Sanitizer, Tainted};
///
/// let verified = ParamSpec::page_limit()
///     .sanitize(Tainted::new(None))
///     .expect("absent input takes the default");
///
/// assert_eq!(verified.into_inner(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verified<T> {
    inner: T,
}

impl<T> Verified<T> {
    /// Creates a `Verified<T>` without performing validation.
    ///
    /// Callers inside the crate must have validated `value` already.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self { inner: value }
    }

    /// Consumes the `Verified<T>` and returns the inner value.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> AsRef<T> for Verified<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}
