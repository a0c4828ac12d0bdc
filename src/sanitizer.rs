use crate::{BoundedNumber, ParamError, ParamSpec, Tainted, Verified};

/// Trait for validating tainted request values into verified values.
///
/// # Invariants
///
/// Implementations MUST:
/// - Validate the input according to their rules
/// - Only call `Verified::new_unchecked` after validation succeeds
/// - Return `Err(ParamError)` if validation fails
/// - Not echo the raw input in errors
///
/// # Examples
///
/// ```
/// use query_guard::{ParamSpec, Sanitizer, Tainted};
///
/// let limit = ParamSpec::new(1_i64, 100, 40).unwrap();
///
/// let ok = limit.sanitize(Tainted::new(Some("50".to_string()))).unwrap();
/// assert_eq!(ok.into_inner(), 50);
///
/// let err = limit.sanitize(Tainted::new(Some("150".to_string())));
/// assert!(err.unwrap_err().is_out_of_range());
/// ```
pub trait Sanitizer<T> {
    /// The validated type produced from `T`.
    type Output;

    /// Sanitizes a tainted value, returning a verified value on success.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Verified<Self::Output>, ParamError>;
}

/// Optional raw query values become bounded numbers.
impl<N: BoundedNumber> Sanitizer<Option<String>> for ParamSpec<N> {
    type Output = N;

    fn sanitize(&self, input: Tainted<Option<String>>) -> Result<Verified<N>, ParamError> {
        let raw = input.into_inner();
        self.parse(raw.as_deref()).map(Verified::new_unchecked)
    }
}

/// Present raw values (path parameters, headers) become bounded numbers.
///
/// A blank value counts as absent and yields the default.
impl<N: BoundedNumber> Sanitizer<String> for ParamSpec<N> {
    type Output = N;

    fn sanitize(&self, input: Tainted<String>) -> Result<Verified<N>, ParamError> {
        let raw = input.into_inner();
        self.parse_str(&raw).map(Verified::new_unchecked)
    }
}
