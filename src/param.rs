use std::cmp::Ordering;
use std::fmt;

use crate::Error;

/// Whether a bounded parameter holds an integer or a real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Whole numbers only (`i64`).
    Integer,
    /// Finite decimal numbers (`f64`).
    Real,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "an integer"),
            Self::Real => write!(f, "a number"),
        }
    }
}

/// A numeric value reported in a validation failure.
///
/// Failures from integer and real fields share this type so a schema can
/// collect them side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// An integer value.
    Integer(i64),
    /// A real value.
    Real(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Real(value) => write!(f, "{}", value),
        }
    }
}

/// Error returned when a bounded parameter rejects its input.
///
/// The error never contains the raw rejected text. Out-of-range failures carry
/// the parsed number and the configured bounds so callers can build a precise
/// client-facing message.
///
/// # Examples
///
/// ```
/// use query_guard::{ParamErrorKind, ParamSpec, ParamValue};
///
/// let spec = ParamSpec::new(1_i64, 100, 40).unwrap();
/// let error = spec.parse(Some("150")).unwrap_err();
///
/// assert_eq!(
///     error.kind(),
///     &ParamErrorKind::OutOfRange {
///         value: ParamValue::Integer(150),
///         min: ParamValue::Integer(1),
///         max: ParamValue::Integer(100),
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParamError {
    field: Option<String>,
    kind: ParamErrorKind,
}

impl ParamError {
    /// Creates a new parameter error not yet attached to a field.
    pub fn new(kind: ParamErrorKind) -> Self {
        Self { field: None, kind }
    }

    /// Attaches the name of the field that was rejected.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Returns the field name, if one was attached.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ParamErrorKind {
        &self.kind
    }

    /// Returns `true` if the input was not a well-formed number.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self.kind, ParamErrorKind::InvalidFormat { .. })
    }

    /// Returns `true` if the input parsed but fell outside the bounds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ParamErrorKind::OutOfRange { .. })
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "invalid `{}`: {}", field, self.kind),
            None => write!(f, "invalid parameter: {}", self.kind),
        }
    }
}

impl std::error::Error for ParamError {}

/// Kind of parameter validation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamErrorKind {
    /// Input is not a well-formed number of the expected kind.
    InvalidFormat {
        /// The number kind the field accepts.
        expected: NumberKind,
    },
    /// Input parsed but lies outside `[min, max]`.
    OutOfRange {
        /// The parsed value.
        value: ParamValue,
        /// Configured inclusive lower bound.
        min: ParamValue,
        /// Configured inclusive upper bound.
        max: ParamValue,
    },
}

impl fmt::Display for ParamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { expected } => write!(f, "expected {}", expected),
            Self::OutOfRange { value, min, max } => {
                write!(f, "{} is out of range [{}, {}]", value, min, max)
            }
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Numeric types a [`ParamSpec`] can be built over.
///
/// Implemented for `i64` (integer parameters) and `f64` (real parameters).
/// This trait is sealed.
pub trait BoundedNumber:
    private::Sealed + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The kind of number this type represents.
    const KIND: NumberKind;

    /// Converts a string that already passed the decimal grammar check.
    ///
    /// Returns `Err` with an approximation when the literal is well formed but
    /// not representable in `Self`.
    #[doc(hidden)]
    fn from_decimal(text: &str) -> Result<Self, f64>;

    /// Returns whether the value may be used as a bound or default.
    #[doc(hidden)]
    fn is_valid_bound(self) -> bool;

    /// Converts the value into a [`ParamValue`] for error reporting.
    fn to_param_value(self) -> ParamValue;
}

impl BoundedNumber for i64 {
    const KIND: NumberKind = NumberKind::Integer;

    fn from_decimal(text: &str) -> Result<Self, f64> {
        // Only overflow can fail here; the grammar already admitted the text.
        text.parse::<i64>()
            .map_err(|_| text.parse::<f64>().unwrap_or(f64::INFINITY))
    }

    fn is_valid_bound(self) -> bool {
        true
    }

    fn to_param_value(self) -> ParamValue {
        ParamValue::Integer(self)
    }
}

impl BoundedNumber for f64 {
    const KIND: NumberKind = NumberKind::Real;

    fn from_decimal(text: &str) -> Result<Self, f64> {
        text.parse::<f64>().map_err(|_| f64::NAN)
    }

    fn is_valid_bound(self) -> bool {
        self.is_finite()
    }

    fn to_param_value(self) -> ParamValue {
        ParamValue::Real(self)
    }
}

/// Checks the strict decimal grammar shared by every bounded parameter.
///
/// Integers: `-?[0-9]+`. Reals: `-?[0-9]+(\.[0-9]+)?`. A leading `+`,
/// exponents, `NaN`/`Infinity`, hex, bare `.5` or `5.` are all rejected.
fn is_strict_decimal(text: &str, kind: NumberKind) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if kind == NumberKind::Real => (whole, Some(fraction)),
        Some(_) => return false,
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Compares a grammar-checked decimal literal with the shortest decimal that
/// round-trips to `bound`, which is also how bounds are displayed.
fn compare_to_f64(literal: &str, bound: f64) -> Ordering {
    compare_decimals(literal, &bound.to_string())
}

fn compare_decimals(a: &str, b: &str) -> Ordering {
    let (a_negative, a_whole, a_fraction) = split_decimal(a);
    let (b_negative, b_whole, b_fraction) = split_decimal(b);

    let magnitude = a_whole
        .len()
        .cmp(&b_whole.len())
        .then_with(|| a_whole.cmp(b_whole))
        .then_with(|| a_fraction.cmp(b_fraction));

    match (a_negative, b_negative) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => magnitude,
        (true, true) => magnitude.reverse(),
    }
}

/// Splits a decimal into sign, whole digits and fraction digits with
/// insignificant zeros removed. Zero is never negative.
fn split_decimal(text: &str) -> (bool, &str, &str) {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');
    let is_zero = whole.is_empty() && fraction.is_empty();

    (negative && !is_zero, whole, fraction)
}

/// Bounds and default for one numeric query parameter.
///
/// A `ParamSpec` is immutable configuration: build it once when a route schema
/// is defined and reuse it for every request. Parsing is pure and
/// deterministic, so a spec can be shared across threads freely.
///
/// # Parsing Rules
///
/// - Absent, empty, or whitespace-only input yields the default
/// - Surrounding whitespace is trimmed
/// - The remaining text must be a strict decimal literal (see
///   [`parse`](Self::parse)); anything else is `InvalidFormat`
/// - A number outside `[min, max]` is `OutOfRange` and is never clamped
///
/// # Examples
///
/// ```
/// use query_guard::ParamSpec;
///
/// let ratio = ParamSpec::new(0.0_f64, 1.0, 0.5).unwrap();
/// assert_eq!(ratio.parse(Some(" 0.25 ")), Ok(0.25));
/// assert!(ratio.parse(Some("1.5")).is_err());
/// assert!(ratio.parse(Some("1e-1")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec<N> {
    min: N,
    max: N,
    default: N,
}

impl<N: BoundedNumber> ParamSpec<N> {
    /// Creates a spec with inclusive bounds and a default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] unless `min <= default <= max` and every
    /// value is finite.
    pub fn new(min: N, max: N, default: N) -> Result<Self, Error> {
        if !(min.is_valid_bound() && max.is_valid_bound() && default.is_valid_bound()) {
            return Err(Error::InvalidSpec {
                reason: "bounds and default must be finite",
            });
        }
        if min > max {
            return Err(Error::InvalidSpec {
                reason: "min must not exceed max",
            });
        }
        if default < min || default > max {
            return Err(Error::InvalidSpec {
                reason: "default must lie within [min, max]",
            });
        }

        Ok(Self { min, max, default })
    }

    /// Returns the inclusive lower bound.
    pub fn min(&self) -> N {
        self.min
    }

    /// Returns the inclusive upper bound.
    pub fn max(&self) -> N {
        self.max
    }

    /// Returns the value used when the parameter is absent.
    pub fn default_value(&self) -> N {
        self.default
    }

    /// Returns `true` for integer parameters.
    pub fn is_integer(&self) -> bool {
        N::KIND == NumberKind::Integer
    }

    /// Parses an optional raw query value.
    ///
    /// After trimming, integer specs accept `-?[0-9]+` and real specs accept
    /// `-?[0-9]+(\.[0-9]+)?`. `"3.0"` is therefore not an integer.
    ///
    /// Real bounds are compared against the literal as written, using the
    /// bound's displayed decimal form, so a literal just past a bound is
    /// rejected even when it rounds to the bound.
    ///
    /// # Errors
    ///
    /// - [`ParamErrorKind::InvalidFormat`] if the text is not a strict decimal
    ///   literal of the right kind
    /// - [`ParamErrorKind::OutOfRange`] if the number is outside `[min, max]`,
    ///   including integers too large for `i64`
    ///
    /// # Examples
    ///
    /// ```
    /// use query_guard::ParamSpec;
    ///
    /// let limit = ParamSpec::new(1_i64, 100, 40).unwrap();
    /// assert_eq!(limit.parse(Some("   ")), Ok(40));
    /// assert!(limit.parse(Some("3.5")).unwrap_err().is_invalid_format());
    /// assert!(limit.parse(Some("+5")).unwrap_err().is_invalid_format());
    /// ```
    pub fn parse(&self, raw: Option<&str>) -> Result<N, ParamError> {
        let text = match raw.map(str::trim) {
            None | Some("") => return Ok(self.default),
            Some(text) => text,
        };

        if !is_strict_decimal(text, N::KIND) {
            return Err(ParamError::new(ParamErrorKind::InvalidFormat {
                expected: N::KIND,
            }));
        }

        let value = match N::from_decimal(text) {
            Ok(value) => value,
            Err(approx) => return Err(self.out_of_range(ParamValue::Real(approx))),
        };

        if value < self.min || value > self.max || self.rounded_onto_bound(text, value) {
            return Err(self.out_of_range(value.to_param_value()));
        }

        Ok(value)
    }

    // Rounding is monotonic, so a literal outside the bounds can only be
    // admitted by landing exactly on `min` or `max`.
    fn rounded_onto_bound(&self, text: &str, value: N) -> bool {
        let bound = match value.to_param_value() {
            ParamValue::Real(bound) => bound,
            ParamValue::Integer(_) => return false,
        };
        (value == self.min && compare_to_f64(text, bound) == Ordering::Less)
            || (value == self.max && compare_to_f64(text, bound) == Ordering::Greater)
    }

    /// Parses a raw value that is known to be present.
    pub fn parse_str(&self, raw: &str) -> Result<N, ParamError> {
        self.parse(Some(raw))
    }

    fn out_of_range(&self, value: ParamValue) -> ParamError {
        ParamError::new(ParamErrorKind::OutOfRange {
            value,
            min: self.min.to_param_value(),
            max: self.max.to_param_value(),
        })
    }
}

impl ParamSpec<i64> {
    /// Page size parameter: integer in `[1, 100]`, default 40.
    pub const fn page_limit() -> Self {
        Self {
            min: 1,
            max: 100,
            default: 40,
        }
    }

    /// Page offset parameter: non-negative integer, default 0.
    pub const fn page_offset() -> Self {
        Self {
            min: 0,
            max: i64::MAX,
            default: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit() -> ParamSpec<i64> {
        ParamSpec::new(1, 100, 40).expect("valid spec")
    }

    fn ratio() -> ParamSpec<f64> {
        ParamSpec::new(0.0, 1.0, 0.5).expect("valid spec")
    }

    #[test]
    fn absent_input_uses_default() {
        assert_eq!(limit().parse(None), Ok(40));
    }

    #[test]
    fn empty_input_uses_default() {
        assert_eq!(limit().parse(Some("")), Ok(40));
    }

    #[test]
    fn whitespace_only_input_uses_default() {
        assert_eq!(limit().parse(Some(" \t\n ")), Ok(40));
    }

    #[test]
    fn in_range_value_is_returned() {
        assert_eq!(limit().parse(Some("50")), Ok(50));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(limit().parse(Some("1")), Ok(1));
        assert_eq!(limit().parse(Some("100")), Ok(100));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(limit().parse(Some("  7 ")), Ok(7));
    }

    #[test]
    fn above_max_is_out_of_range_not_clamped() {
        let error = limit().parse(Some("150")).unwrap_err();

        assert_eq!(
            error.kind(),
            &ParamErrorKind::OutOfRange {
                value: ParamValue::Integer(150),
                min: ParamValue::Integer(1),
                max: ParamValue::Integer(100),
            }
        );
    }

    #[test]
    fn below_min_is_out_of_range() {
        let error = limit().parse(Some("0")).unwrap_err();
        assert!(error.is_out_of_range());

        let error = limit().parse(Some("-3")).unwrap_err();
        assert!(error.is_out_of_range());
    }

    #[test]
    fn integer_spec_rejects_fraction() {
        let error = limit().parse(Some("3.5")).unwrap_err();

        assert_eq!(
            error.kind(),
            &ParamErrorKind::InvalidFormat {
                expected: NumberKind::Integer
            }
        );
    }

    #[test]
    fn integer_spec_rejects_integral_fraction() {
        assert!(limit().parse(Some("3.0")).unwrap_err().is_invalid_format());
    }

    #[test]
    fn rejects_leading_plus() {
        assert!(limit().parse(Some("+5")).unwrap_err().is_invalid_format());
        assert!(ratio().parse(Some("+0.5")).unwrap_err().is_invalid_format());
    }

    #[test]
    fn rejects_scientific_notation() {
        assert!(limit().parse(Some("1e2")).unwrap_err().is_invalid_format());
        assert!(ratio().parse(Some("5E-1")).unwrap_err().is_invalid_format());
    }

    #[test]
    fn rejects_nan_and_infinity_literals() {
        for literal in ["NaN", "nan", "Infinity", "-Infinity", "inf", "-inf"] {
            assert!(
                limit().parse(Some(literal)).unwrap_err().is_invalid_format(),
                "integer spec accepted {literal}"
            );
            assert!(
                ratio().parse(Some(literal)).unwrap_err().is_invalid_format(),
                "real spec accepted {literal}"
            );
        }
    }

    #[test]
    fn rejects_garbage() {
        for raw in ["abc", "12abc", "1 2", "0x10", "--1", "-", ".", "1,000", "½"] {
            assert!(
                limit().parse(Some(raw)).unwrap_err().is_invalid_format(),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn real_spec_rejects_bare_decimal_point_forms() {
        assert!(ratio().parse(Some(".5")).unwrap_err().is_invalid_format());
        assert!(ratio().parse(Some("5.")).unwrap_err().is_invalid_format());
    }

    #[test]
    fn real_spec_accepts_integers_and_decimals() {
        assert_eq!(ratio().parse(Some("1")), Ok(1.0));
        assert_eq!(ratio().parse(Some("0.125")), Ok(0.125));
    }

    #[test]
    fn real_spec_out_of_range() {
        let error = ratio().parse(Some("1.5")).unwrap_err();

        assert_eq!(
            error.kind(),
            &ParamErrorKind::OutOfRange {
                value: ParamValue::Real(1.5),
                min: ParamValue::Real(0.0),
                max: ParamValue::Real(1.0),
            }
        );
    }

    #[test]
    fn integer_overflow_is_out_of_range() {
        let error = limit().parse(Some("99999999999999999999")).unwrap_err();

        match error.kind() {
            ParamErrorKind::OutOfRange { value, max, .. } => {
                assert_eq!(*value, ParamValue::Real(99999999999999999999.0));
                assert_eq!(*max, ParamValue::Integer(100));
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[test]
    fn real_overflow_is_out_of_range() {
        let huge = format!("1{}", "0".repeat(400));
        assert!(ratio().parse(Some(huge.as_str())).unwrap_err().is_out_of_range());
    }

    #[test]
    fn real_just_above_max_is_not_rounded_into_range() {
        let error = ratio()
            .parse(Some("1.00000000000000000001"))
            .unwrap_err();

        assert!(error.is_out_of_range());
    }

    #[test]
    fn real_just_below_min_is_not_rounded_into_range() {
        let tiny_negative = format!("-0.{}1", "0".repeat(400));

        assert!(ratio()
            .parse(Some(tiny_negative.as_str()))
            .unwrap_err()
            .is_out_of_range());
    }

    #[test]
    fn real_literal_exactly_on_bound_is_accepted() {
        assert_eq!(ratio().parse(Some("1.000000000000000000000")), Ok(1.0));
        assert_eq!(ratio().parse(Some("-0.0")), Ok(0.0));
    }

    #[test]
    fn real_inside_range_may_round_onto_bound() {
        assert_eq!(ratio().parse(Some("0.99999999999999999999")), Ok(1.0));
    }

    #[test]
    fn real_bound_is_compared_in_its_displayed_form() {
        let spec = ParamSpec::new(0.1_f64, 0.3, 0.2).expect("valid spec");

        assert_eq!(spec.parse(Some("0.1")), Ok(0.1));
        assert_eq!(spec.parse(Some("0.3")), Ok(0.3));
        assert!(spec
            .parse(Some("0.09999999999999999999"))
            .unwrap_err()
            .is_out_of_range());
        assert!(spec
            .parse(Some("0.30000000000000000001"))
            .unwrap_err()
            .is_out_of_range());
    }

    #[test]
    fn real_bound_without_short_decimal_form() {
        let third = ParamSpec::new(0.0_f64, 1.0 / 3.0, 0.0).expect("valid spec");
        let shown = (1.0_f64 / 3.0).to_string();
        let nudged_up = format!("{}1", shown);

        assert_eq!(third.parse(Some(shown.as_str())), Ok(1.0 / 3.0));
        assert!(third
            .parse(Some(nudged_up.as_str()))
            .unwrap_err()
            .is_out_of_range());
    }

    #[test]
    fn decimal_comparison_ignores_insignificant_zeros() {
        assert_eq!(compare_decimals("007.500", "7.5"), Ordering::Equal);
        assert_eq!(compare_decimals("-0.000", "0"), Ordering::Equal);
        assert_eq!(compare_decimals("10", "9.999"), Ordering::Greater);
        assert_eq!(compare_decimals("-10", "-9.999"), Ordering::Less);
        assert_eq!(compare_decimals("0.5", "0.51"), Ordering::Less);
    }

    #[test]
    fn parse_str_matches_parse() {
        assert_eq!(limit().parse_str("12"), limit().parse(Some("12")));
        assert_eq!(limit().parse_str(""), Ok(40));
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(matches!(
            ParamSpec::new(10_i64, 1, 5),
            Err(Error::InvalidSpec { .. })
        ));
    }

    #[test]
    fn new_rejects_default_outside_bounds() {
        assert!(ParamSpec::new(1_i64, 10, 0).is_err());
        assert!(ParamSpec::new(1_i64, 10, 11).is_err());
    }

    #[test]
    fn new_rejects_non_finite_real_bounds() {
        assert!(ParamSpec::new(f64::NAN, 1.0, 0.5).is_err());
        assert!(ParamSpec::new(0.0, f64::INFINITY, 0.5).is_err());
        assert!(ParamSpec::new(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn new_accepts_degenerate_range() {
        let spec = ParamSpec::new(7_i64, 7, 7).expect("min == max is valid");
        assert_eq!(spec.parse(Some("7")), Ok(7));
        assert!(spec.parse(Some("8")).is_err());
    }

    #[test]
    fn accessors_report_configuration() {
        let spec = limit();
        assert_eq!(spec.min(), 1);
        assert_eq!(spec.max(), 100);
        assert_eq!(spec.default_value(), 40);
        assert!(spec.is_integer());
        assert!(!ratio().is_integer());
    }

    #[test]
    fn presets_hold_their_invariants() {
        assert_eq!(ParamSpec::page_limit(), limit());
        let offset = ParamSpec::page_offset();
        assert_eq!(offset.parse(None), Ok(0));
        assert_eq!(offset.parse(Some("9223372036854775807")), Ok(i64::MAX));
        assert!(offset.parse(Some("-1")).unwrap_err().is_out_of_range());
    }

    #[test]
    fn error_display_names_field_and_bounds() {
        let error = limit().parse(Some("150")).unwrap_err().with_field("limit");

        assert_eq!(error.field(), Some("limit"));
        assert_eq!(format!("{}", error), "invalid `limit`: 150 is out of range [1, 100]");
    }

    #[test]
    fn invalid_format_display_does_not_echo_input() {
        let raw = "<script>alert(1)</script>";
        let error = limit().parse(Some(raw)).unwrap_err();
        let output = format!("{}", error);

        assert_eq!(output, "invalid parameter: expected an integer");
        assert!(!output.contains("script"));
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_int_spec, arb_real_spec};
        use proptest::prelude::*;

        proptest! {
            /// Property: absent input always yields the configured default
            #[test]
            fn proptest_absent_yields_default(spec in arb_int_spec()) {
                prop_assert_eq!(spec.parse(None), Ok(spec.default_value()));
            }

            /// Property: every in-range integer round-trips through its string form
            #[test]
            fn proptest_in_range_integer_round_trips(
                (spec, value) in arb_int_spec().prop_flat_map(|spec| {
                    (Just(spec), spec.min()..=spec.max())
                })
            ) {
                prop_assert_eq!(spec.parse(Some(value.to_string().as_str())), Ok(value));
            }

            /// Property: values above max are rejected, never clamped
            #[test]
            fn proptest_above_max_never_clamped(spec in arb_int_spec(), excess in 1_i64..1_000_000) {
                let value = spec.max() + excess;
                let result = spec.parse(Some(value.to_string().as_str()));

                prop_assert!(result.is_err());
                prop_assert!(result.unwrap_err().is_out_of_range());
            }

            /// Property: values below min are rejected, never clamped
            #[test]
            fn proptest_below_min_never_clamped(spec in arb_int_spec(), deficit in 1_i64..1_000_000) {
                let value = spec.min() - deficit;
                let result = spec.parse(Some(value.to_string().as_str()));

                prop_assert!(result.is_err());
                prop_assert!(result.unwrap_err().is_out_of_range());
            }

            /// Property: in-range reals round-trip through their display form
            #[test]
            fn proptest_in_range_real_round_trips(
                (spec, value) in arb_real_spec().prop_flat_map(|spec| {
                    (Just(spec), spec.min()..=spec.max())
                })
            ) {
                prop_assert_eq!(spec.parse(Some(value.to_string().as_str())), Ok(value));
            }

            /// Property: re-validating an accepted value yields the same value
            #[test]
            fn proptest_revalidation_is_idempotent(spec in arb_int_spec(), raw in "-?[0-9]{1,8}") {
                if let Ok(first) = spec.parse(Some(raw.as_str())) {
                    prop_assert_eq!(spec.parse(Some(first.to_string().as_str())), Ok(first));
                }
            }

            /// Property: parsing never panics on arbitrary input
            #[test]
            fn proptest_parse_is_total(spec in arb_real_spec(), raw in any::<String>()) {
                let _ = spec.parse(Some(raw.as_str()));
            }
        }
    }
}
