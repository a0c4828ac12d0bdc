//! Route schemas composed from bounded parameter checks.

use crate::{
    Error, NumberKind, ParamError, ParamSpec, ParamValue, Sanitizer, Tainted, ValidationErrors,
    Verified,
};

use super::TaintedInputs;

/// A bounded parameter of either number kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSpec {
    /// An integer parameter.
    Integer(ParamSpec<i64>),
    /// A real parameter.
    Real(ParamSpec<f64>),
}

impl FieldSpec {
    /// Parses an optional raw value according to the wrapped spec.
    pub fn parse(&self, raw: Option<&str>) -> Result<ParamValue, ParamError> {
        match self {
            FieldSpec::Integer(spec) => spec.parse(raw).map(ParamValue::Integer),
            FieldSpec::Real(spec) => spec.parse(raw).map(ParamValue::Real),
        }
    }
}

impl From<ParamSpec<i64>> for FieldSpec {
    fn from(spec: ParamSpec<i64>) -> Self {
        FieldSpec::Integer(spec)
    }
}

impl From<ParamSpec<f64>> for FieldSpec {
    fn from(spec: ParamSpec<f64>) -> Self {
        FieldSpec::Real(spec)
    }
}

impl Sanitizer<Option<String>> for FieldSpec {
    type Output = ParamValue;

    fn sanitize(&self, input: Tainted<Option<String>>) -> Result<Verified<ParamValue>, ParamError> {
        let raw = input.into_inner();
        self.parse(raw.as_deref()).map(Verified::new_unchecked)
    }
}

/// The query parameters a route accepts, with their bounds and defaults.
///
/// Build a schema once when the route is defined and share it. Validation
/// checks every field independently and reports all rejected fields together.
/// Query parameters not named in the schema are ignored.
///
/// # Examples
///
/// ```
/// use query_guard::web::{ExtractTaintedInputs, QuerySchema, RequestAdapter};
/// use query_guard::ParamSpec;
///
/// let schema = QuerySchema::new()
///     .field("limit", ParamSpec::page_limit())
///     .field("min_score", ParamSpec::new(0.0_f64, 1.0, 0.0).unwrap());
///
/// let mut adapter = RequestAdapter::new("req-1".to_string());
/// adapter.add_query_param("limit".to_string(), "150".to_string());
/// adapter.add_query_param("min_score".to_string(), "high".to_string());
///
/// let errors = schema
///     .validate(&adapter.extract_tainted_inputs())
///     .unwrap_err();
///
/// assert_eq!(errors.len(), 2);
/// assert!(errors.for_field("limit").unwrap().is_out_of_range());
/// assert!(errors.for_field("min_score").unwrap().is_invalid_format());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySchema {
    fields: Vec<(String, FieldSpec)>,
}

impl QuerySchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. A second field with the same name replaces the first.
    pub fn field(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        let name = name.into();
        let spec = spec.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = spec,
            None => self.fields.push((name, spec)),
        }
        self
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Validates the query parameters of one request.
    ///
    /// # Errors
    ///
    /// Returns every rejected field, in declaration order, each tagged with
    /// its field name.
    pub fn validate(&self, inputs: &TaintedInputs) -> Result<ValidatedQuery, ValidationErrors> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for (name, spec) in &self.fields {
            match spec.sanitize(inputs.optional_query(name)) {
                Ok(verified) => values.push((name.clone(), verified.into_inner())),
                Err(error) => errors.push(error.with_field(name.as_str())),
            }
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => {
                tracing::debug!(rejected = errors.len(), "query validation failed");
                Err(errors)
            }
            None => Ok(ValidatedQuery { values }),
        }
    }
}

/// Validated values for every field of a [`QuerySchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    values: Vec<(String, ParamValue)>,
}

impl ValidatedQuery {
    /// Returns the value of a field.
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| *value)
    }

    /// Returns the value of an integer field.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::Integer(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a real field.
    pub fn real(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ParamValue::Real(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns an integer field.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownField`] if the schema has no field `name`
    /// - [`Error::FieldKindMismatch`] if `name` is a real field
    pub fn require_integer(&self, name: &str) -> Result<i64, Error> {
        match self.require(name)? {
            ParamValue::Integer(value) => Ok(value),
            ParamValue::Real(_) => Err(Error::FieldKindMismatch {
                field: name.to_string(),
                expected: NumberKind::Integer,
            }),
        }
    }

    /// Returns a real field.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownField`] if the schema has no field `name`
    /// - [`Error::FieldKindMismatch`] if `name` is an integer field
    pub fn require_real(&self, name: &str) -> Result<f64, Error> {
        match self.require(name)? {
            ParamValue::Real(value) => Ok(value),
            ParamValue::Integer(_) => Err(Error::FieldKindMismatch {
                field: name.to_string(),
                expected: NumberKind::Real,
            }),
        }
    }

    fn require(&self, name: &str) -> Result<ParamValue, Error> {
        self.get(name).ok_or_else(|| Error::UnknownField {
            field: name.to_string(),
        })
    }

    /// Returns the validated values in schema order.
    pub fn values(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
