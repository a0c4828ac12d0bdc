use std::fmt;

use crate::{NumberKind, ParamError};

/// Errors that can occur in the query-guard crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter spec was built with inconsistent bounds or default.
    InvalidSpec {
        /// Which constraint the bounds or default violated.
        reason: &'static str,
    },
    /// One or more request fields failed validation.
    Validation(ValidationErrors),
    /// A validated query was asked for a field its schema does not define.
    UnknownField {
        /// The requested field name.
        field: String,
    },
    /// A validated query field holds a different number kind than requested.
    FieldKindMismatch {
        /// The requested field name.
        field: String,
        /// The kind the caller asked for.
        expected: NumberKind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSpec { reason } => write!(f, "invalid parameter spec: {}", reason),
            Error::Validation(errors) => write!(f, "request validation failed: {}", errors),
            Error::UnknownField { field } => write!(f, "no such query field: `{}`", field),
            Error::FieldKindMismatch { field, expected } => {
                write!(f, "query field `{}` does not hold {}", field, expected)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

impl From<ParamError> for Error {
    fn from(error: ParamError) -> Self {
        Error::Validation(ValidationErrors::from(error))
    }
}

/// Every field failure collected while validating one request.
///
/// Always holds at least one error. Intended to be rendered into a single
/// 400-class response.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<ParamError>,
}

impl ValidationErrors {
    /// Wraps collected errors, returning `None` when there are none.
    pub fn from_vec(errors: Vec<ParamError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Returns the individual field errors in schema order.
    pub fn errors(&self) -> &[ParamError] {
        &self.errors
    }

    /// Returns the number of rejected fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error for a specific field, if that field was rejected.
    pub fn for_field(&self, field: &str) -> Option<&ParamError> {
        self.errors.iter().find(|e| e.field() == Some(field))
    }
}

impl From<ParamError> for ValidationErrors {
    fn from(error: ParamError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
