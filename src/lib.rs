//! Request parameter validation and PII redaction for HTTP boundaries.
//!
//! Every inbound handler and every audit/export pipeline passes data through
//! this crate. It provides two pure primitives and the boundary plumbing
//! around them:
//! - **Bounded parameters**: [`ParamSpec`] turns an optional, untrusted query
//!   string value into a range-checked integer or real, applying a default when
//!   the value is absent and never clamping out-of-range input
//! - **Redaction**: [`mask_email`] turns an email address into a partially
//!   masked form that keeps the domain and at most two characters of the local part
//! - **Taint tracking**: raw request values are [`Tainted<T>`] until a
//!   [`Sanitizer`] promotes them to [`Verified<T>`]
//!
//! # Core Types
//!
//! - [`ParamSpec<N>`]: Immutable bounds and default for one numeric field
//! - [`ParamError`]: Why a field was rejected (`InvalidFormat` or `OutOfRange`)
//! - [`Email`]: Wrapper whose `Debug`/`Display` only ever show the masked address
//! - [`web::QuerySchema`]: Composes field checks and aggregates every failure
//! - [`audit::AuditEntry`]: Audit record that stores actors in redacted form
//!
//! # Examples
//!
//! ```
//! use query_guard::{mask_email, ParamErrorKind, ParamSpec};
//!
//! let limit = ParamSpec::new(1_i64, 100, 40).expect("valid bounds");
//!
//! assert_eq!(limit.parse(None), Ok(40));
//! assert_eq!(limit.parse(Some("50")), Ok(50));
//! assert!(matches!(
//!     limit.parse(Some("150")).unwrap_err().kind(),
//!     ParamErrorKind::OutOfRange { .. }
//! ));
//!
//! assert_eq!(mask_email("john.doe@example.com"), "j***e@example.com");
//! assert_eq!(mask_email("not-an-email"), "***");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod email;
mod error;
mod logging;
mod param;
mod redact;
mod request;
mod sanitizer;
mod tainted;
mod verified;
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;

pub use email::Email;
pub use error::{Error, ValidationErrors};
pub use logging::RequestLog;
pub use param::{BoundedNumber, NumberKind, ParamError, ParamErrorKind, ParamSpec, ParamValue};
pub use redact::{mask_email, REDACTED_PLACEHOLDER};
pub use request::RequestMeta;
pub use sanitizer::Sanitizer;
pub use tainted::Tainted;
pub use verified::Verified;
