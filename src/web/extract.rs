//! Extraction boundary traits for web integration.

use crate::request::RequestMeta;

use super::TaintedInputs;

/// Extracts request metadata from a framework-specific request.
///
/// Implementations map framework types to [`RequestMeta`]: the request ID and,
/// when an upstream layer identified the caller, their email. This trait does
/// NOT authenticate anyone; it only carries what the framework already knows.
///
/// # Examples
///
/// ```
/// use query_guard::web::ExtractMetadata;
/// use query_guard::{Email, RequestMeta};
///
/// struct MyFrameworkRequest {
///     request_id: String,
///     user_email: Option<String>,
/// }
///
/// impl ExtractMetadata for MyFrameworkRequest {
///     fn extract_metadata(&self) -> RequestMeta {
///         RequestMeta {
///             request_id: self.request_id.clone(),
///             actor: self.user_email.as_deref().map(Email::new),
///         }
///     }
/// }
///
/// let req = MyFrameworkRequest {
///     request_id: "req-1".to_string(),
///     user_email: Some("ops@example.com".to_string()),
/// };
/// assert_eq!(req.extract_metadata().actor.unwrap().to_string(), "o***s@example.com");
/// ```
pub trait ExtractMetadata {
    /// Extracts request metadata.
    fn extract_metadata(&self) -> RequestMeta;
}

/// Extracts tainted inputs from a framework-specific request.
///
/// Every value that crosses the HTTP boundary MUST be wrapped in
/// `Tainted<T>`; validation happens later through a `QuerySchema` or a
/// `Sanitizer`.
///
/// # Examples
///
/// ```
/// use query_guard::web::{ExtractTaintedInputs, RequestAdapter, TaintedInputs};
/// use std::collections::HashMap;
///
/// struct MyFrameworkRequest {
///     query: HashMap<String, String>,
/// }
///
/// impl ExtractTaintedInputs for MyFrameworkRequest {
///     fn extract_tainted_inputs(&self) -> TaintedInputs {
///         let mut adapter = RequestAdapter::new("req-1".to_string());
///         for (k, v) in &self.query {
///             adapter.add_query_param(k.clone(), v.clone());
///         }
///         adapter.extract_tainted_inputs()
///     }
/// }
/// ```
pub trait ExtractTaintedInputs {
    /// Extracts all untrusted inputs from the request.
    fn extract_tainted_inputs(&self) -> TaintedInputs;
}
