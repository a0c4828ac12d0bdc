use crate::Email;

/// Metadata about an incoming request.
///
/// Contains the request identifier and, when an upstream layer already
/// identified the caller, the caller's email. The email is wrapped so it can
/// only be formatted in masked form.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// Email of the acting user, if known
    pub actor: Option<Email>,
}
