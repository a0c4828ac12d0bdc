use std::fmt;

use crate::redact::mask_email;

/// An email address that only ever formats in masked form.
///
/// `Email` carries personally identifiable information through request
/// handling, logging and audit code. Every formatted rendering goes through
/// [`mask_email`], so the full address cannot end up in a log line or error
/// message by accident.
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, or `Borrow`
/// - Debug and Display output is always the masked address
/// - Access to the raw value requires the explicit
///   [`expose_email`](Self::expose_email) call
///
/// # Examples
///
/// ```
/// use query_guard::Email;
///
/// let email = Email::new("John.Doe@example.com");
///
/// assert_eq!(format!("{}", email), "j***e@example.com");
/// assert_eq!(format!("{:?}", email), "Email(j***e@example.com)");
/// assert_eq!(email.expose_email(), "John.Doe@example.com");
/// ```
// Cloning keeps the value wrapped, so it cannot leak through a copy.
#[derive(Clone, PartialEq, Eq)]
pub struct Email {
    // Must stay private: a public field would bypass masking.
    raw: String,
}

impl Email {
    /// Wraps a raw email address.
    ///
    /// No validation is performed. Malformed addresses mask to the constant
    /// placeholder.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the masked form of the address.
    pub fn masked(&self) -> String {
        mask_email(self.raw.as_str())
    }

    /// Explicitly exposes the raw address.
    ///
    /// # Security Warning
    ///
    /// The result is PII. Do not log or display it.
    pub fn expose_email(&self) -> &str {
        &self.raw
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.masked())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
