//! Deterministic partial masking of email addresses.

/// Output for any value that cannot be masked structurally.
pub const REDACTED_PLACEHOLDER: &str = "***";

/// Masks an email address for logs, audit trails and admin views.
///
/// The input is trimmed and lower-cased. The domain is kept as-is and the
/// local part is reduced to at most its first and last character:
///
/// | local part length | output             |
/// |-------------------|--------------------|
/// | 0 or 1            | `*@domain`         |
/// | 2                 | `X*@domain`        |
/// | 3 or more         | `X***Y@domain`     |
///
/// Absent or empty input, input without exactly one `@`, and input with an
/// empty domain all produce [`REDACTED_PLACEHOLDER`]. Lengths count Unicode
/// scalar values. This function never panics.
///
/// # Examples
///
/// ```
/// use query_guard::mask_email;
///
/// assert_eq!(mask_email("john.doe@example.com"), "j***e@example.com");
/// assert_eq!(mask_email("ab@example.com"), "a*@example.com");
/// assert_eq!(mask_email("a@example.com"), "*@example.com");
/// assert_eq!(mask_email("  Jane@Example.COM "), "j***e@example.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// assert_eq!(mask_email(None), "***");
/// ```
pub fn mask_email<'a>(raw: impl Into<Option<&'a str>>) -> String {
    let normalized = raw.into().unwrap_or_default().trim().to_lowercase();
    if normalized.is_empty() {
        return REDACTED_PLACEHOLDER.to_string();
    }

    let mut parts = normalized.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return REDACTED_PLACEHOLDER.to_string(),
    };
    if domain.is_empty() {
        return REDACTED_PLACEHOLDER.to_string();
    }

    let mut chars = local.chars();
    match (chars.next(), chars.next_back(), chars.next()) {
        // Empty and single-character local parts are indistinguishable.
        (None, _, _) | (Some(_), None, _) => format!("*@{}", domain),
        (Some(first), Some(_), None) => format!("{}*@{}", first, domain),
        (Some(first), Some(last), Some(_)) => format!("{}***{}@{}", first, last, domain),
    }
}
