use std::fmt;

use crate::{ParamError, RequestMeta};

/// A request-scoped logger.
///
/// Every message carries the request ID as a structured `tracing` field.
/// Actor emails are attached in masked form only.
///
/// # Examples
///
/// ```
/// use query_guard::{Email, RequestLog, RequestMeta};
///
/// let meta = RequestMeta {
///     request_id: "req-1".to_string(),
///     actor: Some(Email::new("alice@example.com")),
/// };
///
/// let log = RequestLog::new(&meta);
/// assert_eq!(log.request_id(), "req-1");
/// log.info(format_args!("listing mappings"));
/// ```
#[derive(Debug)]
pub struct RequestLog<'a> {
    request_id: &'a str,
    actor: Option<String>,
}

impl<'a> RequestLog<'a> {
    /// Creates a logger bound to the given request.
    pub fn new(meta: &'a RequestMeta) -> Self {
        Self {
            request_id: &meta.request_id,
            actor: meta.actor.as_ref().map(|email| email.masked()),
        }
    }

    /// Returns the request ID associated with this logger.
    pub fn request_id(&self) -> &str {
        self.request_id
    }

    /// Returns the masked actor, if the request has one.
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Logs an info-level message with request ID.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(request_id = %self.request_id, actor = ?self.actor, "{}", args);
    }

    /// Logs a warning-level message with request ID.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(request_id = %self.request_id, actor = ?self.actor, "{}", args);
    }

    /// Logs an error-level message with request ID.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(request_id = %self.request_id, actor = ?self.actor, "{}", args);
    }

    /// Logs a debug-level message with request ID.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(request_id = %self.request_id, actor = ?self.actor, "{}", args);
    }

    /// Logs a rejected parameter at debug level.
    ///
    /// Only the field name and the failure kind are recorded.
    pub fn param_rejected(&self, error: &ParamError) {
        tracing::debug!(
            request_id = %self.request_id,
            field = error.field().unwrap_or("<unnamed>"),
            kind = %error.kind(),
            "query parameter rejected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Email, ParamSpec};

    fn meta(actor: Option<&str>) -> RequestMeta {
        RequestMeta {
            request_id: "req-log".to_string(),
            actor: actor.map(Email::new),
        }
    }

    #[test]
    fn request_log_masks_actor() {
        let meta = meta(Some("dave.jones@example.com"));
        let log = RequestLog::new(&meta);

        assert_eq!(log.actor(), Some("d***s@example.com"));
        assert!(!format!("{:?}", log).contains("dave.jones"));
    }

    #[test]
    fn request_log_without_actor() {
        let meta = meta(None);
        let log = RequestLog::new(&meta);

        assert_eq!(log.request_id(), "req-log");
        assert!(log.actor().is_none());
    }

    #[test]
    fn logging_calls_do_not_panic_without_subscriber() {
        let meta = meta(Some("eve@example.com"));
        let log = RequestLog::new(&meta);
        let error = ParamSpec::page_limit()
            .parse(Some("0"))
            .unwrap_err()
            .with_field("limit");

        log.info(format_args!("info {}", 1));
        log.warn(format_args!("warn"));
        log.error(format_args!("error"));
        log.debug(format_args!("debug"));
        log.param_rejected(&error);
    }
}
