//! Audit records that never hold raw PII.
//!
//! This module provides:
//! - `AuditEntry`: One audit/export record with the actor stored masked
//! - `AuditOutcome`: Whether the audited operation succeeded
//! - `AuditTrail`: In-memory recorder standing in for persistent audit storage;
//!   meant for tests and demonstrations, optionally bounded
//!
//! Entries are safe by default:
//! - The actor email is masked when the entry is built
//! - Raw query values are never recorded, only validated numbers or field names

use std::fmt;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::Email;

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// Operation succeeded
    Success,
    /// Operation was rejected because the request was invalid
    Rejected,
    /// Operation failed due to an internal error
    Error,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Success => write!(f, "success"),
            AuditOutcome::Rejected => write!(f, "rejected"),
            AuditOutcome::Error => write!(f, "error"),
        }
    }
}

/// A single audit record.
///
/// # Example
///
/// ```
/// use query_guard::audit::{AuditEntry, AuditOutcome};
/// use query_guard::Email;
///
/// let actor = Email::new("admin.user@example.com");
/// let entry = AuditEntry::new("req-9", Some(&actor), "export_mappings", AuditOutcome::Success)
///     .with_detail("limit=40");
///
/// assert_eq!(entry.actor(), Some("a***r@example.com"));
/// assert_eq!(
///     entry.to_string(),
///     "audit[request_id=req-9, actor=a***r@example.com, action=export_mappings, outcome=success, detail=limit=40]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    request_id: String,
    /// Masked actor email; the raw address is never stored.
    actor: Option<String>,
    action: String,
    outcome: AuditOutcome,
    /// Free-form detail. MUST NOT contain PII or raw request input.
    detail: Option<String>,
}

impl AuditEntry {
    /// Creates an entry, masking the actor immediately.
    pub fn new(
        request_id: impl Into<String>,
        actor: Option<&Email>,
        action: impl Into<String>,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            actor: actor.map(Email::masked),
            action: action.into(),
            outcome,
            detail: None,
        }
    }

    /// Attaches a detail string.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the masked actor, if any.
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Returns the audited action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the detail, if set.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "audit[request_id={}, actor={}, action={}, outcome={}",
            self.request_id,
            self.actor.as_deref().unwrap_or("<none>"),
            self.action,
            self.outcome
        )?;
        if let Some(detail) = &self.detail {
            write!(f, ", detail={}", detail)?;
        }
        write!(f, "]")
    }
}

/// In-memory recorder for audit entries.
///
/// Safe to share between request-handling threads. This is a stand-in for a
/// persistent audit store. A trail built with [`AuditTrail::new`] grows without
/// limit; use [`AuditTrail::bounded`] for long-lived owners, which keeps only
/// the most recent entries.
///
/// # Example
///
/// ```
/// use query_guard::audit::{AuditEntry, AuditOutcome, AuditTrail};
///
/// let trail = AuditTrail::new();
/// trail.record(AuditEntry::new("req-1", None, "list_mappings", AuditOutcome::Success));
///
/// assert_eq!(trail.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Mutex<VecDeque<AuditEntry>>,
    capacity: Option<usize>,
}

impl AuditTrail {
    /// Creates an empty, unbounded trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trail that keeps at most `capacity` entries, dropping
    /// the oldest first. A capacity of zero is treated as one.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            capacity: Some(capacity.max(1)),
        }
    }

    /// Returns the maximum number of retained entries, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Records an entry and emits it as a `tracing` event.
    pub fn record(&self, entry: AuditEntry) {
        tracing::info!(
            request_id = %entry.request_id,
            action = %entry.action,
            outcome = %entry.outcome,
            "audit entry recorded"
        );
        let mut entries = self.lock();
        entries.push_back(entry);
        if let Some(capacity) = self.capacity {
            while entries.len() > capacity {
                entries.pop_front();
            }
        }
    }

    /// Returns a snapshot of the retained entries in recording order.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Returns the number of retained entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave the queue half-pushed.
    fn lock(&self) -> MutexGuard<'_, VecDeque<AuditEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
