//! Example admin routes showing the full request flow.
//!
//! Each handler extracts metadata and tainted inputs, validates the query
//! against a schema built once in [`AdminHandlers::new`], logs with the actor
//! masked and records an audit entry. Results are simulated; no storage is
//! touched.

use crate::audit::{AuditEntry, AuditOutcome, AuditTrail};
use crate::{Email, Error, ParamSpec, RequestLog, ValidationErrors, REDACTED_PLACEHOLDER};

use super::{ExtractMetadata, ExtractTaintedInputs, QuerySchema, RequestAdapter, ValidatedQuery};

/// Most recent audit entries an [`AdminHandlers`] keeps in memory.
pub const AUDIT_TRAIL_CAPACITY: usize = 1024;

/// A page of the mapping listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPage {
    /// Request ID for tracing
    pub request_id: String,
    /// Validated page size
    pub limit: i64,
    /// Validated page offset
    pub offset: i64,
}

/// An export of recent audit log rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogExport {
    /// Request ID for tracing
    pub request_id: String,
    /// Masked email of whoever requested the export
    pub requested_by: String,
    /// How many days back the export reaches
    pub days: i64,
    /// Maximum number of rows
    pub limit: i64,
    /// Minimum severity, from 0.0 to 1.0
    pub min_severity: f64,
}

/// Admin routes with their query schemas.
///
/// # Examples
///
/// ```
/// use query_guard::web::{handlers::AdminHandlers, RequestAdapter};
///
/// let handlers = AdminHandlers::new().expect("schemas are valid");
///
/// let mut adapter = RequestAdapter::new("req-1".to_string());
/// adapter.add_query_param("limit".to_string(), "10".to_string());
///
/// let page = handlers.list_mappings(&adapter).expect("valid query");
/// assert_eq!(page.limit, 10);
/// assert_eq!(page.offset, 0);
/// assert_eq!(handlers.audit_trail().len(), 1);
/// ```
#[derive(Debug)]
pub struct AdminHandlers {
    mappings: QuerySchema,
    audit_log: QuerySchema,
    trail: AuditTrail,
}

impl AdminHandlers {
    /// Builds the route schemas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSpec`] if a schema field has inconsistent bounds.
    pub fn new() -> Result<Self, Error> {
        let mappings = QuerySchema::new()
            .field("limit", ParamSpec::page_limit())
            .field("offset", ParamSpec::page_offset());

        let audit_log = QuerySchema::new()
            .field("days", ParamSpec::new(1_i64, 90, 7)?)
            .field("limit", ParamSpec::new(1_i64, 1000, 100)?)
            .field("min_severity", ParamSpec::new(0.0_f64, 1.0, 0.0)?);

        Ok(Self {
            mappings,
            audit_log,
            trail: AuditTrail::bounded(AUDIT_TRAIL_CAPACITY),
        })
    }

    /// Returns the audit trail the handlers record into.
    ///
    /// The trail is in memory and keeps the last [`AUDIT_TRAIL_CAPACITY`]
    /// entries.
    pub fn audit_trail(&self) -> &AuditTrail {
        &self.trail
    }

    /// Handles `GET /mappings?limit=&offset=`.
    ///
    /// # Errors
    ///
    /// Returns every rejected query field.
    pub fn list_mappings(&self, adapter: &RequestAdapter) -> Result<MappingPage, Error> {
        let query = self.validate(adapter, &self.mappings, "list_mappings")?;

        Ok(MappingPage {
            request_id: adapter.request_id().to_string(),
            limit: query.require_integer("limit")?,
            offset: query.require_integer("offset")?,
        })
    }

    /// Handles `GET /audit-log/export?days=&limit=&min_severity=`.
    ///
    /// # Errors
    ///
    /// Returns every rejected query field.
    pub fn export_audit_log(&self, adapter: &RequestAdapter) -> Result<AuditLogExport, Error> {
        let query = self.validate(adapter, &self.audit_log, "export_audit_log")?;

        Ok(AuditLogExport {
            request_id: adapter.request_id().to_string(),
            requested_by: adapter
                .actor()
                .map(Email::masked)
                .unwrap_or_else(|| REDACTED_PLACEHOLDER.to_string()),
            days: query.require_integer("days")?,
            limit: query.require_integer("limit")?,
            min_severity: query.require_real("min_severity")?,
        })
    }

    fn validate(
        &self,
        adapter: &RequestAdapter,
        schema: &QuerySchema,
        action: &str,
    ) -> Result<ValidatedQuery, ValidationErrors> {
        let meta = adapter.extract_metadata();
        let inputs = adapter.extract_tainted_inputs();
        let log = RequestLog::new(&meta);

        match schema.validate(&inputs) {
            Ok(query) => {
                let detail = query
                    .values()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect::<Vec<_>>()
                    .join(" ");
                log.info(format_args!("{} accepted ({})", action, detail));
                self.trail.record(
                    AuditEntry::new(
                        &meta.request_id,
                        meta.actor.as_ref(),
                        action,
                        AuditOutcome::Success,
                    )
                    .with_detail(detail),
                );
                Ok(query)
            }
            Err(errors) => {
                for error in errors.errors() {
                    log.param_rejected(error);
                }
                let rejected = errors
                    .errors()
                    .iter()
                    .filter_map(|e| e.field())
                    .collect::<Vec<_>>()
                    .join(",");
                log.warn(format_args!("{} rejected: {} invalid field(s)", action, errors.len()));
                self.trail.record(
                    AuditEntry::new(
                        &meta.request_id,
                        meta.actor.as_ref(),
                        action,
                        AuditOutcome::Rejected,
                    )
                    .with_detail(format!("rejected={}", rejected)),
                );
                Err(errors)
            }
        }
    }
}
