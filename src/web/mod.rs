//! Web framework integration surface.
//!
//! This module is the boundary between HTTP frameworks and query-guard's
//! validation and redaction primitives. It handles:
//! - Mapping HTTP requests to domain types (`RequestMeta`)
//! - Introducing taint at the boundary (untrusted inputs → `Tainted<T>`)
//! - Composing per-field `ParamSpec` checks into a route schema that reports
//!   every rejected field at once
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: Nothing here depends on a specific HTTP
//!    framework. Framework code fills a `RequestAdapter`.
//!
//! 2. **Taint at Boundary**: Query params, headers and path params are wrapped
//!    in `Tainted<T>` at extraction time.
//!
//! 3. **Build Once**: `QuerySchema` values are immutable after construction
//!    and shared across requests.
//!
//! # Example Flow
//!
//! ```
//! use query_guard::web::{ExtractTaintedInputs, QuerySchema, RequestAdapter};
//! use query_guard::ParamSpec;
//!
//! let schema = QuerySchema::new()
//!     .field("limit", ParamSpec::page_limit())
//!     .field("offset", ParamSpec::page_offset());
//!
//! let mut adapter = RequestAdapter::new("req-1".to_string());
//! adapter.add_query_param("limit".to_string(), "25".to_string());
//!
//! let query = schema
//!     .validate(&adapter.extract_tainted_inputs())
//!     .expect("valid query");
//!
//! assert_eq!(query.integer("limit"), Some(25));
//! assert_eq!(query.integer("offset"), Some(0));
//! ```

mod adapter;
mod extract;
pub mod handlers;
mod schema;

pub use adapter::{RequestAdapter, TaintedInputs};
pub use extract::{ExtractMetadata, ExtractTaintedInputs};
pub use schema::{FieldSpec, QuerySchema, ValidatedQuery};
