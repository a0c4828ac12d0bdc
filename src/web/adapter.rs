//! Request adapter for mapping HTTP requests to query-guard types.

use std::collections::HashMap;

use crate::request::RequestMeta;
use crate::{Email, Tainted};

use super::{ExtractMetadata, ExtractTaintedInputs};

/// Framework-neutral view of an HTTP request.
///
/// Holds simple owned data so no framework's request type leaks into this
/// crate. Repeated query keys keep the last value added.
///
/// # Examples
///
/// ```
/// use query_guard::web::{ExtractMetadata, ExtractTaintedInputs, RequestAdapter};
/// use query_guard::Email;
///
/// let mut adapter = RequestAdapter::new("req-12345".to_string());
/// adapter.set_actor(Some(Email::new("alice@example.com")));
/// adapter.add_query_param("limit".to_string(), "20".to_string());
///
/// let meta = adapter.extract_metadata();
/// assert_eq!(meta.request_id, "req-12345");
///
/// let inputs = adapter.extract_tainted_inputs();
/// assert!(inputs.has_query_param("limit"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestAdapter {
    /// Unique request identifier (required)
    request_id: String,
    /// Acting user's email, if an upstream layer identified them
    actor: Option<Email>,
    /// Query parameters from URL (all tainted)
    query_params: HashMap<String, String>,
    /// Request headers (all tainted)
    headers: HashMap<String, String>,
    /// Path parameters from routing (all tainted)
    path_params: HashMap<String, String>,
}

impl RequestAdapter {
    /// Creates a new request adapter with the given request ID.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            actor: None,
            query_params: HashMap::new(),
            headers: HashMap::new(),
            path_params: HashMap::new(),
        }
    }

    /// Sets the acting user's email.
    pub fn set_actor(&mut self, actor: Option<Email>) {
        self.actor = actor;
    }

    /// Adds a query parameter.
    pub fn add_query_param(&mut self, key: String, value: String) {
        self.query_params.insert(key, value);
    }

    /// Adds a header.
    pub fn add_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    /// Adds a path parameter.
    pub fn add_path_param(&mut self, key: String, value: String) {
        self.path_params.insert(key, value);
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the actor, if present.
    pub fn actor(&self) -> Option<&Email> {
        self.actor.as_ref()
    }
}

impl ExtractMetadata for RequestAdapter {
    fn extract_metadata(&self) -> RequestMeta {
        RequestMeta {
            request_id: self.request_id.clone(),
            actor: self.actor.clone(),
        }
    }
}

fn taint_all(map: &HashMap<String, String>) -> HashMap<String, Tainted<String>> {
    map.iter()
        .map(|(k, v)| (k.clone(), Tainted::new(v.clone())))
        .collect()
}

impl ExtractTaintedInputs for RequestAdapter {
    fn extract_tainted_inputs(&self) -> TaintedInputs {
        TaintedInputs {
            query_params: taint_all(&self.query_params),
            headers: taint_all(&self.headers),
            path_params: taint_all(&self.path_params),
        }
    }
}

/// Collection of tainted inputs extracted from an HTTP request.
///
/// Read-only. Every value is `Tainted<String>` and must go through a
/// `QuerySchema` or `Sanitizer` before use. A [`ParamSpec`](crate::ParamSpec)
/// sanitizes single path parameters and headers directly.
#[derive(Debug, Clone, Default)]
pub struct TaintedInputs {
    query_params: HashMap<String, Tainted<String>>,
    headers: HashMap<String, Tainted<String>>,
    path_params: HashMap<String, Tainted<String>>,
}

impl TaintedInputs {
    /// Returns the tainted query parameters.
    pub fn query_params(&self) -> &HashMap<String, Tainted<String>> {
        &self.query_params
    }

    /// Returns the tainted headers.
    pub fn headers(&self) -> &HashMap<String, Tainted<String>> {
        &self.headers
    }

    /// Returns the tainted path parameters.
    pub fn path_params(&self) -> &HashMap<String, Tainted<String>> {
        &self.path_params
    }

    /// Returns a copy of one tainted query parameter.
    pub fn get_query(&self, key: &str) -> Option<Tainted<String>> {
        self.query_params.get(key).cloned()
    }

    /// Returns whether a query parameter is present.
    pub fn has_query_param(&self, key: &str) -> bool {
        self.query_params.contains_key(key)
    }

    /// Returns the number of query parameters.
    pub fn query_params_count(&self) -> usize {
        self.query_params.len()
    }

    /// Returns the number of headers.
    pub fn headers_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of path parameters.
    pub fn path_params_count(&self) -> usize {
        self.path_params.len()
    }

    /// Returns a query parameter in the optional form bounded params expect.
    pub(crate) fn optional_query(&self, key: &str) -> Tainted<Option<String>> {
        Tainted::new(
            self.query_params
                .get(key)
                .map(|value| value.clone().into_inner()),
        )
    }
}
