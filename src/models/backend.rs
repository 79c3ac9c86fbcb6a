//! Weighted backend models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;
use crate::client::paginated::ListEnvelope;

/// A backend that balances traffic across child backends in proportion to
/// their weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedBackend {
    /// unique identifier for this Weighted backend
    pub id: String,
    /// URI of the WeightedBackend API resource
    pub uri: String,
    /// timestamp when the backend was created, RFC 3339 format
    pub created_at: DateTime<Utc>,
    /// human-readable description of this backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// arbitrary user-defined machine-readable data of this backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: String,
    /// the ids of the child backends to their weights [0-10000]
    #[serde(default, deserialize_with = "null_as_default")]
    pub backends: BTreeMap<String, i64>,
}

/// One page of weighted backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedBackendList {
    /// the list of all Weighted backends on this account
    pub backends: Vec<WeightedBackend>,
    /// URI of the Weighted backends list API resource
    pub uri: String,
    /// URI of the next page, or null if there is no next page
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

impl ListEnvelope for WeightedBackendList {
    type Item = WeightedBackend;

    fn items(&self) -> &[WeightedBackend] {
        &self.backends
    }

    fn into_items(self) -> Vec<WeightedBackend> {
        self.backends
    }

    fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }
}
