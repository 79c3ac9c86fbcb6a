//! API key models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::null_as_default;
use crate::client::paginated::ListEnvelope;

/// An API key used to authenticate against the ngrok API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    /// unique API key resource identifier
    pub id: String,
    /// URI to the API resource of this API key
    pub uri: String,
    /// human-readable description of what uses the API key to authenticate
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// arbitrary user-defined data of this API key
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: String,
    /// timestamp when the api key was created, RFC 3339 format
    pub created_at: DateTime<Utc>,
    /// the bearer token that can be placed into the Authorization header.
    /// Only present on the response to the create call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// One page of API keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyList {
    /// the list of API keys for this account
    pub keys: Vec<ApiKey>,
    /// URI of the API keys list API resource
    pub uri: String,
    /// URI of the next page, or null if there is no next page
    #[serde(default)]
    pub next_page_uri: Option<String>,
}

impl ListEnvelope for ApiKeyList {
    type Item = ApiKey;

    fn items(&self) -> &[ApiKey] {
        &self.keys
    }

    fn into_items(self) -> Vec<ApiKey> {
        self.keys
    }

    fn next_page_uri(&self) -> Option<&str> {
        self.next_page_uri.as_deref()
    }
}
