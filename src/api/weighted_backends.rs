//! Weighted backends service.
//!
//! A weighted backend balances traffic among its child backends in
//! proportion to their weights.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher, ListCallBuilder};
use crate::models::{Param, WeightedBackend, WeightedBackendList};
use crate::{Error, Result};

const PATH: &str = "/backends/weighted";

/// Service for weighted backend operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: ngrok_api_rs::NgrokClient) -> ngrok_api_rs::Result<()> {
/// let backend = client
///     .weighted_backends()
///     .create()
///     .description("canary split")
///     .backend("bkdhr_stable", 9000)
///     .backend("bkdhr_canary", 1000)
///     .call()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WeightedBackendsService {
    dispatcher: Arc<dyn Dispatcher>,
}

impl WeightedBackendsService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Create a new Weighted backend.
    pub fn create(&self) -> WeightedBackendCreateCallBuilder {
        WeightedBackendCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            path: PATH.to_string(),
            method: Method::POST,
            body: WeightedBackendMutate::default(),
        }
    }

    /// Delete a Weighted backend by ID.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(self.dispatcher.clone(), format!("{PATH}/{id}")))
    }

    /// Get detailed information about a Weighted backend by ID.
    pub fn get(&self, id: &str) -> Result<CallBuilder<WeightedBackend>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(format!("{PATH}/{id}")),
        ))
    }

    /// List all Weighted backends on this account.
    pub fn list(&self) -> ListCallBuilder<WeightedBackendList> {
        ListCallBuilder::new(self.dispatcher.clone(), PATH)
    }

    /// Update Weighted backend by ID.
    pub fn update(&self, id: &str) -> Result<WeightedBackendUpdateCallBuilder> {
        Error::require("id", id)?;
        Ok(WeightedBackendCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            path: format!("{PATH}/{id}"),
            method: Method::PATCH,
            body: WeightedBackendMutate::default(),
        })
    }
}

/// Body of a weighted backend create or update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedBackendMutate {
    /// human-readable description of this backend. Optional
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined machine-readable data of this backend. Optional
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
    /// the ids of the child backends to their weights [0-10000]
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub backends: Param<BTreeMap<String, i64>>,
}

/// An unsent weighted backend create or update call.
///
/// Create and update accept the same fields; they differ only in method
/// and path.
pub struct WeightedBackendCreateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    path: String,
    method: Method,
    body: WeightedBackendMutate,
}

/// An unsent weighted backend update call.
pub type WeightedBackendUpdateCallBuilder = WeightedBackendCreateCallBuilder;

impl WeightedBackendCreateCallBuilder {
    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.body.description = Param::Value(description.into());
        self
    }

    /// Set, clear or unset the description.
    pub fn set_description(mut self, description: Param<String>) -> Self {
        self.body.description = description;
        self
    }

    /// Set the metadata.
    pub fn metadata(mut self, metadata: impl Into<String>) -> Self {
        self.body.metadata = Param::Value(metadata.into());
        self
    }

    /// Set, clear or unset the metadata.
    pub fn set_metadata(mut self, metadata: Param<String>) -> Self {
        self.body.metadata = metadata;
        self
    }

    /// Replace the full backend-to-weight map.
    pub fn backends(mut self, backends: BTreeMap<String, i64>) -> Self {
        self.body.backends = Param::Value(backends);
        self
    }

    /// Add one child backend with its weight to the map.
    pub fn backend(mut self, id: impl Into<String>, weight: i64) -> Self {
        let mut backends = match std::mem::take(&mut self.body.backends) {
            Param::Value(backends) => backends,
            Param::Unset | Param::Null => BTreeMap::new(),
        };
        backends.insert(id.into(), weight);
        self.body.backends = Param::Value(backends);
        self
    }

    /// Set, clear or unset the backend map.
    pub fn set_backends(mut self, backends: Param<BTreeMap<String, i64>>) -> Self {
        self.body.backends = backends;
        self
    }

    /// The body this builder will send.
    pub fn body(&self) -> &WeightedBackendMutate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<WeightedBackend> {
        let request = ApiRequest::new(self.method.clone(), self.path.as_str()).json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<WeightedBackend> {
        block_on(self.call())?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NgrokClient;
    use serde_json::json;

    #[test]
    fn test_backend_accumulates_weights() {
        let builder = NgrokClient::new("test-key")
            .unwrap()
            .weighted_backends()
            .create()
            .backend("bkdhr_a", 1)
            .backend("bkdhr_b", 3);

        assert_eq!(
            serde_json::to_value(builder.body()).unwrap(),
            json!({"backends": {"bkdhr_a": 1, "bkdhr_b": 3}})
        );
    }

    #[test]
    fn test_update_clears_description() {
        let builder = NgrokClient::new("test-key")
            .unwrap()
            .weighted_backends()
            .update("bkdwd_1")
            .unwrap()
            .set_description(Param::Null);

        assert_eq!(
            serde_json::to_value(builder.body()).unwrap(),
            json!({"description": null})
        );
    }
}
