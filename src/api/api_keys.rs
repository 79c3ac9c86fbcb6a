//! API keys service.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher, ListCallBuilder};
use crate::models::{ApiKey, ApiKeyList, Param};
use crate::{Error, Result};

/// Service for API key operations.
///
/// API keys authenticate calls to this API. The `token` of a new key is only
/// returned by [`create`](Self::create).
pub struct ApiKeysService {
    dispatcher: Arc<dyn Dispatcher>,
}

impl ApiKeysService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Create a new API key.
    pub fn create(&self) -> ApiKeyCreateCallBuilder {
        ApiKeyCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            body: ApiKeyMutate::default(),
        }
    }

    /// Delete an API key by ID.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(self.dispatcher.clone(), format!("/api_keys/{id}")))
    }

    /// Get the details of an API key by ID.
    pub fn get(&self, id: &str) -> Result<CallBuilder<ApiKey>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(format!("/api_keys/{id}")),
        ))
    }

    /// List all API keys owned by this account.
    pub fn list(&self) -> ListCallBuilder<ApiKeyList> {
        ListCallBuilder::new(self.dispatcher.clone(), "/api_keys")
    }

    /// Update attributes of an API key by ID.
    pub fn update(&self, id: &str) -> Result<ApiKeyUpdateCallBuilder> {
        Error::require("id", id)?;
        Ok(ApiKeyUpdateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            id: id.to_string(),
            body: ApiKeyMutate::default(),
        })
    }
}

/// Body of an API key create or update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKeyMutate {
    /// human-readable description of what uses the API key. Optional, max 255 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined data of this API key. Optional, max 4096 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
}

/// An unsent API key create call.
pub struct ApiKeyCreateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    body: ApiKeyMutate,
}

impl ApiKeyCreateCallBuilder {
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

    /// The body this builder will send.
    pub fn body(&self) -> &ApiKeyMutate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<ApiKey> {
        let request = ApiRequest::new(Method::POST, "/api_keys").json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<ApiKey> {
        block_on(self.call())?
    }
}

/// An unsent API key update call.
pub struct ApiKeyUpdateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    id: String,
    body: ApiKeyMutate,
}

impl ApiKeyUpdateCallBuilder {
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

    /// The body this builder will send.
    pub fn body(&self) -> &ApiKeyMutate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<ApiKey> {
        let request =
            ApiRequest::new(Method::PATCH, format!("/api_keys/{}", self.id)).json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<ApiKey> {
        block_on(self.call())?
    }
}
