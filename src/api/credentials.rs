//! Tunnel credentials service.
//!
//! Tunnel credentials are ngrok agent authtokens. They authorize the agent to
//! connect to the ngrok service as your account.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher, ListCallBuilder};
use crate::models::{Credential, CredentialList, Param};
use crate::{Error, Result};

/// Service for tunnel credential operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: ngrok_api_rs::NgrokClient) -> ngrok_api_rs::Result<()> {
/// let credential = client
///     .credentials()
///     .create()
///     .description("ci runner")
///     .acl(vec!["bind:*.ci.example.com".to_string()])
///     .call()
///     .await?;
///
/// // The token is only ever returned here.
/// let authtoken = credential.token.unwrap_or_default();
/// # Ok(())
/// # }
/// ```
pub struct CredentialsService {
    dispatcher: Arc<dyn Dispatcher>,
}

impl CredentialsService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Create a new tunnel authtoken credential.
    pub fn create(&self) -> CredentialCreateCallBuilder {
        CredentialCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            body: CredentialCreate::default(),
        }
    }

    /// Delete a tunnel authtoken credential by ID.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(
            self.dispatcher.clone(),
            format!("/credentials/{id}"),
        ))
    }

    /// Get detailed information about a tunnel authtoken credential.
    pub fn get(&self, id: &str) -> Result<CallBuilder<Credential>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(format!("/credentials/{id}")),
        ))
    }

    /// List all tunnel authtoken credentials on this account.
    pub fn list(&self) -> ListCallBuilder<CredentialList> {
        ListCallBuilder::new(self.dispatcher.clone(), "/credentials")
    }

    /// Update attributes of a tunnel authtoken credential by ID.
    pub fn update(&self, id: &str) -> Result<CredentialUpdateCallBuilder> {
        Error::require("id", id)?;
        Ok(CredentialUpdateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            id: id.to_string(),
            body: CredentialUpdate::default(),
        })
    }
}

/// Body of a credential create call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialCreate {
    /// human-readable description of who or what will use the credential.
    /// Optional, max 255 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined machine-readable data. Optional, max 4096 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
    /// ACL rules. Only `bind` rules are allowed, e.g. `bind:*.example.com`;
    /// `*` permits everything.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub acl: Param<Vec<String>>,
}

/// Body of a credential update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialUpdate {
    /// human-readable description of who or what will use the credential.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined machine-readable data.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
    /// ACL rules replacing the current ones.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub acl: Param<Vec<String>>,
}

/// An unsent credential create call.
pub struct CredentialCreateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    body: CredentialCreate,
}

impl CredentialCreateCallBuilder {
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

    /// Set the ACL rules.
    pub fn acl(mut self, acl: Vec<String>) -> Self {
        self.body.acl = Param::Value(acl);
        self
    }

    /// Set, clear or unset the ACL rules.
    pub fn set_acl(mut self, acl: Param<Vec<String>>) -> Self {
        self.body.acl = acl;
        self
    }

    /// The body this builder will send.
    pub fn body(&self) -> &CredentialCreate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<Credential> {
        let request = ApiRequest::new(Method::POST, "/credentials").json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<Credential> {
        block_on(self.call())?
    }
}

/// An unsent credential update call.
pub struct CredentialUpdateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    id: String,
    body: CredentialUpdate,
}

impl CredentialUpdateCallBuilder {
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

    /// Replace the ACL rules.
    pub fn acl(mut self, acl: Vec<String>) -> Self {
        self.body.acl = Param::Value(acl);
        self
    }

    /// Set, clear or unset the ACL rules.
    pub fn set_acl(mut self, acl: Param<Vec<String>>) -> Self {
        self.body.acl = acl;
        self
    }

    /// The body this builder will send.
    pub fn body(&self) -> &CredentialUpdate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<Credential> {
        let request =
            ApiRequest::new(Method::PATCH, format!("/credentials/{}", self.id)).json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<Credential> {
        block_on(self.call())?
    }
}
