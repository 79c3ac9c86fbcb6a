//! TLS certificates service.
//!
//! Uploaded certificates can be attached to reserved domains and edges to
//! terminate TLS with your own certificate.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher, ListCallBuilder};
use crate::models::{Param, TlsCertificate, TlsCertificateList};
use crate::{Error, Result};

/// Service for TLS certificate operations.
pub struct TlsCertificatesService {
    dispatcher: Arc<dyn Dispatcher>,
}

impl TlsCertificatesService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Upload a new TLS certificate.
    ///
    /// `certificate_pem` is the chain of PEM-encoded certificates, leaf first;
    /// `private_key_pem` is the leaf's private key. Both are required.
    pub fn create(
        &self,
        certificate_pem: &str,
        private_key_pem: &str,
    ) -> Result<TlsCertificateCreateCallBuilder> {
        Error::require("certificate_pem", certificate_pem)?;
        Error::require("private_key_pem", private_key_pem)?;
        Ok(TlsCertificateCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            body: TlsCertificateCreate {
                description: Param::Unset,
                metadata: Param::Unset,
                certificate_pem: certificate_pem.to_string(),
                private_key_pem: private_key_pem.to_string(),
            },
        })
    }

    /// Delete a TLS certificate.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(
            self.dispatcher.clone(),
            format!("/tls_certificates/{id}"),
        ))
    }

    /// Get detailed information about a TLS certificate.
    pub fn get(&self, id: &str) -> Result<CallBuilder<TlsCertificate>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(format!("/tls_certificates/{id}")),
        ))
    }

    /// List all TLS certificates on this account.
    pub fn list(&self) -> ListCallBuilder<TlsCertificateList> {
        ListCallBuilder::new(self.dispatcher.clone(), "/tls_certificates")
    }

    /// Update attributes of a TLS certificate by ID.
    pub fn update(&self, id: &str) -> Result<TlsCertificateUpdateCallBuilder> {
        Error::require("id", id)?;
        Ok(TlsCertificateUpdateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            id: id.to_string(),
            body: TlsCertificateUpdate::default(),
        })
    }
}

/// Body of a TLS certificate create call.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsCertificateCreate {
    /// human-readable description of this TLS certificate. Optional, max 255 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined machine-readable data. Optional, max 4096 bytes.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
    /// chain of PEM-encoded certificates, leaf first
    pub certificate_pem: String,
    /// private key for the leaf certificate, PEM-encoded
    pub private_key_pem: String,
}

impl std::fmt::Debug for TlsCertificateCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsCertificateCreate")
            .field("description", &self.description)
            .field("metadata", &self.metadata)
            .field("certificate_pem", &self.certificate_pem)
            .field("private_key_pem", &"[REDACTED]")
            .finish()
    }
}

/// Body of a TLS certificate update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TlsCertificateUpdate {
    /// human-readable description of this TLS certificate.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub description: Param<String>,
    /// arbitrary user-defined machine-readable data.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub metadata: Param<String>,
}

/// An unsent TLS certificate create call.
pub struct TlsCertificateCreateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    body: TlsCertificateCreate,
}

impl TlsCertificateCreateCallBuilder {
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
    pub fn body(&self) -> &TlsCertificateCreate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<TlsCertificate> {
        let request = ApiRequest::new(Method::POST, "/tls_certificates").json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<TlsCertificate> {
        block_on(self.call())?
    }
}

/// An unsent TLS certificate update call.
pub struct TlsCertificateUpdateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    id: String,
    body: TlsCertificateUpdate,
}

impl TlsCertificateUpdateCallBuilder {
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
    pub fn body(&self) -> &TlsCertificateUpdate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<TlsCertificate> {
        let request = ApiRequest::new(Method::PATCH, format!("/tls_certificates/{}", self.id))
            .json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<TlsCertificate> {
        block_on(self.call())?
    }
}
