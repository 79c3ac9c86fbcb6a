//! Endpoint module services.
//!
//! Modules are singletons attached to a parent resource; they support
//! replace, get and delete only.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher};
use crate::models::{
    EndpointLogging, EndpointLoggingMutate, EndpointTlsTermination, EndpointTlsTerminationAtEdge,
    Param,
};
use crate::{Error, Result};

/// Body of a module replace call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleReplace<M> {
    /// The new module configuration.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub module: Param<M>,
}

/// An unsent module replace call (PUT).
pub struct ModuleReplaceCallBuilder<M, R> {
    dispatcher: Arc<dyn Dispatcher>,
    path: String,
    body: ModuleReplace<M>,
    _marker: std::marker::PhantomData<fn() -> R>,
}

impl<M, R> ModuleReplaceCallBuilder<M, R>
where
    M: Serialize,
    R: serde::de::DeserializeOwned,
{
    fn new(dispatcher: Arc<dyn Dispatcher>, path: String) -> Self {
        Self {
            dispatcher,
            path,
            body: ModuleReplace { module: Param::Unset },
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the module configuration.
    pub fn module(mut self, module: M) -> Self {
        self.body.module = Param::Value(module);
        self
    }

    /// Set, clear or unset the module configuration.
    pub fn set_module(mut self, module: Param<M>) -> Self {
        self.body.module = module;
        self
    }

    /// The body this builder will send.
    pub fn body(&self) -> &ModuleReplace<M> {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<R> {
        let request = ApiRequest::new(Method::PUT, self.path.as_str()).json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<R> {
        block_on(self.call())?
    }
}

/// Service for the logging module of endpoint configurations.
pub struct EndpointLoggingModuleService {
    dispatcher: Arc<dyn Dispatcher>,
}

fn logging_path(id: &str) -> String {
    format!("/endpoint_configurations/{id}/logging")
}

impl EndpointLoggingModuleService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Replace the logging module of an endpoint configuration.
    pub fn replace(
        &self,
        id: &str,
    ) -> Result<ModuleReplaceCallBuilder<EndpointLoggingMutate, EndpointLogging>> {
        Error::require("id", id)?;
        Ok(ModuleReplaceCallBuilder::new(self.dispatcher.clone(), logging_path(id)))
    }

    /// Get the logging module of an endpoint configuration.
    pub fn get(&self, id: &str) -> Result<CallBuilder<EndpointLogging>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(logging_path(id)),
        ))
    }

    /// Remove the logging module from an endpoint configuration.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(self.dispatcher.clone(), logging_path(id)))
    }
}

/// Service for the TLS termination module of HTTPS edges.
pub struct HttpsEdgeTlsTerminationModuleService {
    dispatcher: Arc<dyn Dispatcher>,
}

fn tls_termination_path(id: &str) -> String {
    format!("/edges/https/{id}/tls_termination")
}

impl HttpsEdgeTlsTerminationModuleService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Replace the TLS termination module of an HTTPS edge.
    pub fn replace(
        &self,
        id: &str,
    ) -> Result<ModuleReplaceCallBuilder<EndpointTlsTerminationAtEdge, EndpointTlsTermination>> {
        Error::require("id", id)?;
        Ok(ModuleReplaceCallBuilder::new(
            self.dispatcher.clone(),
            tls_termination_path(id),
        ))
    }

    /// Get the TLS termination module of an HTTPS edge.
    pub fn get(&self, id: &str) -> Result<CallBuilder<EndpointTlsTermination>> {
        Error::require("id", id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(tls_termination_path(id)),
        ))
    }

    /// Remove the TLS termination module from an HTTPS edge.
    pub fn delete(&self, id: &str) -> Result<DeleteCallBuilder> {
        Error::require("id", id)?;
        Ok(DeleteCallBuilder::new(
            self.dispatcher.clone(),
            tls_termination_path(id),
        ))
    }
}
