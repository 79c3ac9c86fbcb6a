//! Event sources service.
//!
//! Event sources are the event types an event subscription listens to. They
//! are addressed by subscription ID and event type.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{block_on, ApiRequest, CallBuilder, DeleteCallBuilder, Dispatcher};
use crate::models::{EventSource, EventSourceList, Param};
use crate::{Error, Result};

/// Service for event source operations.
pub struct EventSourcesService {
    dispatcher: Arc<dyn Dispatcher>,
}

fn sources_path(subscription_id: &str) -> String {
    format!("/event_subscriptions/{subscription_id}/sources")
}

impl EventSourcesService {
    /// Create the service around a dispatcher.
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Add an additional type for which this event subscription will trigger.
    pub fn create(&self, subscription_id: &str) -> Result<EventSourceCreateCallBuilder> {
        Error::require("subscription_id", subscription_id)?;
        Ok(EventSourceCreateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            subscription_id: subscription_id.to_string(),
            body: EventSourceCreate::default(),
        })
    }

    /// Remove a type for which this event subscription will trigger.
    pub fn delete(&self, subscription_id: &str, event_type: &str) -> Result<DeleteCallBuilder> {
        Error::require("subscription_id", subscription_id)?;
        Error::require("type", event_type)?;
        Ok(DeleteCallBuilder::new(
            self.dispatcher.clone(),
            format!("{}/{event_type}", sources_path(subscription_id)),
        ))
    }

    /// Get the details for a given type that triggers for the given event subscription.
    pub fn get(&self, subscription_id: &str, event_type: &str) -> Result<CallBuilder<EventSource>> {
        Error::require("subscription_id", subscription_id)?;
        Error::require("type", event_type)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(format!("{}/{event_type}", sources_path(subscription_id))),
        ))
    }

    /// List the types for which this event subscription will trigger.
    ///
    /// This endpoint is not paginated.
    pub fn list(&self, subscription_id: &str) -> Result<CallBuilder<EventSourceList>> {
        Error::require("subscription_id", subscription_id)?;
        Ok(CallBuilder::new(
            self.dispatcher.clone(),
            ApiRequest::get(sources_path(subscription_id)),
        ))
    }

    /// Update the type for which this event subscription will trigger.
    pub fn update(&self, subscription_id: &str, event_type: &str) -> Result<EventSourceUpdateCallBuilder> {
        Error::require("subscription_id", subscription_id)?;
        Error::require("type", event_type)?;
        Ok(EventSourceUpdateCallBuilder {
            dispatcher: self.dispatcher.clone(),
            path: format!("{}/{event_type}", sources_path(subscription_id)),
        })
    }
}

/// Body of an event source create call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSourceCreate {
    /// Type of event for which an event subscription will trigger
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Param::is_unset"
    )]
    pub event_type: Param<String>,
}

/// An unsent event source create call.
pub struct EventSourceCreateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    subscription_id: String,
    body: EventSourceCreate,
}

impl EventSourceCreateCallBuilder {
    /// Set the event type, e.g. `ip_policy_created.v0`.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.body.event_type = Param::Value(event_type.into());
        self
    }

    /// Set, clear or unset the event type.
    pub fn set_event_type(mut self, event_type: Param<String>) -> Self {
        self.body.event_type = event_type;
        self
    }

    /// The body this builder will send.
    pub fn body(&self) -> &EventSourceCreate {
        &self.body
    }

    /// Send the request.
    pub async fn call(&self) -> Result<EventSource> {
        let request = ApiRequest::new(Method::POST, sources_path(&self.subscription_id))
            .json(&self.body)?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<EventSource> {
        block_on(self.call())?
    }
}

/// An unsent event source update call. It carries no options; the API
/// accepts an empty object.
pub struct EventSourceUpdateCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    path: String,
}

impl EventSourceUpdateCallBuilder {
    /// Send the request.
    pub async fn call(&self) -> Result<EventSource> {
        let request = ApiRequest::new(Method::PATCH, self.path.as_str())
            .json(&serde_json::Map::new())?;
        self.dispatcher.send(request).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<EventSource> {
        block_on(self.call())?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::NgrokClient;

    #[test]
    fn test_paths() {
        let sources = NgrokClient::new("test-key").unwrap().event_sources();

        let get = sources.get("esb_1", "ip_policy_created.v0").unwrap();
        assert_eq!(
            get.request().path,
            "/event_subscriptions/esb_1/sources/ip_policy_created.v0"
        );

        let list = sources.list("esb_1").unwrap();
        assert_eq!(list.request().path, "/event_subscriptions/esb_1/sources");
    }

    #[test]
    fn test_required_identifiers() {
        let sources = NgrokClient::new("test-key").unwrap().event_sources();

        assert!(sources.create("").is_err());
        assert!(sources.get("esb_1", "").is_err());
        assert!(sources.delete("", "ip_policy_created.v0").is_err());
        assert!(sources.update("esb_1", "").is_err());
    }
}
