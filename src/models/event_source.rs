//! Event source models.

use serde::{Deserialize, Serialize};

/// An event type attached to an event subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    /// type of event for which an event subscription will trigger
    #[serde(rename = "type")]
    pub event_type: String,
    /// URI of the Event Source API resource
    pub uri: String,
}

/// All event sources of one subscription. This endpoint is not paginated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSourceList {
    /// the list of all event sources for an event subscription
    pub sources: Vec<EventSource>,
    /// URI of the next page of results, or null if there is no next page
    pub uri: String,
}
