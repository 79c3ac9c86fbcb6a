//! Endpoint configuration modules: logging and TLS termination.
//!
//! `*Mutate` / `*AtEdge` types are what gets sent; the plain types are what
//! the API returns.

use serde::{Deserialize, Serialize};

use super::primitives::{null_as_default, Param, Ref};

/// Logging module as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointLogging {
    /// `true` if the module will be applied to traffic, `false` to disable.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// list of all EventStreams that will be used to configure and export this
    /// endpoint's logs
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_streams: Vec<Ref>,
}

/// Logging module as sent on replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointLoggingMutate {
    /// `true` if the module will be applied to traffic, `false` to disable.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub enabled: Param<bool>,
    /// list of all EventStream IDs that will be used to configure and export
    /// this endpoint's logs
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_streams: Vec<String>,
}

/// TLS termination module as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTlsTermination {
    /// `true` if the module will be applied to traffic, `false` to disable.
    #[serde(default)]
    pub enabled: Option<bool>,
    /// `edge` if the ngrok edge should terminate TLS traffic, `upstream` if TLS
    /// traffic should be passed through to the upstream ngrok agent
    #[serde(default, deserialize_with = "null_as_default")]
    pub terminate_at: String,
    /// The minimum TLS version used for termination
    #[serde(default)]
    pub min_version: Option<String>,
}

/// TLS termination module as sent on replace for HTTPS edges, which always
/// terminate at the edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTlsTerminationAtEdge {
    /// `true` if the module will be applied to traffic, `false` to disable.
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub enabled: Param<bool>,
    /// The minimum TLS version used for termination, e.g. `1.3`
    #[serde(default, skip_serializing_if = "Param::is_unset")]
    pub min_version: Param<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logging_mutate_omits_unset_enabled() {
        let module = EndpointLoggingMutate {
            enabled: Param::Unset,
            event_streams: vec!["es_123".to_string()],
        };

        assert_eq!(
            serde_json::to_value(&module).unwrap(),
            json!({"event_streams": ["es_123"]})
        );
    }

    #[test]
    fn test_tls_termination_deserialize() {
        let module: EndpointTlsTermination = serde_json::from_value(json!({
            "enabled": true,
            "terminate_at": "edge",
            "min_version": "1.2"
        }))
        .unwrap();

        assert_eq!(module.enabled, Some(true));
        assert_eq!(module.terminate_at, "edge");
        assert_eq!(module.min_version.as_deref(), Some("1.2"));
    }

    #[test]
    fn test_null_collections_and_strings_read_as_empty() {
        let logging: EndpointLogging =
            serde_json::from_value(json!({"enabled": null, "event_streams": null})).unwrap();
        assert!(logging.enabled.is_none());
        assert!(logging.event_streams.is_empty());

        let tls: EndpointTlsTermination =
            serde_json::from_value(json!({"terminate_at": null, "min_version": null})).unwrap();
        assert_eq!(tls.terminate_at, "");
    }
}
