//! # ngrok-api-rs
//!
//! An async Rust client for the ngrok REST management API.
//!
//! Every resource (API keys, tunnel credentials, TLS certificates, event
//! sources, weighted backends, endpoint modules) has a service on
//! [`NgrokClient`]. Service methods return call builders: set the optional
//! fields you care about, then `call().await` (or `blocking_call()` outside
//! an async runtime).
//!
//! ## Features
//!
//! - **Fluent builders**: one setter per optional API field; unset fields are
//!   never sent, explicitly cleared fields are sent as `null`
//! - **Pagination**: list calls return a [`Page`] that follows the API's
//!   `next_page_uri` links one page at a time, or as an item stream
//! - **Injectable transport**: every request goes through the [`Dispatcher`]
//!   trait, implemented over `reqwest` by [`HttpDispatcher`]
//! - **Async-first**: built on Tokio, with blocking variants for scripts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ngrok_api_rs::NgrokClient;
//!
//! #[tokio::main]
//! async fn main() -> ngrok_api_rs::Result<()> {
//!     let client = NgrokClient::new(std::env::var("NGROK_API_KEY").unwrap_or_default())?;
//!
//!     // Create an agent authtoken limited to one domain
//!     let credential = client
//!         .credentials()
//!         .create()
//!         .description("staging agent")
//!         .acl(vec!["bind:staging.example.com".to_string()])
//!         .call()
//!         .await?;
//!     println!("created {}", credential.id);
//!
//!     // Walk every page of credentials
//!     let mut page = client.credentials().list().limit(100).call().await?;
//!     loop {
//!         for c in page.current() {
//!             println!("{} {}", c.id, c.description);
//!         }
//!         match page.next().await? {
//!             Some(next) => page = next,
//!             None => break,
//!         }
//!     }
//!
//!     client.credentials().delete(&credential.id)?.call().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{
    ApiRequest, ClientConfig, Dispatcher, HttpDispatcher, ListEnvelope, NgrokClient, Page,
    PaginatedStream,
};
pub use error::{Error, Result};
pub use models::{ApiVersion, Param};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ngrok_api_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, Dispatcher, ListEnvelope, NgrokClient, Page};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        ApiKey, ApiKeyList, ApiVersion, Credential, CredentialList, EndpointLogging,
        EndpointLoggingMutate, EndpointTlsTermination, EndpointTlsTerminationAtEdge, EventSource,
        EventSourceList, Param, Ref, TlsCertificate, TlsCertificateList, WeightedBackend,
        WeightedBackendList,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_share_dispatcher() {
        let client = NgrokClient::new("s3kr1t").unwrap();
        let clone = client.clone();
        assert!(std::sync::Arc::ptr_eq(&client.dispatcher(), &clone.dispatcher()));
    }

    #[test]
    fn test_required_ids_fail_before_any_request() {
        let client = NgrokClient::new("s3kr1t").unwrap();

        let err = client.credentials().get("").err().unwrap();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(client.api_keys().delete("").is_err());
        assert!(client.tls_certificates().update("").is_err());
        assert!(client.weighted_backends().get("").is_err());
        assert!(client.endpoint_logging_module().replace("").is_err());
        assert!(client.https_edge_tls_termination_module().delete("").is_err());
    }

    #[test]
    fn test_list_request_query() {
        let client = NgrokClient::new("s3kr1t").unwrap();
        let request = client
            .api_keys()
            .list()
            .before_id("ak_2")
            .limit(10)
            .request();

        assert_eq!(request.path, "/api_keys");
        assert_eq!(
            request.query,
            vec![
                ("before_id".to_string(), "ak_2".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }
}
