//! Data models for the ngrok API.
//!
//! Models are organized by resource:
//!
//! - [`primitives`] - `Param`, `Ref`, `ApiVersion`
//! - [`api_key`] - API keys
//! - [`credential`] - tunnel credentials (agent authtokens)
//! - [`tls_certificate`] - uploaded TLS certificates
//! - [`event_source`] - event subscription sources
//! - [`backend`] - weighted backends
//! - [`endpoint_module`] - endpoint logging and TLS termination modules

pub mod primitives;
pub mod api_key;
pub mod credential;
pub mod tls_certificate;
pub mod event_source;
pub mod backend;
pub mod endpoint_module;

// Re-export commonly used types
pub use primitives::*;
pub use api_key::*;
pub use credential::*;
pub use tls_certificate::*;
pub use event_source::*;
pub use backend::*;
pub use endpoint_module::*;
