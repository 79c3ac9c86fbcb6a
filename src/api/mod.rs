//! API service modules for ngrok resources.
//!
//! Each service exposes call builders for one resource. Services receive the
//! dispatcher when they are created and hold no other state.

mod api_keys;
mod credentials;
mod endpoint_modules;
mod event_sources;
mod tls_certificates;
mod weighted_backends;

pub use api_keys::{ApiKeyCreateCallBuilder, ApiKeyMutate, ApiKeyUpdateCallBuilder, ApiKeysService};
pub use credentials::{
    CredentialCreate, CredentialCreateCallBuilder, CredentialUpdate, CredentialUpdateCallBuilder,
    CredentialsService,
};
pub use endpoint_modules::{
    EndpointLoggingModuleService, HttpsEdgeTlsTerminationModuleService, ModuleReplace,
    ModuleReplaceCallBuilder,
};
pub use event_sources::{
    EventSourceCreate, EventSourceCreateCallBuilder, EventSourceUpdateCallBuilder,
    EventSourcesService,
};
pub use tls_certificates::{
    TlsCertificateCreate, TlsCertificateCreateCallBuilder, TlsCertificateUpdate,
    TlsCertificateUpdateCallBuilder, TlsCertificatesService,
};
pub use weighted_backends::{
    WeightedBackendCreateCallBuilder, WeightedBackendMutate, WeightedBackendUpdateCallBuilder,
    WeightedBackendsService,
};
