//! HTTP client implementation for the ngrok API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{
    ApiKeysService, CredentialsService, EndpointLoggingModuleService, EventSourcesService,
    HttpsEdgeTlsTerminationModuleService, TlsCertificatesService, WeightedBackendsService,
};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::dispatch::{ApiRequest, Dispatcher};

/// Environment variable holding the API key read by [`NgrokClient::from_env`].
pub const API_KEY_ENV: &str = "NGROK_API_KEY";
/// Environment variable overriding the base URL in [`NgrokClient::from_env`].
pub const BASE_URL_ENV: &str = "NGROK_API_BASE_URL";

/// The main client for interacting with the ngrok API.
///
/// The client owns a [`Dispatcher`] and passes it to every service it hands
/// out. Cloning is cheap; clones share the dispatcher.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> ngrok_api_rs::Result<()> {
/// let client = ngrok_api_rs::NgrokClient::new("my-api-key")?;
///
/// let credential = client
///     .credentials()
///     .create()
///     .description("for the staging agent")
///     .call()
///     .await?;
/// println!("authtoken: {:?}", credential.token);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NgrokClient {
    dispatcher: Arc<dyn Dispatcher>,
}

impl NgrokClient {
    /// Create a client for the public API with default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let dispatcher = HttpDispatcher::new(api_key, config)?;
        Ok(Self::with_dispatcher(Arc::new(dispatcher)))
    }

    /// Create a client from `NGROK_API_KEY` and, if set, `NGROK_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{API_KEY_ENV} must be set")))?;

        let mut config = ClientConfig::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        Self::with_config(api_key, config)
    }

    /// Create a client around any dispatcher.
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Get the dispatcher shared by all services of this client.
    pub fn dispatcher(&self) -> Arc<dyn Dispatcher> {
        self.dispatcher.clone()
    }

    /// Get the API keys service.
    pub fn api_keys(&self) -> ApiKeysService {
        ApiKeysService::new(self.dispatcher.clone())
    }

    /// Get the tunnel credentials service.
    pub fn credentials(&self) -> CredentialsService {
        CredentialsService::new(self.dispatcher.clone())
    }

    /// Get the TLS certificates service.
    pub fn tls_certificates(&self) -> TlsCertificatesService {
        TlsCertificatesService::new(self.dispatcher.clone())
    }

    /// Get the event sources service.
    pub fn event_sources(&self) -> EventSourcesService {
        EventSourcesService::new(self.dispatcher.clone())
    }

    /// Get the weighted backends service.
    pub fn weighted_backends(&self) -> WeightedBackendsService {
        WeightedBackendsService::new(self.dispatcher.clone())
    }

    /// Get the endpoint configuration logging module service.
    pub fn endpoint_logging_module(&self) -> EndpointLoggingModuleService {
        EndpointLoggingModuleService::new(self.dispatcher.clone())
    }

    /// Get the HTTPS edge TLS termination module service.
    pub fn https_edge_tls_termination_module(&self) -> HttpsEdgeTlsTerminationModuleService {
        HttpsEdgeTlsTerminationModuleService::new(self.dispatcher.clone())
    }
}

impl std::fmt::Debug for NgrokClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NgrokClient").finish_non_exhaustive()
    }
}

/// [`Dispatcher`] over `reqwest`.
///
/// Adds the bearer token, `Ngrok-Version` and User-Agent headers to every
/// request, resolves paths against the base URL and maps non-2xx responses
/// to [`Error`].
pub struct HttpDispatcher {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: Url,
    config: ClientConfig,
}

impl HttpDispatcher {
    /// Build a dispatcher from an API key and configuration.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = SecretString::from(api_key.into());
        if api_key.expose_secret().is_empty() {
            return Err(Error::InvalidInput("api key is required".to_string()));
        }

        let base_url = Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url,
            config,
        })
    }

    /// Resolve a request path to a full URL.
    ///
    /// Absolute URIs (continuation links) are used verbatim.
    pub(crate) fn resolve(&self, path: &str) -> Result<Url> {
        match Url::parse(path) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.as_str().trim_end_matches('/');
                let path = path.trim_start_matches('/');
                Ok(Url::parse(&format!("{base}/{path}"))?)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| Error::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            "Ngrok-Version",
            HeaderValue::from_str(self.config.api_version.as_str())
                .map_err(|_| Error::Config("Invalid API version".to_string()))?,
        );

        Ok(headers)
    }

    /// Handle an API response.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Option<Value>> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_str(&text)?));
        }

        let status_code = status.as_u16();
        let body: Value = response.json().await.unwrap_or_default();
        tracing::warn!(status = status_code, body = %body, "ngrok API returned an error");

        if status_code == 404 {
            let message = body
                .get("msg")
                .and_then(|m| m.as_str())
                .unwrap_or("Resource not found")
                .to_string();
            return Err(Error::NotFound(message));
        }

        Err(Error::from_api_response(status_code, body))
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, request: ApiRequest) -> Result<Option<Value>> {
        let url = self.resolve(&request.path)?;
        let headers = self.build_headers()?;

        tracing::debug!(method = %request.method, %url, "sending ngrok API request");

        let mut builder = self.http.request(request.method, url).headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        tracing::debug!(status = response.status().as_u16(), "received ngrok API response");

        self.handle_response(response).await
    }
}

impl std::fmt::Debug for HttpDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDispatcher")
            .field("base_url", &self.base_url.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
