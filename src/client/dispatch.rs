//! The request dispatcher seam.
//!
//! Services, call builders and pages never talk to `reqwest` directly. They
//! describe a request as an [`ApiRequest`] and hand it to a [`Dispatcher`],
//! which is injected when they are constructed.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::models::Param;
use crate::Result;

/// One HTTP request against the API, before it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the configured base URL, or an absolute URI
    /// (continuation links are absolute).
    pub path: String,
    /// Query parameters, in order. Unset parameters are never added.
    pub query: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query parameters or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter if it carries a value.
    ///
    /// `Unset` and `Null` both leave the query untouched.
    pub fn query_param<T: ToString>(mut self, name: &str, value: &Param<T>) -> Self {
        if let Param::Value(v) = value {
            self.query.push((name.to_string(), v.to_string()));
        }
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Executes one request and returns the decoded JSON response.
///
/// Returns `Ok(None)` when the server answered with an empty body (e.g. 204
/// on delete). Implementations must not retry; failures are returned as-is.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// Send the request and return the response body.
    async fn dispatch(&self, request: ApiRequest) -> Result<Option<Value>>;
}

impl dyn Dispatcher {
    /// Send a request and deserialize the response into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let body = self.dispatch(request).await?;
        Ok(serde_json::from_value(body.unwrap_or(Value::Null))?)
    }

    /// Send a request whose response body, if any, is ignored.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<()> {
        self.dispatch(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_param_skips_unset_and_null() {
        let request = ApiRequest::get("/credentials")
            .query_param("before_id", &Param::<String>::Unset)
            .query_param("limit", &Param::Value(10))
            .query_param("other", &Param::<String>::Null);

        assert_eq!(
            request.query,
            vec![("limit".to_string(), "10".to_string())]
        );
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body {
            #[serde(skip_serializing_if = "Param::is_unset")]
            description: Param<String>,
        }

        let request = ApiRequest::new(Method::PATCH, "/api_keys/ak_1")
            .json(&Body {
                description: Param::Value("rotated".into()),
            })
            .unwrap();

        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.body, Some(json!({"description": "rotated"})));
    }
}
