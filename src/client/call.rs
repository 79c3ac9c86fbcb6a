//! Call builders shared by every resource: fetch one resource, delete one
//! resource, list one page.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::blocking::block_on;
use super::dispatch::{ApiRequest, Dispatcher};
use super::paginated::{ListEnvelope, Page};
use crate::models::Param;
use crate::Result;

/// An unsent request that takes no options and decodes to `T`.
///
/// Returned by every `get` operation.
pub struct CallBuilder<T> {
    dispatcher: Arc<dyn Dispatcher>,
    request: ApiRequest,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> CallBuilder<T> {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatcher>, request: ApiRequest) -> Self {
        Self {
            dispatcher,
            request,
            _marker: PhantomData,
        }
    }

    /// The request this builder will send.
    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Send the request.
    pub async fn call(&self) -> Result<T> {
        self.dispatcher.send(self.request.clone()).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<T> {
        block_on(self.call())?
    }
}

/// An unsent DELETE request. The response body, if any, is discarded.
pub struct DeleteCallBuilder {
    dispatcher: Arc<dyn Dispatcher>,
    request: ApiRequest,
}

impl DeleteCallBuilder {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatcher>, path: String) -> Self {
        Self {
            dispatcher,
            request: ApiRequest::delete(path),
        }
    }

    /// The request this builder will send.
    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Send the request.
    pub async fn call(&self) -> Result<()> {
        self.dispatcher.send_empty(self.request.clone()).await
    }

    /// Send the request and block until it returns.
    pub fn blocking_call(&self) -> Result<()> {
        block_on(self.call())?
    }
}

/// An unsent request for the first page of a list endpoint.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: ngrok_api_rs::NgrokClient) -> ngrok_api_rs::Result<()> {
/// let mut page = client.credentials().list().limit(50).call().await?;
/// loop {
///     for credential in page.current() {
///         println!("{} {}", credential.id, credential.description);
///     }
///     match page.next().await? {
///         Some(next) => page = next,
///         None => break,
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListCallBuilder<L> {
    dispatcher: Arc<dyn Dispatcher>,
    path: String,
    before_id: Param<String>,
    limit: Param<u32>,
    _marker: PhantomData<fn() -> L>,
}

impl<L: ListEnvelope> ListCallBuilder<L> {
    pub(crate) fn new(dispatcher: Arc<dyn Dispatcher>, path: impl Into<String>) -> Self {
        Self {
            dispatcher,
            path: path.into(),
            before_id: Param::Unset,
            limit: Param::Unset,
            _marker: PhantomData,
        }
    }

    /// Only return items created before the item with this ID.
    pub fn before_id(mut self, before_id: impl Into<String>) -> Self {
        self.before_id = Param::Value(before_id.into());
        self
    }

    /// Set or unset the `before_id` parameter.
    pub fn set_before_id(mut self, before_id: Param<String>) -> Self {
        self.before_id = before_id;
        self
    }

    /// Maximum number of items per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Param::Value(limit);
        self
    }

    /// Set or unset the `limit` parameter.
    pub fn set_limit(mut self, limit: Param<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// The request this builder will send.
    pub fn request(&self) -> ApiRequest {
        ApiRequest::get(self.path.as_str())
            .query_param("before_id", &self.before_id)
            .query_param("limit", &self.limit)
    }

    /// Fetch the first page.
    pub async fn call(&self) -> Result<Page<L>> {
        let list: L = self.dispatcher.send(self.request()).await?;
        Ok(Page::new(self.dispatcher.clone(), list))
    }

    /// Fetch the first page, blocking until it returns.
    pub fn blocking_call(&self) -> Result<Page<L>> {
        block_on(self.call())?
    }
}
