//! Cursor-based pagination over list endpoints.
//!
//! A list call returns a [`Page`]: one envelope of items plus an optional
//! `next_page_uri`. [`Page::next`] follows that link; [`Page::into_stream`]
//! follows all of them lazily and yields individual items.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;

use super::dispatch::{ApiRequest, Dispatcher};
use crate::Result;

/// A single page of a list response.
///
/// Implemented by every `*List` model that carries a `next_page_uri`.
pub trait ListEnvelope: DeserializeOwned + Send + Sync + 'static {
    /// The resource type listed.
    type Item: Send + 'static;

    /// The items in this page.
    fn items(&self) -> &[Self::Item];

    /// Take the items out of this page.
    fn into_items(self) -> Vec<Self::Item>;

    /// Link to the next page; `None` when this is the last one.
    fn next_page_uri(&self) -> Option<&str>;
}

/// The link to follow after `page`. A blank link ends the traversal.
fn continuation<L: ListEnvelope>(page: &L) -> Option<&str> {
    page.next_page_uri().filter(|uri| !uri.is_empty())
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetch the page behind a continuation link.
///
/// The link is sent as-is with no extra query parameters; it already encodes
/// the filters and limit of the original call.
fn fetch_page<L: ListEnvelope>(
    dispatcher: Arc<dyn Dispatcher>,
    uri: String,
) -> BoxFuture<'static, Result<L>> {
    Box::pin(async move {
        tracing::trace!(next_page_uri = %uri, "fetching next page");
        dispatcher.send::<L>(ApiRequest::get(uri)).await
    })
}

/// One page of results plus the dispatcher needed to fetch the next.
///
/// Pages are immutable: [`next`](Self::next) returns a new `Page` and leaves
/// this one untouched, so a failed fetch can simply be retried.
pub struct Page<L> {
    dispatcher: Arc<dyn Dispatcher>,
    page: L,
}

impl<L: ListEnvelope> Page<L> {
    /// Wrap an envelope that was fetched through `dispatcher`.
    pub fn new(dispatcher: Arc<dyn Dispatcher>, page: L) -> Self {
        Self { dispatcher, page }
    }

    /// The full envelope of this page.
    pub fn page(&self) -> &L {
        &self.page
    }

    /// The items held in this page. Never performs I/O.
    pub fn current(&self) -> &[L::Item] {
        self.page.items()
    }

    /// Returns `true` if a next page can be fetched.
    pub fn has_more(&self) -> bool {
        continuation(&self.page).is_some()
    }

    /// Unwrap the envelope.
    pub fn into_inner(self) -> L {
        self.page
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` immediately, without a request, when this is the
    /// last page. Errors from the dispatcher are returned unchanged.
    pub async fn next(&self) -> Result<Option<Page<L>>> {
        let Some(uri) = continuation(&self.page) else {
            return Ok(None);
        };

        let next = fetch_page::<L>(self.dispatcher.clone(), uri.to_string()).await?;
        Ok(Some(Page::new(self.dispatcher.clone(), next)))
    }

    /// Stream every item of this and all following pages.
    ///
    /// Pages are fetched one at a time, only once the previous page's items
    /// have been consumed. The stream ends after yielding the first error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    ///
    /// # async fn example(client: ngrok_api_rs::NgrokClient) -> ngrok_api_rs::Result<()> {
    /// let mut keys = client.api_keys().list().call().await?.into_stream();
    ///
    /// while let Some(key) = keys.next().await {
    ///     println!("{}", key?.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn into_stream(self) -> PaginatedStream<L> {
        let next_page_uri = continuation(&self.page).map(str::to_owned);
        PaginatedStream {
            dispatcher: self.dispatcher,
            current_items: self.page.into_items().into(),
            next_page_uri,
            pending_fetch: None,
        }
    }
}

impl<L: Clone> Clone for Page<L> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
            page: self.page.clone(),
        }
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for Page<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("page", &self.page).finish()
    }
}

/// A stream over the items of consecutive pages.
///
/// Created by [`Page::into_stream`].
pub struct PaginatedStream<L: ListEnvelope> {
    dispatcher: Arc<dyn Dispatcher>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<L::Item>,
    /// Link to the next page, None if exhausted.
    next_page_uri: Option<String>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<L>>>,
}

impl<L: ListEnvelope> Stream for PaginatedStream<L> {
    type Item = Result<L::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.next_page_uri = continuation(&page).map(str::to_owned);
                        this.current_items = page.into_items().into();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page_uri = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(uri) = this.next_page_uri.take() {
                this.pending_fetch = Some(fetch_page::<L>(this.dispatcher.clone(), uri));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

// Nothing in the stream is structurally pinned.
impl<L: ListEnvelope> Unpin for PaginatedStream<L> {}
