//! HTTP client, dispatcher and pagination for the ngrok API.
//!
//! This module provides the main entry point [`NgrokClient`], the
//! [`Dispatcher`] seam every request goes through, and the call builders and
//! [`Page`] type shared by all resource services.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> ngrok_api_rs::Result<()> {
//! let client = ngrok_api_rs::NgrokClient::from_env()?;
//!
//! let page = client.api_keys().list().limit(10).call().await?;
//! for key in page.current() {
//!     println!("{} {}", key.id, key.description);
//! }
//! # Ok(())
//! # }
//! ```

mod blocking;
mod call;
mod config;
pub mod dispatch;
mod http;
pub mod paginated;

pub use call::{CallBuilder, DeleteCallBuilder, ListCallBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use dispatch::{ApiRequest, Dispatcher};
pub use http::{HttpDispatcher, NgrokClient, API_KEY_ENV, BASE_URL_ENV};
pub use paginated::{ListEnvelope, Page, PaginatedStream};
pub(crate) use blocking::block_on;
