//! # finquote core
//!
//! Client for the Finnhub quote and symbol-search endpoints.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`QuoteClient`]: quote fetch and company-name resolution |
//! | [`config`] | [`ClientConfig`]: base URL, API token, timeout |
//! | [`domain`] | Domain models ([`Quote`], [`SearchResult`], [`NameLookup`]) |
//! | [`error`] | [`ClientError`] and [`ValidationError`] |
//! | [`http_client`] | Transport abstraction and the reqwest implementation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use finquote_core::{ClientConfig, QuoteClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuoteClient::new(ClientConfig::from_env()?);
//!
//!     let quote = client.fetch_quote("AAPL").await?;
//!     let name = client.resolve_name("AAPL").await;
//!     println!("{name}: {} at {}", quote.price(), quote.observed_at());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Quote lookups return typed errors:
//!
//! ```rust
//! use finquote_core::ClientError;
//!
//! fn describe(error: &ClientError) -> String {
//!     match error {
//!         ClientError::UpstreamRequest { status_code } => format!("upstream said {status_code}"),
//!         ClientError::MalformedResponse { message } => format!("bad payload: {message}"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! Name resolution never fails: [`QuoteClient::resolve_name`] returns
//! [`UNKNOWN_STOCK`] both when the API is unreachable and when the ticker is
//! unknown. [`QuoteClient::lookup_name`] keeps the two apart.
//!
//! ## Logging
//!
//! Decision points are logged through the [`log`] facade. The API token is
//! never part of a log record.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::{QuoteClient, UNKNOWN_STOCK};

pub use config::{ApiToken, ClientConfig};

pub use domain::{NameLookup, Quote, SearchMatch, SearchResult, UtcDateTime};

pub use error::{ClientError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
