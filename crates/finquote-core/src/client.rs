//! Finnhub quote client.
//!
//! Two read-only calls against the upstream API:
//!
//! | Method | Endpoint | Failure mode |
//! |--------|----------|--------------|
//! | [`QuoteClient::fetch_quote`] | `GET /quote` | typed [`ClientError`] |
//! | [`QuoteClient::lookup_name`] | `GET /search` | typed [`ClientError`], not-found is `Ok` |
//! | [`QuoteClient::resolve_name`] | `GET /search` | never fails, returns [`UNKNOWN_STOCK`] |
//!
//! Each call issues exactly one request. Nothing is retried or cached.

use std::sync::Arc;

use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{ClientConfig, ClientError, NameLookup, Quote, SearchResult, ValidationError};

/// Name returned by [`QuoteClient::resolve_name`] when no company name is available.
pub const UNKNOWN_STOCK: &str = "Unknown Stock";

/// Stateless client for the quote and symbol-search endpoints.
///
/// Cloning is cheap and clones share the underlying transport.
#[derive(Clone)]
pub struct QuoteClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl QuoteClient {
    /// Client backed by [`ReqwestHttpClient`].
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the current price and observation time for `symbol`.
    ///
    /// The symbol is sent as given; its format is not checked beyond being
    /// non-empty.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Validation`] for an empty symbol
    /// - [`ClientError::Transport`] when the request cannot be completed
    /// - [`ClientError::UpstreamRequest`] for a non-2xx status
    /// - [`ClientError::MalformedResponse`] when `c` or `t` is missing or ill-typed
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote, ClientError> {
        ensure_symbol(symbol)?;

        debug!("requesting quote for '{symbol}'");
        let response = self.get("quote", &[("symbol", symbol)]).await?;
        debug!("quote response for '{symbol}': status {}", response.status);

        if !response.is_success() {
            warn!(
                "quote request for '{symbol}' failed with status {}",
                response.status
            );
            return Err(ClientError::UpstreamRequest {
                status_code: response.status,
            });
        }

        let payload: QuotePayload = serde_json::from_str(&response.body).map_err(|e| {
            ClientError::malformed(format!("failed to parse quote for '{symbol}': {e}"))
        })?;

        let observed_at = payload.timestamp_secs.checked_mul(1_000).ok_or_else(|| {
            ClientError::malformed(format!(
                "quote timestamp {} overflows milliseconds",
                payload.timestamp_secs
            ))
        })?;

        let quote = Quote::new(symbol, payload.current_price, observed_at).map_err(|e| {
            ClientError::malformed(format!("invalid quote for '{symbol}': {e}"))
        })?;

        info!(
            "quote for '{symbol}': price={} observed_at={}",
            quote.price(),
            quote.observed_at()
        );
        Ok(quote)
    }

    /// Run the upstream symbol search for `query` and return the raw payload.
    ///
    /// # Errors
    ///
    /// Same classification as [`fetch_quote`](Self::fetch_quote).
    pub async fn search(&self, query: &str) -> Result<SearchResult, ClientError> {
        ensure_symbol(query)?;

        debug!("requesting symbol search for '{query}'");
        let response = self.get("search", &[("q", query)]).await?;
        debug!("search response for '{query}': status {}", response.status);

        if !response.is_success() {
            return Err(ClientError::UpstreamRequest {
                status_code: response.status,
            });
        }

        let result: SearchResult = serde_json::from_str(&response.body).map_err(|e| {
            ClientError::malformed(format!("failed to parse search for '{query}': {e}"))
        })?;
        debug!(
            "search for '{query}' returned count={} entries={}",
            result.count,
            result.matches.len()
        );
        Ok(result)
    }

    /// Look up the company name for `symbol`, keeping "not found" apart from failures.
    ///
    /// The first search entry whose symbol equals `symbol` exactly
    /// (case-sensitive) wins. A zero `count` or no exact entry is
    /// [`NameLookup::NotFound`].
    pub async fn lookup_name(&self, symbol: &str) -> Result<NameLookup, ClientError> {
        let result = self.search(symbol).await?;

        match result.exact_match(symbol) {
            Some(entry) => {
                debug!("found matching entry for '{symbol}': '{}'", entry.description);
                Ok(NameLookup::Found(entry.description.clone()))
            }
            None if result.count == 0 => {
                debug!("search for '{symbol}' returned no entries");
                Ok(NameLookup::NotFound)
            }
            None => {
                debug!(
                    "no exact match for '{symbol}' among {} entries",
                    result.matches.len()
                );
                Ok(NameLookup::NotFound)
            }
        }
    }

    /// Resolve a display name for `symbol`.
    ///
    /// Never fails. Upstream errors and "no such ticker" both collapse into
    /// [`UNKNOWN_STOCK`]; use [`lookup_name`](Self::lookup_name) to tell them apart.
    pub async fn resolve_name(&self, symbol: &str) -> String {
        match self.lookup_name(symbol).await {
            Ok(NameLookup::Found(name)) => name,
            Ok(NameLookup::NotFound) => {
                info!("no matching stock found for '{symbol}'");
                String::from(UNKNOWN_STOCK)
            }
            Err(error) => {
                warn!(
                    "name lookup for '{symbol}' failed ({}): {error}",
                    error.code()
                );
                String::from(UNKNOWN_STOCK)
            }
        }
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<HttpResponse, ClientError> {
        let request = HttpRequest::get(self.endpoint_url(path, params))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms());

        self.http_client.execute(request).await.map_err(|e| {
            warn!("{path} request transport error: {}", e.message());
            ClientError::Transport(e)
        })
    }

    fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{path}?", self.config.base_url());
        for (name, value) in params {
            url.push_str(name);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            url.push('&');
        }
        url.push_str("token=");
        url.push_str(&urlencoding::encode(self.config.api_token().expose()));
        url
    }
}

fn ensure_symbol(symbol: &str) -> Result<(), ValidationError> {
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }
    Ok(())
}

// Finnhub quote payload; only the fields the client needs.
#[derive(Debug, Deserialize)]
struct QuotePayload {
    #[serde(rename = "c", deserialize_with = "decimal_from_json_number")]
    current_price: Decimal,
    #[serde(rename = "t")]
    timestamp_secs: i64,
}

/// Accepts JSON numbers only; strings and null are rejected.
fn decimal_from_json_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    Decimal::from_str_exact(&number.to_string())
        .map_err(|e| D::Error::custom(format!("price {number} is not a decimal: {e}")))
}
