//! Client configuration.
//!
//! The API token is injected here and nowhere else. It is never compiled
//! into the binary and never printed: [`ApiToken`] redacts itself in both
//! `Debug` and `Display`.

use std::fmt::{Debug, Display, Formatter};

use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

pub const ENV_API_TOKEN: &str = "FINQUOTE_API_TOKEN";
pub const ENV_BASE_URL: &str = "FINQUOTE_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "FINQUOTE_TIMEOUT_MS";

/// Upstream API credential.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyApiToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw token value, for building request URLs only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

impl Display for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

/// Endpoint, credential and timeout used by [`QuoteClient`](crate::QuoteClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_token: ApiToken,
    timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_token: ApiToken::new(api_token)?,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Load from `FINQUOTE_API_TOKEN`, `FINQUOTE_BASE_URL` and `FINQUOTE_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(ENV_API_TOKEN).ok_or(ValidationError::MissingEnv {
            name: ENV_API_TOKEN,
        })?;
        let mut config = Self::new(token)?;

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(base_url)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidEnv {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_ms(timeout_ms)?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
        let has_host = trimmed
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(ValidationError::InvalidBaseUrl { value: base_url });
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}
