use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Point-in-time price observation for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    symbol: String,
    price: Decimal,
    /// Milliseconds since the Unix epoch.
    observed_at: i64,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        observed_at: i64,
    ) -> Result<Self, ValidationError> {
        if price < Decimal::ZERO {
            return Err(ValidationError::NegativeValue { field: "price" });
        }
        if observed_at < 0 {
            return Err(ValidationError::NegativeValue {
                field: "observed_at",
            });
        }

        Ok(Self {
            symbol: symbol.into(),
            price,
            observed_at,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn price(&self) -> Decimal {
        self.price
    }

    pub const fn observed_at(&self) -> i64 {
        self.observed_at
    }

    pub fn observed_at_utc(&self) -> Result<UtcDateTime, ValidationError> {
        UtcDateTime::from_unix_millis(self.observed_at)
    }
}

/// One entry of the upstream symbol search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub symbol: String,
    pub description: String,
    #[serde(rename = "displaySymbol", default, skip_serializing_if = "Option::is_none")]
    pub display_symbol: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Upstream symbol search payload, in response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub count: u64,
    #[serde(rename = "result", default)]
    pub matches: Vec<SearchMatch>,
}

impl SearchResult {
    /// First match whose symbol equals `symbol` exactly (case-sensitive).
    ///
    /// A zero `count` means no matches, whatever `result` holds.
    pub fn exact_match(&self, symbol: &str) -> Option<&SearchMatch> {
        if self.count == 0 {
            return None;
        }
        self.matches.iter().find(|entry| entry.symbol == symbol)
    }
}

/// Outcome of a company-name lookup that keeps "not found" apart from failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "name", rename_all = "snake_case")]
pub enum NameLookup {
    Found(String),
    NotFound,
}

impl NameLookup {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Found(name) => Some(name),
            Self::NotFound => None,
        }
    }
}
