use finquote_core::{ClientError, Quote, QuoteClient, UtcDateTime};
use log::warn;
use serde::Serialize;

use crate::cli::SymbolsArgs;
use crate::error::{client_exit_code, CliError};

use super::CommandResult;

#[derive(Debug, Serialize)]
struct QuoteResponseData {
    quotes: Vec<QuoteView>,
    errors: Vec<QuoteFailure>,
}

#[derive(Debug, Serialize)]
struct QuoteView {
    #[serde(flatten)]
    quote: Quote,
    observed_at_utc: Option<UtcDateTime>,
}

#[derive(Debug, Serialize)]
struct QuoteFailure {
    symbol: String,
    code: &'static str,
    message: String,
}

impl QuoteFailure {
    fn new(symbol: &str, error: &ClientError) -> Self {
        Self {
            symbol: symbol.to_owned(),
            code: error.code(),
            message: error.to_string(),
        }
    }
}

pub async fn run(args: &SymbolsArgs, client: &QuoteClient) -> Result<CommandResult, CliError> {
    let mut quotes = Vec::with_capacity(args.symbols.len());
    let mut errors = Vec::new();
    let mut exit_code: u8 = 0;

    for symbol in &args.symbols {
        match client.fetch_quote(symbol).await {
            Ok(quote) => {
                let observed_at_utc = match quote.observed_at_utc() {
                    Ok(ts) => Some(ts),
                    Err(error) => {
                        warn!("cannot render observed_at for '{symbol}': {error}");
                        None
                    }
                };
                quotes.push(QuoteView {
                    quote,
                    observed_at_utc,
                });
            }
            Err(error) => {
                exit_code = exit_code.max(client_exit_code(&error));
                errors.push(QuoteFailure::new(symbol, &error));
            }
        }
    }

    let data = serde_json::to_value(QuoteResponseData { quotes, errors })?;
    Ok(CommandResult::ok(data).with_exit_code(exit_code))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::commands::testing::routed_client;

    fn args(symbols: &[&str]) -> SymbolsArgs {
        SymbolsArgs {
            symbols: symbols.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn all_quotes_succeeding_exit_zero() {
        let client = routed_client(&[("symbol=AAPL", 200, r#"{"c":123.45,"t":1700000000}"#)]);

        let symbols = args(&["AAPL"]);
        let result = run(&symbols, &client).await.expect("command runs");

        assert_eq!(result.exit_code, 0);
        assert_eq!(
            result.data,
            json!({
                "quotes": [{
                    "symbol": "AAPL",
                    "price": "123.45",
                    "observed_at": 1_700_000_000_000_i64,
                    "observed_at_utc": "2023-11-14T22:13:20Z"
                }],
                "errors": []
            })
        );
    }

    #[tokio::test]
    async fn failed_symbols_are_collected_and_set_exit_code() {
        let client = routed_client(&[
            ("symbol=AAPL", 200, r#"{"c":1,"t":1}"#),
            ("symbol=MSFT", 503, "unavailable"),
        ]);

        let symbols = args(&["AAPL", "MSFT"]);
        let result = run(&symbols, &client).await.expect("command runs");

        assert_eq!(result.exit_code, 3);
        assert_eq!(result.data["quotes"].as_array().map(Vec::len), Some(1));
        let errors = result.data["errors"].as_array().expect("errors array");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["symbol"], "MSFT");
        assert_eq!(errors[0]["code"], "quote.upstream_status");
    }

    #[tokio::test]
    async fn exit_code_reflects_most_severe_failure() {
        let client = routed_client(&[
            ("symbol=AAPL", 500, ""),
            ("symbol=MSFT", 200, r#"{"t":1}"#),
        ]);

        let symbols = args(&["AAPL", "MSFT"]);
        let result = run(&symbols, &client).await.expect("command runs");

        assert_eq!(result.exit_code, 4);
        assert_eq!(result.data["errors"].as_array().map(Vec::len), Some(2));
        assert_eq!(result.data["errors"][1]["code"], "quote.malformed_response");
    }

    #[tokio::test]
    async fn unrenderable_timestamp_is_null() {
        let client = routed_client(&[("symbol=AAPL", 200, r#"{"c":1,"t":300000000000}"#)]);

        let symbols = args(&["AAPL"]);
        let result = run(&symbols, &client).await.expect("command runs");

        assert_eq!(result.exit_code, 0);
        assert!(result.data["quotes"][0]["observed_at_utc"].is_null());
        assert_eq!(result.data["quotes"][0]["observed_at"], 300_000_000_000_000_i64);
    }
}
