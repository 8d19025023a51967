//! Behavior tests for quote fetching.
//!
//! These tests drive `QuoteClient::fetch_quote` against a scripted transport
//! and check what the caller observes: the quote, or a typed error.

mod support;

use std::str::FromStr;

use finquote_core::{ClientError, HttpError, ValidationError};
use rust_decimal::Decimal;

use support::{client_with, ScriptedHttpClient, BASE_URL, TOKEN};

// =============================================================================
// Quote: Valid Response Handling
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_price_and_time_quote_carries_both() {
    // Given: The quote endpoint reports c=123.45 at t=1700000000
    let transport = ScriptedHttpClient::responding(200, r#"{"c":123.45,"t":1700000000}"#);
    let client = client_with(transport.clone());

    // When: A quote is fetched
    let quote = client.fetch_quote("AAPL").await.expect("quote should parse");

    // Then: Price is exact and the timestamp is converted to milliseconds
    assert_eq!(quote.symbol(), "AAPL");
    assert_eq!(quote.price(), Decimal::from_str("123.45").expect("decimal"));
    assert_eq!(quote.observed_at(), 1_700_000_000_000);
}

#[tokio::test]
async fn when_upstream_sends_full_finnhub_payload_extra_fields_are_ignored() {
    let body = r#"{"c":189.7,"d":1.2,"dp":0.64,"h":190.1,"l":187.9,"o":188.0,"pc":188.5,"t":1700000000}"#;
    let client = client_with(ScriptedHttpClient::responding(200, body));

    let quote = client.fetch_quote("AAPL").await.expect("quote should parse");

    assert_eq!(quote.price(), Decimal::from_str("189.7").expect("decimal"));
    assert_eq!(quote.observed_at(), 1_700_000_000_000);
}

#[tokio::test]
async fn when_price_is_an_integer_quote_still_parses() {
    // Finnhub reports unknown tickers as all zeros.
    let client = client_with(ScriptedHttpClient::responding(200, r#"{"c":0,"t":0}"#));

    let quote = client.fetch_quote("ZZZZ").await.expect("quote should parse");

    assert_eq!(quote.price(), Decimal::ZERO);
    assert_eq!(quote.observed_at(), 0);
}

#[tokio::test]
async fn symbol_is_passed_through_unchanged() {
    let transport = ScriptedHttpClient::responding(200, r#"{"c":1,"t":1}"#);
    let client = client_with(transport.clone());

    let quote = client.fetch_quote("brk.b").await.expect("quote should parse");

    assert_eq!(quote.symbol(), "brk.b");
    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/quote?symbol=brk.b&token={TOKEN}")
    );
}

// =============================================================================
// Quote: Upstream Failures
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_non_success_status_error_carries_it() {
    for (symbol, status) in [("AAPL", 401_u16), ("MSFT", 429), ("X", 500), ("GOOG", 302)] {
        let client = client_with(ScriptedHttpClient::responding(status, r#"{"error":"nope"}"#));

        let error = client.fetch_quote(symbol).await.expect_err("must fail");

        assert_eq!(error, ClientError::UpstreamRequest { status_code: status });
        assert_eq!(error.code(), "quote.upstream_status");
    }
}

#[tokio::test]
async fn when_transport_fails_error_is_surfaced_without_retry() {
    let transport = ScriptedHttpClient::failing(HttpError::new("connection failed: refused"));
    let client = client_with(transport.clone());

    let error = client.fetch_quote("AAPL").await.expect_err("must fail");

    assert!(matches!(error, ClientError::Transport(_)));
    assert!(error.retryable());
    assert_eq!(transport.recorded_requests().len(), 1, "no retries expected");
}

// =============================================================================
// Quote: Malformed Responses
// =============================================================================

#[tokio::test]
async fn when_price_is_missing_fetch_fails_instead_of_defaulting() {
    let client = client_with(ScriptedHttpClient::responding(200, r#"{"t":1700000000}"#));

    let error = client.fetch_quote("AAPL").await.expect_err("must fail");

    assert!(matches!(error, ClientError::MalformedResponse { .. }));
    assert!(!error.retryable());
}

#[tokio::test]
async fn when_timestamp_is_missing_fetch_fails() {
    let client = client_with(ScriptedHttpClient::responding(200, r#"{"c":123.45}"#));

    let error = client.fetch_quote("AAPL").await.expect_err("must fail");

    assert!(matches!(error, ClientError::MalformedResponse { .. }));
}

#[tokio::test]
async fn when_fields_have_wrong_kind_fetch_fails() {
    for body in [
        r#"{"c":"123.45","t":1700000000}"#,
        r#"{"c":null,"t":1700000000}"#,
        r#"{"c":123.45,"t":"yesterday"}"#,
        r#"not json"#,
        r#"[]"#,
    ] {
        let client = client_with(ScriptedHttpClient::responding(200, body));

        let error = client.fetch_quote("AAPL").await.expect_err("must fail");

        assert!(
            matches!(error, ClientError::MalformedResponse { .. }),
            "body {body} should be malformed, got {error:?}"
        );
    }
}

#[tokio::test]
async fn when_timestamp_overflows_milliseconds_fetch_fails() {
    let body = format!(r#"{{"c":1.0,"t":{}}}"#, i64::MAX);
    let client = client_with(ScriptedHttpClient::responding(200, &body));

    let error = client.fetch_quote("AAPL").await.expect_err("must fail");

    assert!(matches!(error, ClientError::MalformedResponse { .. }));
}

#[tokio::test]
async fn when_price_is_negative_fetch_fails() {
    let client = client_with(ScriptedHttpClient::responding(200, r#"{"c":-3.5,"t":1}"#));

    let error = client.fetch_quote("AAPL").await.expect_err("must fail");

    assert!(matches!(error, ClientError::MalformedResponse { .. }));
}

// =============================================================================
// Quote: Input Handling
// =============================================================================

#[tokio::test]
async fn when_symbol_is_empty_no_request_is_sent() {
    let transport = ScriptedHttpClient::responding(200, r#"{"c":1,"t":1}"#);
    let client = client_with(transport.clone());

    let error = client.fetch_quote("").await.expect_err("must fail");

    assert_eq!(error, ClientError::Validation(ValidationError::EmptySymbol));
    assert!(transport.recorded_requests().is_empty());
}

#[tokio::test]
async fn request_carries_configured_timeout_and_json_accept_header() {
    let transport = ScriptedHttpClient::responding(200, r#"{"c":1,"t":1}"#);
    let client = client_with(transport.clone());

    client.fetch_quote("AAPL").await.expect("quote should parse");

    let request = &transport.recorded_requests()[0];
    assert_eq!(request.timeout_ms, client.config().timeout_ms());
    assert_eq!(
        request.headers.get("accept").map(String::as_str),
        Some("application/json")
    );
}
