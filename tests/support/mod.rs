//! Scripted in-memory transport shared by the behavior tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use finquote_core::{ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, QuoteClient};

pub const BASE_URL: &str = "https://finnhub.example.test/api/v1";
pub const TOKEN: &str = "test-token";

/// Returns the same scripted outcome for every request and records what was sent.
#[derive(Debug)]
pub struct ScriptedHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: HttpError) -> Arc<Self> {
        Arc::new(Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn client_with(transport: Arc<ScriptedHttpClient>) -> QuoteClient {
    let config = ClientConfig::new(TOKEN)
        .and_then(|config| config.with_base_url(BASE_URL))
        .expect("test config should be valid");
    QuoteClient::with_http_client(config, transport)
}
