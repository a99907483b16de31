use crate::core::Fetcher;
use crate::utils::error::{CatError, Result};
use reqwest::Client;
use std::error::Error as StdError;
use url::Url;

/// GETs a URL and returns the body as text. Uses the client's default
/// timeout and redirect policy.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |message: String| CatError::FetchError {
            url: url.to_string(),
            message,
        };

        let parsed = Url::parse(url).map_err(|e| fetch_error(format!("Invalid URL: {}", e)))?;

        tracing::debug!("Making GET request to: {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| fetch_error(error_chain(&e)))?;

        tracing::debug!("Response status: {}", response.status());
        let response = response
            .error_for_status()
            .map_err(|e| fetch_error(error_chain(&e)))?;

        response.text().await.map_err(|e| fetch_error(error_chain(&e)))
    }
}

// reqwest keeps the interesting part (refused, dns, tls) in the source chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
