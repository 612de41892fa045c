use crate::core::Fetch;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Plain HTTP transport. No retries, no timeouts; an optional artificial
/// latency can be added to make in-flight behavior observable in tests.
pub struct JsonFetcher {
    client: Client,
    latency: Option<Duration>,
}

impl JsonFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            latency: None,
        }
    }

    /// Delays every response by `latency` after the body has arrived.
    pub fn new_with_latency(latency: Duration) -> Self {
        Self {
            client: Client::new(),
            latency: Some(latency),
        }
    }
}

impl Default for JsonFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for JsonFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("Response status: {}", response.status());
        let body = response.error_for_status()?.text().await?;

        if let Some(delay) = self.latency {
            tokio::time::sleep(delay).await;
        }

        Ok(body)
    }
}

/// Fetches `url` and parses the response body as JSON.
///
/// Every failure mode (connect, HTTP status, body read, parse) is caught
/// here, logged once, and collapses to `None`; callers never see the
/// underlying error.
pub async fn fetch_json<F: Fetch>(fetcher: &F, url: &str) -> Option<Value> {
    match try_fetch_json(fetcher, url).await {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!("fetch_json failed: {}", e);
            None
        }
    }
}

async fn try_fetch_json<F: Fetch>(fetcher: &F, url: &str) -> Result<Value> {
    let body = fetcher.get(url).await?;
    let json: Value = serde_json::from_str(&body)?;
    Ok(json)
}
