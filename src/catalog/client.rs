//! HTTP client for the catalog search endpoint using wreq for browser emulation.

use crate::catalog::models::{SearchRequest, SearchResponse};
use crate::config::Config;
use crate::error::{CrawlError, Result};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for catalog searches - enables mocking for tests.
#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Fetches one page of search results.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// Catalog HTTP client.
pub struct CatalogClient {
    client: Client,
    url: String,
    delay_ms: u64,
    delay_jitter_ms: u64,
}

impl CatalogClient {
    /// Creates a client for the endpoint configured in `api_url`.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).map_err(CrawlError::transport)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(CrawlError::transport)?;

        Ok(Self {
            client,
            url: config.api_url.clone(),
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
        })
    }

    /// POSTs a JSON body and returns the response text.
    async fn post(&self, body: Vec<u8>) -> Result<String> {
        self.delay().await;

        debug!("POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "application/json, text/plain, */*")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Content-Type", "application/json")
            .header("Origin", "https://jlcpcb.com")
            .header("Referer", "https://jlcpcb.com/parts")
            .body(body)
            .send()
            .await
            .map_err(CrawlError::transport)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.as_u16() == 429 || status.as_u16() == 503 {
            warn!("Rate limited ({}). Consider using a proxy or increasing delay.", status);
        }

        if !status.is_success() {
            return Err(CrawlError::Status { status: status.as_u16() });
        }

        response.text().await.map_err(CrawlError::transport)
    }

    /// Waits between requests when a delay is configured.
    async fn delay(&self) {
        if self.delay_ms == 0 && self.delay_jitter_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl CatalogSearch for CatalogClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        debug!(
            "Searching {:?} in {}/{} ({}), page {}",
            request.keyword,
            request.first_sort_name,
            request.second_sort_name,
            request.component_library_type,
            request.current_page
        );

        let body = serde_json::to_vec(request)?;
        let text = self.post(body).await?;

        Ok(serde_json::from_str(&text)?)
    }
}
