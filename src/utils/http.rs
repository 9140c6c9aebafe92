// src/utils/http.rs

//! HTTP fetching and request pacing.

use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Source of raw page text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the page at `url` and return its decoded text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// `Fetcher` backed by a `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::Client,
    encoding: String,
}

impl HttpFetcher {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            encoding: config.encoding.clone(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(url, format!("HTTP {status}")));
        }
        // Falls back to the configured encoding when no charset is declared
        Ok(response.text_with_charset(&self.encoding).await?)
    }
}

/// Delay to wait after requesting `key`, inside the configured range.
///
/// The position inside the range comes from a SHA-256 digest of the key, so
/// requests are spread out but the delay for a given URL is reproducible.
pub fn request_delay(config: &CrawlerConfig, key: &str) -> Duration {
    let min = config.request_delay_min_ms;
    let max = config.request_delay_max_ms.max(min);
    let span = max - min;
    if span == 0 {
        return Duration::from_millis(min);
    }

    let digest = Sha256::digest(key.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    let offset = u64::from_be_bytes(bytes) % (span + 1);
    Duration::from_millis(min + offset)
}

/// Sleep for `delay`, skipping zero durations.
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_delay_within_range() {
        let config = CrawlerConfig::default();
        for i in 0..50 {
            let url = format!("https://www.ikpec.or.kr/m2/sub2_1_1.asp?DecideNo={i}");
            let delay = request_delay(&config, &url);
            assert!(delay >= Duration::from_millis(config.request_delay_min_ms));
            assert!(delay <= Duration::from_millis(config.request_delay_max_ms));
        }
    }

    #[test]
    fn test_request_delay_is_reproducible() {
        let config = CrawlerConfig::default();
        let a = request_delay(&config, "https://example.com/a");
        assert_eq!(a, request_delay(&config, "https://example.com/a"));
    }

    #[test]
    fn test_request_delay_zero_span() {
        let config = CrawlerConfig {
            request_delay_min_ms: 0,
            request_delay_max_ms: 0,
            ..CrawlerConfig::default()
        };
        assert_eq!(request_delay(&config, "x"), Duration::ZERO);
    }

    #[test]
    fn test_create_client() {
        assert!(create_client(&CrawlerConfig::default()).is_ok());
    }
}
