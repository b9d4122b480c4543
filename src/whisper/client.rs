//! HTTP client for Wisdom Guild card pages.

use crate::config::Config;
use crate::whisper::models::card_url;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Trait for fetching card pages - enables mocking for tests.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetches the card page HTML for an English card name.
    async fn card_page(&self, card_name: &str) -> Result<String>;

    /// Returns the page URL a lookup for this name targets.
    fn card_url(&self, card_name: &str) -> String;
}

/// Wisdom Guild HTTP client with browser-like request headers.
///
/// Single attempt per call; retries are the caller's problem (and nobody's,
/// today).
pub struct WhisperClient {
    client: Client,
    base_url: String,
}

impl WhisperClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Performs a GET request and returns the body on a 2xx status.
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "ja,en;q=0.5")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl CardSource for WhisperClient {
    async fn card_page(&self, card_name: &str) -> Result<String> {
        let url = self.card_url(card_name);
        self.get(&url).await
    }

    fn card_url(&self, card_name: &str) -> String {
        card_url(&self.base_url, card_name)
    }
}
