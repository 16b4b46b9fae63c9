//! HTTP client for the arXiv export API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use paperscout_core::{PaperSource, RetrievedPaper};

use crate::feed::parse_feed;

/// arXiv client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArxivConfig {
    /// Export API endpoint.
    #[serde(default = "ArxivConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds).
    #[serde(default = "ArxivConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header.
    #[serde(default = "ArxivConfig::default_user_agent")]
    pub user_agent: String,
}

impl ArxivConfig {
    fn default_base_url() -> String {
        "https://export.arxiv.org/api/query".to_string()
    }

    const fn default_timeout() -> u64 {
        30
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; paperscout/0.1)".to_string()
    }
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Thin wrapper around `reqwest::Client` for query requests.
///
/// One request per scrape, results sorted by submission date server-side.
/// Failed requests are reported, not retried.
pub struct ArxivClient {
    client: Client,
    config: ArxivConfig,
}

impl ArxivClient {
    pub fn new(config: ArxivConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Result<String> {
        debug!("arXiv search query: {query}");
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("search_query", query),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()
            .await
            .context("arXiv request failed")?
            .error_for_status()
            .context("arXiv returned an error status")?;

        response
            .text()
            .await
            .context("Failed to read arXiv response body")
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn recent_papers(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RetrievedPaper>> {
        let body = self.fetch(query, max_results).await?;
        let papers = parse_feed(&body).context("Failed to parse arXiv Atom feed")?;
        info!("Retrieved {} papers from arXiv", papers.len());
        Ok(papers)
    }
}
