//! Page Fetcher
//!
//! One request to the upstream search endpoint per call. No retries.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::upstream::{Page, SearchResponse};

/// Largest page the search endpoint serves.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Fetches a single page of a channel's search results.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Requests the page identified by `page_token`, or the first page when None.
    async fn fetch_page(&self, channel_id: &str, page_token: Option<&str>) -> Result<Page>;
}

// == HTTP Page Fetcher ==
/// PageFetcher backed by the upstream HTTP search endpoint.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    strict_pages: bool,
}

impl HttpPageFetcher {
    /// Builds a fetcher from configuration.
    ///
    /// A missing API key is not an error here; every fetch reports it instead.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.search_endpoint.clone(),
            api_key: config.api_key.clone(),
            strict_pages: config.strict_pages,
        })
    }

    fn decode(&self, body: &str) -> Result<Page> {
        let response: SearchResponse = serde_json::from_str(body)
            .map_err(|e| ProxyError::MalformedResponse(e.to_string()))?;

        match response.items {
            Some(items) => Ok(Page {
                items,
                next_page_token: response.next_page_token,
            }),
            None if self.strict_pages => Err(ProxyError::MalformedResponse(
                "response has no items field".to_string(),
            )),
            None => {
                debug!("Upstream page has no items field, ending pagination");
                Ok(Page::default())
            }
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, channel_id: &str, page_token: Option<&str>) -> Result<Page> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ProxyError::Config("YouTube API key not loaded (set YT_API_KEY)".to_string())
        })?;

        let max_results = MAX_RESULTS_PER_PAGE.to_string();
        let mut query = vec![
            ("key", api_key),
            ("channelId", channel_id),
            ("part", "snippet,id"),
            ("order", "date"),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        debug!(channel_id, page_token, "Fetching upstream page");

        let response = self.client.get(&self.endpoint).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(channel_id, status = status.as_u16(), "Upstream returned an error status");
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        self.decode(&body)
    }
}
