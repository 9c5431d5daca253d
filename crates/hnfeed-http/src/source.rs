//! HTTP-backed story source.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use hnfeed_core::{Result, SearchPage, StorySource};

use crate::client::SearchClient;
use crate::endpoint::EndpointUrl;
use crate::endpoints::{DEFAULT_TAGS, SEARCH_BY_DATE, SearchByDateQuery};

/// Settings for [`HttpStorySource`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API base URL.
    pub endpoint: EndpointUrl,
    /// Value of the `tags` query parameter.
    pub tags: String,
    /// Page size to ask for; the endpoint default when `None`.
    pub hits_per_page: Option<u32>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointUrl::default(),
            tags: DEFAULT_TAGS.to_string(),
            hits_per_page: None,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Fetches story pages from the search-by-date endpoint.
#[derive(Debug, Clone)]
pub struct HttpStorySource {
    client: SearchClient,
    tags: String,
    hits_per_page: Option<u32>,
}

impl HttpStorySource {
    /// Create a source from `config`.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = SearchClient::new(config.endpoint, config.timeout)?;
        Ok(Self {
            client,
            tags: config.tags,
            hits_per_page: config.hits_per_page,
        })
    }

    /// Returns the endpoint this source reads from.
    pub fn endpoint(&self) -> &EndpointUrl {
        self.client.endpoint()
    }
}

#[async_trait]
impl StorySource for HttpStorySource {
    #[instrument(skip(self), fields(tags = %self.tags))]
    async fn fetch_page(&self, page: u32) -> Result<SearchPage> {
        let query = SearchByDateQuery {
            tags: &self.tags,
            page,
            hits_per_page: self.hits_per_page,
        };

        let result: SearchPage = self.client.query(SEARCH_BY_DATE, &query).await?;
        debug!(page, hits = result.hits.len(), "Fetched page");
        Ok(result)
    }
}
