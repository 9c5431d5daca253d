//! Source configuration from flags and environment.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use hnfeed_http::{DEFAULT_ENDPOINT, DEFAULT_TAGS, EndpointUrl, SearchConfig};

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Search API base URL
    #[arg(long, global = true, env = "HNFEED_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Tag filter sent with every search
    #[arg(long, global = true, env = "HNFEED_TAGS", default_value = DEFAULT_TAGS)]
    pub tags: String,

    /// Stories per page (endpoint default when unset)
    #[arg(long, global = true, env = "HNFEED_HITS_PER_PAGE")]
    pub hits_per_page: Option<u32>,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, global = true, env = "HNFEED_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl SourceArgs {
    pub fn search_config(&self) -> Result<SearchConfig> {
        let endpoint: EndpointUrl = self.endpoint.parse().context("Invalid endpoint URL")?;
        let timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));

        Ok(SearchConfig {
            endpoint,
            tags: self.tags.clone(),
            hits_per_page: self.hits_per_page,
            timeout,
        })
    }
}
