//! Search API method names and query types.

use serde::Serialize;

/// Stories ordered by recency, newest first.
pub const SEARCH_BY_DATE: &str = "search_by_date";

/// Tag filter used when none is configured.
pub const DEFAULT_TAGS: &str = "story";

/// Query string for search_by_date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchByDateQuery<'a> {
    pub tags: &'a str,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u32>,
}
