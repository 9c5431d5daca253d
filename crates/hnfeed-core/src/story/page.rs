//! Search response payload.

use serde::{Deserialize, Serialize};

use super::Story;

/// One page of search results.
///
/// Only `hits` is required. The pagination metadata is informational; the
/// listing controller tracks its own cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// The stories on this page, newest first.
    pub hits: Vec<Story>,

    /// Zero-based index of this page, as reported by the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Total number of pages available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_pages: Option<u32>,

    /// Page size used by the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u32>,

    /// Total number of matching stories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_hits: Option<u64>,
}

impl SearchPage {
    /// Create a page holding just `hits`.
    pub fn from_hits(hits: Vec<Story>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }
}
