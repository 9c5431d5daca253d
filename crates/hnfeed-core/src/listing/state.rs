//! Listing state and status.

use serde::Serialize;

use crate::filter::StoryFilter;
use crate::story::Story;

/// Lifecycle phase of a listing controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Timer armed, fetches permitted.
    Active,
    /// Torn down. Terminal.
    Inactive,
}

/// The state owned by one listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingState {
    /// Next page to request.
    pub page: u32,
    /// Every story fetched so far, in arrival order.
    pub records: Vec<Story>,
    /// Current filter text.
    pub filter_text: String,
}

impl ListingState {
    /// The records passing the current filter.
    pub fn derived_view(&self) -> Vec<&Story> {
        StoryFilter::new(&self.filter_text).apply(&self.records)
    }
}

/// Summary published after every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStatus {
    pub phase: Phase,
    pub page: u32,
    pub records: usize,
    /// Bumped whenever the filter text is set.
    pub filter_revision: u64,
}

impl ListingStatus {
    pub(crate) fn initial() -> Self {
        Self {
            phase: Phase::Active,
            page: 0,
            records: 0,
            filter_revision: 0,
        }
    }
}
