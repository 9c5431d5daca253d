//! Story source trait.

use async_trait::async_trait;

use crate::Result;
use crate::story::SearchPage;

/// Where pages of stories come from.
///
/// Implementations fetch one page per call, newest stories first. Any failure
/// (transport, non-success status, malformed payload) is reported as an
/// [`Error`](crate::Error); the caller decides what to do with it.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Fetch the zero-based page `page`.
    async fn fetch_page(&self, page: u32) -> Result<SearchPage>;
}

#[async_trait]
impl<T> StorySource for std::sync::Arc<T>
where
    T: StorySource + ?Sized,
{
    async fn fetch_page(&self, page: u32) -> Result<SearchPage> {
        (**self).fetch_page(page).await
    }
}
