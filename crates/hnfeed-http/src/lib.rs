//! hnfeed-http - HTTP-backed story source.
//!
//! Fetches pages from the HN search-by-date endpoint with `reqwest`.

mod client;
mod endpoint;
mod endpoints;
mod source;

pub use client::SearchClient;
pub use endpoint::{DEFAULT_ENDPOINT, EndpointUrl};
pub use endpoints::{DEFAULT_TAGS, SEARCH_BY_DATE};
pub use source::{HttpStorySource, SearchConfig};
