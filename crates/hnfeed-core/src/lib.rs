//! hnfeed-core - story types and the polling listing controller.
//!
//! The [`ListingController`] fetches pages of stories from a [`StorySource`],
//! accumulates them, exposes a filtered view and routes activations to a
//! [`Navigator`].
//!
//! # Example
//!
//! ```no_run
//! use hnfeed_core::{ListingConfig, ListingController, NavigationRequest, StorySource};
//! use tokio::sync::mpsc;
//!
//! # async fn example(source: impl StorySource + 'static) {
//! let (navigator, mut requests) = mpsc::unbounded_channel::<NavigationRequest>();
//! let controller = ListingController::initialize(source, navigator, ListingConfig::default());
//!
//! controller.set_filter_text("rust");
//! for story in controller.derived_view() {
//!     println!("{} by {}", story.title, story.author);
//! }
//!
//! controller.teardown();
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod listing;
pub mod story;
pub mod traits;

pub use error::Error;
pub use listing::{
    DEFAULT_POLL_INTERVAL, FetchOutcome, ListingConfig, ListingController, ListingState,
    ListingStatus, Phase,
};
pub use story::{SearchPage, Story};
pub use traits::{NavigationRequest, Navigator, Screen, StorySource};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
