//! The listing controller.
//!
//! Owns a page cursor, the accumulated stories, the filter text and the poll
//! timer for one active list screen.

mod controller;
mod state;
mod timer;


pub use controller::{DEFAULT_POLL_INTERVAL, FetchOutcome, ListingConfig, ListingController};
pub use state::{ListingState, ListingStatus, Phase};
