//! Seams between the listing controller and its collaborators.

mod navigator;
mod source;

pub use navigator::{DetailsParams, NavigationRequest, Navigator, Screen};
pub use source::StorySource;
