//! Story records and search pages.
//!
//! A [`Story`] is one record returned by the search endpoint. Only the fields
//! the listing needs are typed; everything else is carried along untouched so
//! the details view can show the raw record.

mod page;
mod record;

pub use page::SearchPage;
pub use record::Story;
