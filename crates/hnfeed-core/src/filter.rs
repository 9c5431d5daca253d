//! Text filter behind the derived view.
//!
//! Filtering is a linear scan recomputed on every read. There is no index.

use crate::story::Story;

/// A case-insensitive substring filter over title and author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    needle: String,
}

impl StoryFilter {
    /// Build a filter for `text`. Empty text matches everything.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Returns true if this filter lets every story through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if `story` passes the filter.
    pub fn matches(&self, story: &Story) -> bool {
        self.is_empty()
            || story.title.to_lowercase().contains(&self.needle)
            || story.author.to_lowercase().contains(&self.needle)
    }

    /// The subsequence of `stories` that passes, in order.
    pub fn apply<'a>(&self, stories: &'a [Story]) -> Vec<&'a Story> {
        stories.iter().filter(|story| self.matches(story)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn story(title: &str, author: &str) -> Story {
        Story::new(title, author, Utc.with_ymd_and_hms(2023, 1, 1, 7, 0, 0).unwrap())
    }

    fn stories() -> Vec<Story> {
        vec![
            story("Title Text", "Peter Parker"),
            story("Show HN: a Rust parser", "ferris"),
            story("Why SQLite", "drh"),
            story("", "peterson"),
        ]
    }

    #[test]
    fn empty_filter_is_identity() {
        let all = stories();
        let view = StoryFilter::new("").apply(&all);
        assert_eq!(view.len(), all.len());
        assert!(view.iter().zip(&all).all(|(a, b)| *a == b));
    }

    #[test]
    fn matches_author_case_insensitively() {
        let all = stories();
        let view = StoryFilter::new("PETER").apply(&all);
        let authors: Vec<_> = view.iter().map(|s| s.author.as_str()).collect();
        assert_eq!(authors, vec!["Peter Parker", "peterson"]);
    }

    #[test]
    fn matches_title() {
        let all = stories();
        let view = StoryFilter::new("rust").apply(&all);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Show HN: a Rust parser");
    }

    #[test]
    fn no_match_is_empty() {
        let all = stories();
        assert!(StoryFilter::new("Jest").apply(&all).is_empty());
    }

    #[test]
    fn partition_holds() {
        let all = stories();
        let filter = StoryFilter::new("te");
        let view = filter.apply(&all);

        for story in &all {
            let has = story.title.to_lowercase().contains("te")
                || story.author.to_lowercase().contains("te");
            assert_eq!(view.contains(&story), has, "{:?}", story.title);
        }
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let one = story("same", "a");
        let all = vec![one.clone(), story("other", "b"), one];
        let view = StoryFilter::new("same").apply(&all);
        assert_eq!(view.len(), 2);
    }
}
