//! Story list and details rendering.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, TimeZone};
use colored::Colorize;

use hnfeed_core::Story;

/// Format a timestamp like `January 1st 2023, 7:00:00 am`.
pub fn format_created_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day = at.day();
    format!(
        "{} {}{} {}, {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.format("%Y"),
        at.format("%-I:%M:%S %P")
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Tags as displayed under a story: each one followed by `", "`.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter().map(|tag| format!("{}, ", tag)).collect()
}

/// Render one list entry. `index` is the position in the visible list.
pub fn story_entry(index: usize, story: &Story) -> String {
    let mut lines = vec![
        format!("{} {}", format!("[{}]", index).dimmed(), story.title.bold()),
        format!("    {}", story.author.bold()),
    ];

    if let Some(url) = &story.url {
        lines.push(format!("    {}", url.blue().underline()));
    }

    let created = story.created_at.with_timezone(&Local);
    lines.push(format!("    {}", format_created_at(&created)));

    if !story.tags.is_empty() {
        lines.push(format!("    {}", format_tags(&story.tags).italic()));
    }

    lines.join("\n")
}
