//! Single page command implementation.

use anyhow::{Context, Result};
use clap::Args;

use hnfeed_core::StorySource;
use hnfeed_core::filter::StoryFilter;
use hnfeed_http::HttpStorySource;

use crate::config::SourceArgs;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Zero-based page to fetch
    #[arg(long, default_value_t = 0)]
    pub page: u32,

    /// Only show stories whose title or author contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Print each story as a JSON line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PageArgs, source: SourceArgs) -> Result<()> {
    let source = HttpStorySource::new(source.search_config()?)
        .context("Failed to create story source")?;

    let result = source
        .fetch_page(args.page)
        .await
        .with_context(|| format!("Failed to fetch page {}", args.page))?;

    let filter = StoryFilter::new(args.filter.as_deref().unwrap_or_default());
    let stories = filter.apply(&result.hits);

    if stories.is_empty() {
        output::note("No stories found.");
        return Ok(());
    }

    for (index, story) in stories.iter().enumerate() {
        if args.json {
            output::json(story)?;
        } else {
            println!("{}", render::story_entry(index, story));
            println!();
        }
    }

    if let Some(total) = result.nb_pages {
        output::note(&format!("Page: {} of {}", args.page, total));
    }

    Ok(())
}
