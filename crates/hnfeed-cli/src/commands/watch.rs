//! Watch command implementation.
//!
//! Runs a listing controller against the search endpoint and acts as its
//! presentation layer: every state change re-renders the filtered list, lines
//! typed on stdin become the filter text, and `:open N` dumps a story.
//!
//! Closing stdin only stops input handling. The list keeps refreshing until
//! `:quit`, Ctrl-C or the `--pages` limit.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use hnfeed_core::{ListingConfig, ListingController, NavigationRequest, StorySource};
use hnfeed_http::HttpStorySource;

use crate::config::SourceArgs;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Initial filter text
    #[arg(long)]
    pub filter: Option<String>,

    /// Seconds between refreshes
    #[arg(long, env = "HNFEED_INTERVAL_SECS", default_value_t = 10)]
    pub interval_secs: u64,

    /// Maximum number of stories to show
    #[arg(long, default_value_t = 20)]
    pub limit: usize,

    /// Exit once this many pages have been fetched
    #[arg(long)]
    pub pages: Option<u32>,
}

/// A line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Filter(String),
    Open(usize),
    Quit,
    Invalid(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Input::Filter(line.trim_end_matches('\r').to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("q" | "quit"), None) => Input::Quit,
            (Some("clear"), None) => Input::Filter(String::new()),
            (Some("o" | "open"), Some(index)) => match index.parse() {
                Ok(index) => Input::Open(index),
                Err(_) => Input::Invalid(format!("not a story number: {}", index)),
            },
            _ => Input::Invalid(format!("unknown command: {}", trimmed)),
        }
    }
}

pub async fn run(args: WatchArgs, source: SourceArgs) -> Result<()> {
    let source = HttpStorySource::new(source.search_config()?)
        .context("Failed to create story source")?;

    output::note(&format!("Watching {}", source.endpoint()));
    output::note("Type to filter, ':open N' for details, ':quit' or Ctrl+C to stop.");

    watch(source, args).await
}

async fn watch<S>(source: S, args: WatchArgs) -> Result<()>
where
    S: StorySource + 'static,
{
    let (navigator, mut navigation) = mpsc::unbounded_channel::<NavigationRequest>();
    let controller = ListingController::initialize(
        source,
        navigator,
        ListingConfig {
            poll_interval: Duration::from_secs(args.interval_secs.max(1)),
        },
    );

    if let Some(filter) = &args.filter {
        controller.set_filter_text(filter.as_str());
    }

    // The first page may already have landed, so render once up front.
    let mut status = controller.subscribe();
    status.mark_changed();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reading = true;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                let page = status.borrow_and_update().page;
                show_list(&controller, args.limit);

                if args.pages.is_some_and(|pages| page >= pages) {
                    break;
                }
            }
            line = lines.next_line(), if reading => {
                match line.context("Failed to read input")? {
                    Some(line) => match Input::parse(&line) {
                        Input::Filter(text) => controller.set_filter_text(text),
                        Input::Open(index) => {
                            if !controller.activate_visible(index) {
                                output::error(&format!("No story [{}] in the current list", index));
                            }
                        }
                        Input::Quit => break,
                        Input::Invalid(reason) => output::error(&reason),
                    },
                    None => {
                        debug!("Input closed, continuing without it");
                        reading = false;
                    }
                }
            }
            Some(request) = navigation.recv() => {
                show_details(&request)?;
            }
            _ = &mut ctrl_c => {
                break;
            }
        }
    }

    controller.teardown();
    Ok(())
}

fn show_list<S, N>(controller: &ListingController<S, N>, limit: usize) {
    let state = controller.snapshot();
    let visible = state.derived_view();

    output::heading(&format!(
        "-- {} stories, {} shown, {} pages loaded{} --",
        state.records.len(),
        visible.len().min(limit),
        state.page,
        if state.filter_text.is_empty() {
            String::new()
        } else {
            format!(", filter \"{}\"", state.filter_text)
        }
    ));

    for (index, story) in visible.iter().take(limit).enumerate() {
        println!("{}", render::story_entry(index, story));
    }
}

fn show_details(request: &NavigationRequest) -> Result<()> {
    output::heading(&format!("-- Details: {} --", request.story().title));
    output::json(request.story())
}
