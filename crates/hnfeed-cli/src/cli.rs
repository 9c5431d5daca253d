//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{page::PageArgs, watch::WatchArgs};
use crate::config::SourceArgs;

/// Browse the newest stories from the HN search API.
#[derive(Parser, Debug)]
#[command(name = "hnfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Follow the newest stories, refreshing on a timer
    Watch(WatchArgs),

    /// Fetch and print a single page
    Page(PageArgs),
}
