//! Subcommand implementations.

pub mod page;
pub mod watch;
