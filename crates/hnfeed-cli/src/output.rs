//! Terminal output helpers.
//!
//! Stories and headings go to stdout. Notes and errors go to stderr so that
//! `page --json` output stays one record per line.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dimmed status line to stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a dimmed heading after a blank line.
pub fn heading(text: &str) {
    println!();
    println!("{}", text.dimmed());
}

/// Print a value as one line of compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
