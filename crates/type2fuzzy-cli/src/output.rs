//! Terminal rendering of reports and status lines

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt::Display;

/// Outcome marker printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
}

impl Status {
    fn marker(self) -> ColoredString {
        match self {
            Status::Done => "✓".green().bold(),
            Status::Failed => "✗".red().bold(),
        }
    }
}

/// Failures go to stderr so that stdout stays parseable.
pub fn print_status(status: Status, message: &str) {
    match status {
        Status::Done => println!("{} {}", status.marker(), message),
        Status::Failed => eprintln!("{} {}", status.marker(), message),
    }
}

/// Section title underlined to its own width.
pub fn print_header(title: &str) {
    let rule = "=".repeat(title.chars().count());
    println!("\n{}\n{}", title.cyan().bold(), rule.cyan());
}

pub fn print_field(label: &str, value: impl Display) {
    println!("  {} {}", format!("{}:", label).yellow(), value);
}

/// A set representation, or `empty_note` as a field when there is nothing to show.
pub fn print_set(set: impl Display, is_empty: bool, empty_note: &str) {
    if is_empty {
        print_field("Set", empty_note.dimmed());
    } else {
        println!("{}", set.to_string().trim_end());
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

pub fn enable_colors(enabled: bool) {
    colored::control::set_override(enabled);
}
