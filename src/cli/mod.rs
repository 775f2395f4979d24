//! CLI module
//!
//! Command-line interface for paging record files.
//!
//! # Commands
//!
//! - `view` - Load a JSON array of records and print one page with its navigation bar

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, ViewArgs};
pub use runner::{navigation_bar, Runner};
