//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page, search and sort JSON record files from the command line
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a record file
    View(ViewArgs),
}

/// Arguments of the `view` command
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Data file holding a JSON array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// Search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep the records that do not match the search
    #[arg(long, requires = "search")]
    pub exclude: bool,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Records per page (must be one of the configured limit options)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Page to show
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
