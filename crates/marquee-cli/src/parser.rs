//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for browsing the YTS movie catalog.
///
/// Global options configure the catalog client and apply to every
/// subcommand.
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse the YTS movie catalog from the terminal or the browser")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Override the catalog API root (must be https)
    #[arg(long = "base-url", env = "MARQUEE_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Movies per page (clamped to 1-50)
    #[arg(long = "page-size", env = "MARQUEE_PAGE_SIZE", global = true)]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
