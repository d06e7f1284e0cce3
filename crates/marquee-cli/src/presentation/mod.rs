//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no fetching and no state transitions
//! - Formatters return `String`s; `print_*` helpers are thin wrappers

pub mod movie_display;
pub mod tables;

// Re-export commonly used items
pub use movie_display::{
    controls_line, detail_lines, movie_row, print_detail, print_page, table_header,
};
pub use tables::{print_separator, truncate_string};
