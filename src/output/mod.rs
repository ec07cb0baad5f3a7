//! Output formatting for subnet summaries.
//!
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::{csv_header, csv_row};
pub use json::summary_json;
pub use terminal::{format_field, format_report};
