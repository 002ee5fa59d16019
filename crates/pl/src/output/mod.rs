//! Output formatting utilities for the pl CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`projects`] - Filtered project rows (list)
//! - [`options`] - Selector choices (options)
//! - [`helpers`] - Common formatting utilities (truncation, status, colors)

pub mod helpers;
mod options;
mod projects;

pub use options::{format_options_json, format_options_table};
pub use projects::{format_rows_json, format_rows_table};
