//! Command implementations for the pl CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod list;
pub mod options;

use std::path::PathBuf;

use portfolio_view::{Dataset, DatasetStore};
use tracing::debug;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Dataset file error.
    #[error("dataset error: {0}")]
    Store(#[from] portfolio_view::DatasetStoreError),

    /// Invalid value for a model field.
    #[error("{0}")]
    Model(#[from] portfolio_model::error::Error),

    /// A filter argument did not resolve to a known value.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Dataset file given on the command line or via `PL_DATA`.
    pub data_path: Option<PathBuf>,
    /// Maximum description width in the table.
    pub description_width: usize,
}

/// Default width of the description column.
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 32;

impl CommandContext {
    /// Creates a new command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless `--no-color` is given, `NO_COLOR` is set, or the
    /// config sets `output.color = false`.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let data_path = cli
            .data
            .clone()
            .or_else(|| config.data_path.as_ref().map(PathBuf::from));

        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
            data_path,
            description_width: config
                .output
                .description_width
                .unwrap_or(DEFAULT_DESCRIPTION_WIDTH),
        }
    }

    /// Returns the dataset store for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if no path was given and the default data directory
    /// cannot be determined.
    pub fn store(&self) -> Result<DatasetStore> {
        match &self.data_path {
            Some(path) => Ok(DatasetStore::with_path(path)),
            None => Ok(DatasetStore::new()?),
        }
    }

    /// Loads the dataset for this invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset file is missing, unreadable or invalid.
    pub fn load_dataset(&self) -> Result<Dataset> {
        let store = self.store()?;
        debug!(path = %store.path().display(), "loading dataset");
        Ok(store.load()?)
    }
}
