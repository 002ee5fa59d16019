//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the pl CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// pl - Browse and filter a project portfolio
#[derive(Parser, Debug)]
#[command(name = "pl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Dataset file (default: from config, then the XDG data directory)
    #[arg(long, global = true, env = "PL_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects, optionally filtered
    #[command(alias = "l")]
    List {
        /// Filter by status ("all", "Planning", "Active", "On Hold", "Done", "Cancelled")
        #[arg(short = 'S', long)]
        status: Option<String>,

        /// Filter by department name or ID ("all" for any)
        #[arg(short, long)]
        department: Option<String>,

        /// Filter by project lead name or ID ("all" for any)
        #[arg(short, long)]
        lead: Option<String>,

        /// Case-insensitive substring of the project name
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the values each filter accepts
    #[command(alias = "o")]
    Options,

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
