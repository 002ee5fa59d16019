use clap::Parser;
use std::process::ExitCode;
use tracing::warn;

mod cli;
mod commands;
mod logging;
mod output;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    logging::init(cli.verbose, cli.quiet, logging::stderr_colors(cli.no_color));

    // `config path` must work even when the config file does not parse.
    let config = match &cli.command {
        Some(Commands::Config { .. }) => load_config().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }),
        _ => load_config()?,
    };
    let ctx = CommandContext::new(cli, &config);

    match &cli.command {
        Some(Commands::List {
            status,
            department,
            lead,
            search,
        }) => {
            let opts = commands::list::ListOptions {
                status: status.clone(),
                department: department.clone(),
                lead: lead.clone(),
                search: search.clone(),
            };
            commands::list::execute(&ctx, &opts)
        }
        None => commands::list::execute(&ctx, &commands::list::ListOptions::default()),
        Some(Commands::Options) => commands::options::execute(&ctx),
        Some(Commands::Config { command }) => dispatch_config(&ctx, command),
        Some(Commands::Completions { shell }) => {
            commands::completions::execute(shell).map_err(CommandError::Io)
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> commands::Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "DATASET_ERROR",
        CommandError::Model(_) | CommandError::InvalidFilter(_) => "INVALID_FILTER",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Model(_) | CommandError::InvalidFilter(_) | CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Store(_) => 4,
        CommandError::Config(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_view::DatasetStoreError;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            error_code(&CommandError::InvalidFilter("x".into())),
            "INVALID_FILTER"
        );
        assert_eq!(
            error_code(&CommandError::Model(
                portfolio_model::error::Error::unknown_status("x")
            )),
            "INVALID_FILTER"
        );
        assert_eq!(error_code(&CommandError::Config("x".into())), "CONFIG_ERROR");
        assert_eq!(
            error_code(&CommandError::Store(DatasetStoreError::NoDataDir)),
            "DATASET_ERROR"
        );
    }

    #[test]
    fn test_exit_statuses() {
        assert_eq!(exit_status(&CommandError::InvalidFilter("x".into())), 1);
        assert_eq!(
            exit_status(&CommandError::Io(std::io::Error::other("boom"))),
            3
        );
        assert_eq!(exit_status(&CommandError::Store(DatasetStoreError::NoDataDir)), 4);
        assert_eq!(exit_status(&CommandError::Config("x".into())), 5);
    }
}
