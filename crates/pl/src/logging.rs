//! Diagnostic logging for the pl CLI.
//!
//! Events go to stderr so they never mix with table or JSON output on stdout.
//! `RUST_LOG` takes precedence over the verbosity flags.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `--verbose` is given.
const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "warn,pl=debug,portfolio_view=debug,portfolio_model=debug";

/// Returns the filter directive for the given verbosity.
fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Whether diagnostics on stderr may use ANSI colors.
///
/// Decided from `--no-color` and `NO_COLOR` alone, since logging starts
/// before the config file is read.
pub fn stderr_colors(no_color_flag: bool) -> bool {
    !no_color_flag && !std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Installs the global subscriber.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbose: bool, quiet: bool, use_colors: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_ansi(use_colors)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
