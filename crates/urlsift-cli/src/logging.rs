//! Logging initialization and color control.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// The log level selected by the CLI flags.
///
/// Machine-readable output keeps stderr to errors unless verbose or debug
/// logging was asked for explicitly.
pub fn log_level(cli: &Cli) -> Level {
    if cli.debug {
        Level::TRACE
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || cli.output_format().is_machine_readable() {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global tracing subscriber and apply color settings.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || cli.output_format().is_machine_readable() {
        color_control::set_override(false);
    }
    Ok(())
}
