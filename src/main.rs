//! Freshen CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use freshen::cli::{Cli, CommandDispatcher};
use freshen::shell::is_ci;
use freshen::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("freshen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshen=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Freshen starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Color choice is resolved once here and handed to the UI.
    let use_colors = !cli.no_color && should_use_colors();

    // Check if non-interactive (CI mode)
    let is_interactive = !is_ci();

    // Create UI
    let mut ui = create_ui(is_interactive, output_mode, use_colors);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(cli.index_url.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
