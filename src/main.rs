//! Runway CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use runway::cli::{Cli, CommandContext, CommandDispatcher};
use runway::config::{default_store_path, load_config, RunwayConfig};
use runway::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("runway=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runway=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn output_mode(cli: &Cli, config: &RunwayConfig) -> OutputMode {
    if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        config.default_output.into()
    }
}

/// `--store` / `RUNWAY_STORE`, then the configured path, then `~/.runway/store.json`.
fn store_path(cli: &Cli, config: &RunwayConfig) -> PathBuf {
    cli.store
        .clone()
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(default_store_path)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Runway starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let interactive = !cli.non_interactive;

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(interactive, OutputMode::Normal);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mut ui = create_ui(interactive, output_mode(&cli, &config));
    let store = store_path(&cli, &config);
    tracing::debug!("Using store {}", store.display());

    let dispatcher = CommandDispatcher::new(CommandContext::new(store, config));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
