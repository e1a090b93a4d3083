//! extprov CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use extprov::cli::{Cli, CommandDispatcher, EXIT_CONFIG_ERROR, EXIT_FAILURE};
use extprov::config::{config_override_from_env, load_config};
use extprov::ui::{create_ui, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` controls the level when set; the default is INFO.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("extprov=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("extprov starting with args: {:?}", cli);

    let project_root = std::env::current_dir().unwrap_or_default();
    let config_override = config_override_from_env();

    let config = match load_config(&project_root, config_override.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            create_ui(OutputMode::Normal).error(&e.to_string());
            return exit_code(EXIT_CONFIG_ERROR);
        }
    };

    let mut ui = create_ui(config.output);
    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => exit_code(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(EXIT_FAILURE)
        }
    }
}
