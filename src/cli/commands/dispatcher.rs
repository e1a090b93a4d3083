//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed arguments

use crate::cli::args::Cli;
use crate::config::ProvisionConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::install::InstallCommand;
use super::provision::ProvisionCommand;

/// Exit code for a failed install (or any failure under `strict`).
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when configuration or the manifest cannot be used.
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches parsed arguments to a command.
pub struct CommandDispatcher {
    config: ProvisionConfig,
}

impl CommandDispatcher {
    pub fn new(config: ProvisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.extension {
            Some(name) => InstallCommand::new(&self.config, name).execute(ui),
            None => ProvisionCommand::new(&self.config).execute(ui),
        }
    }
}
