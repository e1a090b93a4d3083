//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. [`CommandDispatcher`]
//! picks one from the parsed arguments:
//! - `extprov` runs the manifest ([`provision::ProvisionCommand`])
//! - `extprov <name>` installs one extension ([`install::InstallCommand`])

pub mod dispatcher;
pub mod display;
pub mod install;
pub mod provision;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_CONFIG_ERROR, EXIT_FAILURE};
