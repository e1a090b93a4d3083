//! Child process execution for the host application and package installer.

pub mod command;

pub use command::{display_command, execute, CommandResult};
