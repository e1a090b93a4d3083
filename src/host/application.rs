//! Extension manager backed by the host application executable.

use tracing::{debug, info, warn};

use crate::clients::{ExtensionManagerClient, InstallOutcome};
use crate::error::{ProvisionError, Result};
use crate::resolver::{ExtensionModule, ModuleLookup};
use crate::shell::{display_command, execute, CommandResult};

use super::snippet;

/// Arguments that start the host headless and run a Python snippet.
const HEADLESS_ARGS: &[&str] = &["--no-splash", "--no-main-window", "--python-code"];

/// Drives the host application's extensions manager by launching the host
/// with a Python snippet per operation.
#[derive(Debug, Clone)]
pub struct HostApplication {
    executable: String,
    args: Vec<String>,
}

impl HostApplication {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
        }
    }

    /// Add arguments placed before the headless flags.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    fn run_snippet(&self, code: &str) -> Result<CommandResult> {
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.extend_from_slice(HEADLESS_ARGS);
        args.push(code);
        execute(&self.executable, &args)
    }
}

impl ExtensionManagerClient for HostApplication {
    fn install(&self, name: &str, interactive: bool, restart: bool) -> Result<InstallOutcome> {
        info!("Installing extension {}", name);
        let code = snippet::install_extension(name, interactive, restart);

        let result = self.run_snippet(&code).map_err(|e| {
            warn!("Could not launch host for {}: {}", name, e);
            ProvisionError::ExtensionInstallFailed {
                name: name.to_string(),
            }
        })?;

        match result.exit_code {
            Some(snippet::EXIT_INSTALLED) => Ok(InstallOutcome::Installed),
            Some(snippet::EXIT_ALREADY_PRESENT) => {
                debug!("Extension {} is already installed", name);
                Ok(InstallOutcome::AlreadyPresent)
            }
            code => {
                warn!(
                    "Extension manager reported failure for {} (exit {:?}): {}",
                    name,
                    code,
                    result.stderr.trim()
                );
                Err(ProvisionError::ExtensionInstallFailed {
                    name: name.to_string(),
                })
            }
        }
    }
}

impl ModuleLookup for HostApplication {
    fn find_module(&self, extension: &str, attribute: &str) -> Result<Option<ExtensionModule>> {
        let code = snippet::read_version(extension, attribute);
        let result = self.run_snippet(&code)?;

        match result.exit_code {
            Some(0) => Ok(Some(match snippet::parse_version(&result.stdout) {
                Some(version) => ExtensionModule::with_version(extension, version),
                None => ExtensionModule::without_version(extension),
            })),
            Some(snippet::EXIT_NOT_IMPORTABLE) => Ok(None),
            Some(snippet::EXIT_NO_ATTRIBUTE) => Ok(Some(ExtensionModule::without_version(extension))),
            code => Err(ProvisionError::CommandFailed {
                command: display_command(&self.executable, HEADLESS_ARGS),
                code,
            }),
        }
    }
}
