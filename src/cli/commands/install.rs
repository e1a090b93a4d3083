//! Single-extension install (`extprov <name>`).

use tracing::debug;

use crate::clients::InstallOutcome;
use crate::config::ProvisionConfig;
use crate::error::Result;
use crate::orchestrator::install_single_extension;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FAILURE};

/// Installs one named extension. Unlike a batch run, a failure here fails
/// the process.
pub struct InstallCommand<'a> {
    config: &'a ProvisionConfig,
    name: &'a str,
}

impl<'a> InstallCommand<'a> {
    pub fn new(config: &'a ProvisionConfig, name: &'a str) -> Self {
        Self { config, name }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let host = self.config.host.application();
        debug!("Using host executable {}", host.executable());

        match install_single_extension(&host, self.name, self.config.host.restart_after_install)
        {
            Ok(InstallOutcome::Installed) => {
                ui.success(&format!("Installed extension {}", self.name));
                Ok(CommandResult::success())
            }
            Ok(InstallOutcome::AlreadyPresent) => {
                ui.skipped(&format!("extension {} already present", self.name));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(EXIT_FAILURE))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn missing_host_executable_fails_with_message() {
        let mut config = ProvisionConfig::default();
        config.host.executable = "/nonexistent/extprov-test-host".to_string();

        let mut ui = MockUI::new();
        let result = InstallCommand::new(&config, "SlicerMorph")
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, EXIT_FAILURE);
        assert_eq!(
            ui.errors(),
            ["Failed to install SlicerMorph extension".to_string()]
        );
    }

    #[test]
    fn invalid_name_fails_without_launching_host() {
        let config = ProvisionConfig::default();
        let mut ui = MockUI::new();
        let result = InstallCommand::new(&config, "../evil")
            .execute(&mut ui)
            .unwrap();

        assert!(!result.success);
        assert_eq!(ui.errors().len(), 1);
    }
}
