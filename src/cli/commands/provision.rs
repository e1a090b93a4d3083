//! Batch provisioning (`extprov` with no arguments).

use tracing::info;

use crate::config::ProvisionConfig;
use crate::error::Result;
use crate::orchestrator::{InstallationOrchestrator, RunReport};
use crate::resolver::VersionResolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_CONFIG_ERROR, EXIT_FAILURE};
use super::display::{show_progress_event, show_summary};

/// Runs the configured manifest against the real host.
pub struct ProvisionCommand<'a> {
    config: &'a ProvisionConfig,
}

impl<'a> ProvisionCommand<'a> {
    pub fn new(config: &'a ProvisionConfig) -> Self {
        Self { config }
    }

    /// Exit status for a finished run.
    ///
    /// Task failures only fail the process under `strict`.
    pub fn exit_result(&self, report: &RunReport) -> CommandResult {
        if self.config.strict && report.has_failures() {
            CommandResult::failure(EXIT_FAILURE)
        } else {
            CommandResult::success()
        }
    }
}

impl Command for ProvisionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = match self.config.manifest() {
            Ok(manifest) => manifest,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
        };

        let host = self.config.host.application();
        let pip = self.config.host.pip();
        let orchestrator = InstallationOrchestrator::new(
            &host,
            &pip,
            VersionResolver::new(&host),
            self.config.run_options(),
        );

        ui.show_header(&format!("Provisioning {} task(s)", manifest.len()));
        let report = orchestrator.run_with_progress(&manifest, |event| {
            show_progress_event(ui, &event);
        });
        show_summary(ui, &report);

        if let Some(path) = &self.config.report {
            report.write_json(path)?;
            info!("Wrote run report to {}", path.display());
        }

        Ok(self.exit_result(&report))
    }
}
