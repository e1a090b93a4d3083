//! Manifest execution.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::clients::{ExtensionManagerClient, InstallOutcome, PackageInstallerClient};
use crate::error::Result;
use crate::manifest::{validate_name, ExtensionTask, Manifest, PackageTask, Task};
use crate::resolver::VersionResolver;

use super::result::{InstallResult, RunPolicy, RunReport, TaskOutcome, TaskState};

/// Progress events emitted while a manifest runs.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A task is about to start.
    TaskStarting {
        task: &'a Task,
        index: usize,
        total: usize,
    },
    /// A task moved to a new non-terminal state.
    StateChanged { task: &'a Task, state: TaskState },
    /// A task reached a terminal state.
    TaskFinished {
        result: &'a InstallResult,
        index: usize,
        total: usize,
    },
}

/// Options for a manifest run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub policy: RunPolicy,
    /// Let the host restart after each extension install. Off by default so
    /// one run can install several extensions.
    pub restart_after_install: bool,
}

/// Drives the extension manager and package installer through a manifest.
pub struct InstallationOrchestrator<'a> {
    extensions: &'a dyn ExtensionManagerClient,
    packages: &'a dyn PackageInstallerClient,
    resolver: VersionResolver<'a>,
    options: RunOptions,
}

impl<'a> InstallationOrchestrator<'a> {
    pub fn new(
        extensions: &'a dyn ExtensionManagerClient,
        packages: &'a dyn PackageInstallerClient,
        resolver: VersionResolver<'a>,
        options: RunOptions,
    ) -> Self {
        Self {
            extensions,
            packages,
            resolver,
            options,
        }
    }

    /// Run every task in order and report each outcome.
    pub fn run(&self, manifest: &Manifest) -> RunReport {
        self.run_with_progress(manifest, |_| {})
    }

    /// Run every task in order, reporting progress through `on_progress`.
    ///
    /// Individual failures are recorded and never stop the run; only
    /// [`RunPolicy::SingleShot`] ends it early.
    pub fn run_with_progress(
        &self,
        manifest: &Manifest,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> RunReport {
        let started_at = Utc::now();
        let total = manifest.len();
        let mut results = Vec::with_capacity(total);
        let mut not_attempted = Vec::new();

        info!(
            "Running manifest with {} task(s), policy {:?}",
            total, self.options.policy
        );

        for (index, task) in manifest.iter().enumerate() {
            if self.options.policy == RunPolicy::SingleShot && index > 0 {
                not_attempted.push(task.clone());
                continue;
            }

            on_progress(RunProgress::TaskStarting { task, index, total });

            let outcome = match task {
                Task::Extension(ext) => self.install_extension(task, ext, &mut on_progress),
                Task::Package(pkg) => self.install_package(task, pkg, &mut on_progress),
            };

            if let TaskOutcome::Failed { reason, .. } = &outcome {
                warn!("{} failed: {}", task, reason);
            } else {
                debug!("{} finished: {:?}", task, outcome);
            }

            results.push(InstallResult {
                task: task.clone(),
                outcome,
            });
            if let Some(result) = results.last() {
                on_progress(RunProgress::TaskFinished {
                    result,
                    index,
                    total,
                });
            }
        }

        if !not_attempted.is_empty() {
            info!(
                "Single-shot policy: {} task(s) not attempted",
                not_attempted.len()
            );
        }

        RunReport {
            policy: self.options.policy,
            results,
            not_attempted,
            started_at,
            finished_at: Utc::now(),
        }
    }

    fn install_extension(
        &self,
        task: &Task,
        ext: &ExtensionTask,
        on_progress: &mut impl FnMut(RunProgress<'_>),
    ) -> TaskOutcome {
        on_progress(RunProgress::StateChanged {
            task,
            state: TaskState::Installing,
        });
        match self
            .extensions
            .install(&ext.name, false, self.options.restart_after_install)
        {
            Ok(outcome) => outcome.into(),
            Err(e) => TaskOutcome::from(&e),
        }
    }

    fn install_package(
        &self,
        task: &Task,
        pkg: &PackageTask,
        on_progress: &mut impl FnMut(RunProgress<'_>),
    ) -> TaskOutcome {
        on_progress(RunProgress::StateChanged {
            task,
            state: TaskState::Resolving,
        });
        let version = match self.resolver.resolve(pkg) {
            Ok(v) => v,
            Err(e) => return TaskOutcome::from(&e),
        };

        on_progress(RunProgress::StateChanged {
            task,
            state: TaskState::Installing,
        });
        match self.packages.install(&pkg.package_name, &version) {
            Ok(outcome) => outcome.into(),
            Err(e) => TaskOutcome::from(&e),
        }
    }
}

/// Install one named extension, propagating failure.
///
/// This is the single-extension entry point: there is nothing to fall back
/// to, so an `ExtensionInstallFailed` is returned as an error rather than
/// recorded. The package installer is never involved.
pub fn install_single_extension(
    client: &dyn ExtensionManagerClient,
    name: &str,
    restart_after_install: bool,
) -> Result<InstallOutcome> {
    validate_name("extension", name)?;
    info!("Installing single extension {}", name);
    client.install(name, false, restart_after_install)
}
