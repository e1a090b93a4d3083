//! Per-task results and the run report.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::InstallOutcome;
use crate::error::{ProvisionError, Result};
use crate::manifest::Task;

/// Lifecycle of one task within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Resolving,
    Installing,
    Installed,
    AlreadyPresent,
    Failed,
}

/// Which stage of a task failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ExtensionInstall,
    VersionResolution,
    PackageInstall,
    Other,
}

/// Terminal outcome of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    Installed,
    AlreadyPresent,
    Failed { kind: FailureKind, reason: String },
}

impl TaskOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, TaskOutcome::Failed { .. })
    }

    pub fn state(&self) -> TaskState {
        match self {
            TaskOutcome::Installed => TaskState::Installed,
            TaskOutcome::AlreadyPresent => TaskState::AlreadyPresent,
            TaskOutcome::Failed { .. } => TaskState::Failed,
        }
    }
}

impl From<InstallOutcome> for TaskOutcome {
    fn from(outcome: InstallOutcome) -> Self {
        match outcome {
            InstallOutcome::Installed => TaskOutcome::Installed,
            InstallOutcome::AlreadyPresent => TaskOutcome::AlreadyPresent,
        }
    }
}

impl From<&ProvisionError> for TaskOutcome {
    fn from(err: &ProvisionError) -> Self {
        let kind = match err {
            ProvisionError::ExtensionInstallFailed { .. } => FailureKind::ExtensionInstall,
            ProvisionError::VersionResolutionFailed { .. } => FailureKind::VersionResolution,
            ProvisionError::PackageInstallFailed { .. } => FailureKind::PackageInstall,
            _ => FailureKind::Other,
        };
        TaskOutcome::Failed {
            kind,
            reason: err.to_string(),
        }
    }
}

/// Result of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallResult {
    pub task: Task,
    pub outcome: TaskOutcome,
}

/// How a run treats the tasks after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Attempt every task and report each outcome.
    #[default]
    BestEffort,
    /// Stop after the first task; the rest are reported as not attempted.
    SingleShot,
}

/// Everything a manifest run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub policy: RunPolicy,
    /// One result per attempted task, in manifest order.
    pub results: Vec<InstallResult>,
    /// Tasks skipped by [`RunPolicy::SingleShot`].
    pub not_attempted: Vec<Task>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.outcome.is_failed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &InstallResult> {
        self.results.iter().filter(|r| r.outcome.is_failed())
    }

    /// Number of results with the given terminal state.
    pub fn count(&self, state: TaskState) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.state() == state)
            .count()
    }

    pub fn outcomes(&self) -> Vec<&TaskOutcome> {
        self.results.iter().map(|r| &r.outcome).collect()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(ProvisionError::from)
    }
}
