//! Shared rendering of run progress and results.

use crate::orchestrator::{InstallResult, RunProgress, RunReport, TaskOutcome, TaskState};
use crate::ui::UserInterface;

/// Print one progress event, respecting the UI's output mode.
pub fn show_progress_event(ui: &mut dyn UserInterface, event: &RunProgress<'_>) {
    let mode = ui.output_mode();
    match event {
        RunProgress::TaskStarting { task, index, total } => {
            ui.show_progress(index + 1, *total, &task.to_string());
        }
        RunProgress::StateChanged { task, state } => {
            if mode.shows_state_changes() {
                ui.message(&format!("  {} {}", state_label(*state), task));
            }
        }
        RunProgress::TaskFinished { result, .. } => show_result(ui, result),
    }
}

/// Print the line for one finished task.
///
/// Failures are warnings: a batch run carries on past them.
pub fn show_result(ui: &mut dyn UserInterface, result: &InstallResult) {
    let show_ok = ui.output_mode().shows_task_results();
    match &result.outcome {
        TaskOutcome::Installed if show_ok => ui.success(&format!("Installed {}", result.task)),
        TaskOutcome::AlreadyPresent if show_ok => {
            ui.skipped(&format!("{} already present", result.task))
        }
        TaskOutcome::Failed { reason, .. } => ui.warning(reason),
        _ => {}
    }
}

/// Print the end-of-run summary.
pub fn show_summary(ui: &mut dyn UserInterface, report: &RunReport) {
    for task in &report.not_attempted {
        ui.skipped(&format!("{} not attempted", task));
    }

    let mut parts = vec![
        format!("{} installed", report.count(TaskState::Installed)),
        format!("{} already present", report.count(TaskState::AlreadyPresent)),
        format!("{} failed", report.count(TaskState::Failed)),
    ];
    if !report.not_attempted.is_empty() {
        parts.push(format!("{} not attempted", report.not_attempted.len()));
    }
    let line = parts.join(", ");

    if report.has_failures() {
        ui.warning(&line);
    } else {
        ui.success(&line);
    }
}

/// Human label for a task state.
pub fn state_label(state: TaskState) -> &'static str {
    match state {
        TaskState::Pending => "Pending",
        TaskState::Resolving => "Resolving version for",
        TaskState::Installing => "Installing",
        TaskState::Installed => "Installed",
        TaskState::AlreadyPresent => "Already present",
        TaskState::Failed => "Failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ExtensionTask, PackageTask, Task};
    use crate::orchestrator::{FailureKind, RunPolicy};
    use crate::ui::{MockUI, OutputMode};
    use chrono::Utc;

    fn result(task: Task, outcome: TaskOutcome) -> InstallResult {
        InstallResult { task, outcome }
    }

    fn report(results: Vec<InstallResult>, not_attempted: Vec<Task>) -> RunReport {
        RunReport {
            policy: RunPolicy::BestEffort,
            results,
            not_attempted,
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn failures_are_warnings() {
        let mut ui = MockUI::new();
        show_result(
            &mut ui,
            &result(
                ExtensionTask::new("A").into(),
                TaskOutcome::Failed {
                    kind: FailureKind::ExtensionInstall,
                    reason: "Failed to install A extension".to_string(),
                },
            ),
        );
        assert_eq!(ui.warnings(), ["Failed to install A extension".to_string()]);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn quiet_mode_hides_successes_but_not_failures() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_result(&mut ui, &result(ExtensionTask::new("A").into(), TaskOutcome::Installed));
        show_result(
            &mut ui,
            &result(
                PackageTask::new("pandas").into(),
                TaskOutcome::Failed {
                    kind: FailureKind::PackageInstall,
                    reason: "Failed to install pandas".to_string(),
                },
            ),
        );
        assert!(ui.successes().is_empty());
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn state_changes_only_in_verbose() {
        let task: Task = PackageTask::new("pynrrd").into();
        let event = RunProgress::StateChanged {
            task: &task,
            state: TaskState::Installing,
        };

        let mut normal = MockUI::new();
        show_progress_event(&mut normal, &event);
        assert!(normal.messages().is_empty());

        let mut verbose = MockUI::with_mode(OutputMode::Verbose);
        show_progress_event(&mut verbose, &event);
        assert_eq!(verbose.messages(), ["  Installing package pynrrd".to_string()]);
    }

    #[test]
    fn task_starting_shows_counter() {
        let task: Task = ExtensionTask::new("A").into();
        let mut ui = MockUI::new();
        show_progress_event(
            &mut ui,
            &RunProgress::TaskStarting {
                task: &task,
                index: 0,
                total: 3,
            },
        );
        assert_eq!(ui.progress(), [(1, 3, "extension A".to_string())]);
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut ui = MockUI::new();
        show_summary(
            &mut ui,
            &report(
                vec![
                    result(ExtensionTask::new("A").into(), TaskOutcome::Installed),
                    result(PackageTask::new("pynrrd").into(), TaskOutcome::AlreadyPresent),
                ],
                vec![],
            ),
        );
        assert_eq!(
            ui.successes(),
            ["1 installed, 1 already present, 0 failed".to_string()]
        );
    }

    #[test]
    fn summary_lists_not_attempted() {
        let mut ui = MockUI::new();
        show_summary(
            &mut ui,
            &report(
                vec![result(ExtensionTask::new("A").into(), TaskOutcome::Installed)],
                vec![PackageTask::new("pandas").into()],
            ),
        );
        assert_eq!(ui.skips(), ["package pandas not attempted".to_string()]);
        assert!(ui.successes()[0].ends_with("1 not attempted"));
    }
}
