//! Plain line-oriented terminal output.

use super::theme::{should_use_colors, ProvisionTheme};
use super::{OutputMode, UserInterface};

/// UI for unattended runs: no prompts, no cursor movement.
///
/// Status goes to stdout; warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: ProvisionTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ProvisionTheme::new()
        } else {
            ProvisionTheme::plain()
        };
        Self { mode, theme }
    }

    /// Create with an explicit theme (for testing).
    pub fn with_theme(mode: OutputMode, theme: ProvisionTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_progress(&mut self, current: usize, total: usize, label: &str) {
        if self.mode.shows_task_results() {
            println!("{} {}", self.theme.format_counter(current, total), label);
        }
    }
}
