//! Mock UI implementation for testing.
//!
//! # Example
//!
//! ```
//! use extprov::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.success("Done");
//!
//! assert_eq!(ui.messages(), ["Starting".to_string()]);
//! assert_eq!(ui.successes(), ["Done".to_string()]);
//! ```

use super::{OutputMode, UserInterface};

/// Captures every UI interaction for later assertion.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    skipped: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize, String)>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn skips(&self) -> &[String] {
        &self.skipped
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn progress(&self) -> &[(usize, usize, String)] {
        &self.progress
    }

    /// Check if any captured output contains the given text.
    pub fn has_output(&self, text: &str) -> bool {
        [
            &self.messages,
            &self.successes,
            &self.skipped,
            &self.warnings,
            &self.errors,
            &self.headers,
        ]
        .iter()
        .any(|lines| lines.iter().any(|line| line.contains(text)))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn skipped(&mut self, msg: &str) {
        self.skipped.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize, label: &str) {
        self.progress.push((current, total, label.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.warning("careful");
        ui.error("broken");
        ui.skipped("later");
        ui.show_header("Title");
        ui.show_progress(1, 3, "extension A");

        assert_eq!(ui.warnings(), ["careful".to_string()]);
        assert_eq!(ui.errors(), ["broken".to_string()]);
        assert_eq!(ui.skips(), ["later".to_string()]);
        assert_eq!(ui.headers(), ["Title".to_string()]);
        assert_eq!(ui.progress(), [(1, 3, "extension A".to_string())]);
    }

    #[test]
    fn has_output_searches_all_channels() {
        let mut ui = MockUI::new();
        ui.error("Failed to install A extension");
        assert!(ui.has_output("Failed to install"));
        assert!(!ui.has_output("pandas"));
    }

    #[test]
    fn with_mode_sets_mode() {
        assert_eq!(MockUI::with_mode(OutputMode::Silent).output_mode(), OutputMode::Silent);
    }
}
