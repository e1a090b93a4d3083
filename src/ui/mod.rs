//! Terminal output.
//!
//! - [`UserInterface`] trait for UI abstraction
//! - [`NonInteractiveUI`] for unattended runs
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use extprov::ui::{create_ui, OutputMode, UserInterface};
//!
//! let mut ui = create_ui(OutputMode::Silent);
//! ui.show_header("Provisioning");
//! ui.success("Installed extension A");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, ProvisionTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display something that was skipped.
    fn skipped(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show progress for a labelled item (e.g., "[3/7] extension A").
    fn show_progress(&mut self, current: usize, total: usize, label: &str);
}

/// Create the UI used by the binary.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(NonInteractiveUI::new(mode))
}
