//! Output verbosity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Also show per-state progress lines.
    Verbose,
    /// Show task results and the summary.
    #[default]
    Normal,
    /// Show warnings, errors and the summary only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows intermediate task states.
    pub fn shows_state_changes(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows a line per finished task.
    pub fn shows_task_results(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_visibility() {
        assert!(OutputMode::Verbose.shows_state_changes());
        assert!(!OutputMode::Normal.shows_state_changes());

        assert!(OutputMode::Normal.shows_task_results());
        assert!(!OutputMode::Quiet.shows_task_results());

        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Silent.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn output_mode_deserializes_lowercase() {
        let mode: OutputMode = serde_yaml::from_str("quiet").unwrap();
        assert_eq!(mode, OutputMode::Quiet);
    }
}
