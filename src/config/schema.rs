//! Configuration schema definitions.
//!
//! This module contains the structs that map to the YAML config file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;
use crate::host::{HostApplication, PipInstaller};
use crate::manifest::{Manifest, TaskConfig};
use crate::orchestrator::{RunOptions, RunPolicy};
use crate::ui::OutputMode;

/// Root configuration structure for `.extprov/config.yml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Host application settings
    pub host: HostSettings,

    /// What happens after the first task
    pub policy: RunPolicy,

    /// Terminal output verbosity
    pub output: OutputMode,

    /// Exit non-zero when any batch task fails
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Write a JSON run report to this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,

    /// Manifest tasks; the built-in manifest is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskConfig>>,
}

impl ProvisionConfig {
    /// The configured manifest, or the built-in one when no tasks are set.
    pub fn manifest(&self) -> Result<Manifest> {
        match &self.tasks {
            Some(tasks) => Manifest::from_config(tasks),
            None => Ok(Manifest::builtin()),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            policy: self.policy,
            restart_after_install: self.host.restart_after_install,
        }
    }
}

/// How to reach the host application and its Python.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Host application executable
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Extra arguments placed before the headless flags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Python launcher used for `-m pip`
    #[serde(default = "default_python")]
    pub python: String,

    /// Extra arguments placed before `-m pip`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub python_args: Vec<String>,

    /// Let the host restart after each extension install
    #[serde(default, skip_serializing_if = "is_false")]
    pub restart_after_install: bool,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            args: Vec::new(),
            python: default_python(),
            python_args: Vec::new(),
            restart_after_install: false,
        }
    }
}

impl HostSettings {
    /// Extension manager and module lookup for these settings.
    pub fn application(&self) -> HostApplication {
        HostApplication::new(&self.executable).with_args(self.args.clone())
    }

    /// Package installer for these settings.
    pub fn pip(&self) -> PipInstaller {
        PipInstaller::new(&self.python).with_args(self.python_args.clone())
    }
}

fn default_executable() -> String {
    "Slicer".to_string()
}

fn default_python() -> String {
    "PythonSlicer".to_string()
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_uses_defaults() {
        let config: ProvisionConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.host.executable, "Slicer");
        assert_eq!(config.host.python, "PythonSlicer");
        assert!(!config.host.restart_after_install);
        assert_eq!(config.policy, RunPolicy::BestEffort);
        assert_eq!(config.output, OutputMode::Normal);
        assert!(!config.strict);
        assert!(config.tasks.is_none());
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
host:
  executable: /opt/Slicer/Slicer
  args: ["--disable-settings"]
  python: /opt/Slicer/bin/PythonSlicer
  restart_after_install: true
policy: single_shot
output: verbose
strict: true
report: provision-report.json
tasks:
  - extension: SlicerMorph
  - package: pynrrd
"#;
        let config: ProvisionConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.host.executable, "/opt/Slicer/Slicer");
        assert_eq!(config.host.args, vec!["--disable-settings".to_string()]);
        assert!(config.host.restart_after_install);
        assert_eq!(config.policy, RunPolicy::SingleShot);
        assert_eq!(config.output, OutputMode::Verbose);
        assert!(config.strict);
        assert_eq!(config.report, Some(PathBuf::from("provision-report.json")));
        assert_eq!(config.tasks.unwrap().len(), 2);
    }

    #[test]
    fn partial_host_keeps_other_defaults() {
        let config: ProvisionConfig =
            serde_yaml::from_str("host:\n  executable: /usr/local/bin/Slicer").unwrap();
        assert_eq!(config.host.executable, "/usr/local/bin/Slicer");
        assert_eq!(config.host.python, "PythonSlicer");
    }

    #[test]
    fn manifest_falls_back_to_builtin() {
        let config = ProvisionConfig::default();
        assert_eq!(config.manifest().unwrap(), Manifest::builtin());
    }

    #[test]
    fn manifest_from_tasks_is_validated() {
        let config: ProvisionConfig = serde_yaml::from_str(
            r#"
tasks:
  - package: morphosource
    version:
      from_extension: MorphoSourceImport
"#,
        )
        .unwrap();
        assert!(config.manifest().is_err());
    }

    #[test]
    fn run_options_follow_config() {
        let config: ProvisionConfig =
            serde_yaml::from_str("policy: single_shot\nhost:\n  restart_after_install: true")
                .unwrap();
        let options = config.run_options();
        assert_eq!(options.policy, RunPolicy::SingleShot);
        assert!(options.restart_after_install);
    }

    #[test]
    fn host_settings_build_clients() {
        let settings = HostSettings {
            executable: "/opt/Slicer/Slicer".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.application().executable(), "/opt/Slicer/Slicer");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result: std::result::Result<ProvisionConfig, _> = serde_yaml::from_str("policy: sometimes");
        assert!(result.is_err());
    }
}
