//! YAML representation of manifest tasks.
//!
//! ```yaml
//! tasks:
//!   - extension: MorphoSourceImport
//!   - package: pynrrd
//!   - package: pandas
//!     version: "2.1.4"
//!   - package: morphosource
//!     version:
//!       from_extension: MorphoSourceImport
//! ```

use serde::{Deserialize, Serialize};

use super::task::{ExtensionTask, PackageTask, Task, VersionSpec, DEFAULT_VERSION_ATTRIBUTE};

/// A single task entry as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum TaskConfig {
    /// Ensure an extension is installed.
    Extension { extension: String },
    /// Install a language package.
    Package {
        package: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        version: Option<VersionConfig>,
    },
}

/// Package version as written in a config file.
///
/// Literal pins must be quoted in YAML so they stay strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum VersionConfig {
    Pin(String),
    FromExtension {
        from_extension: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribute: Option<String>,
    },
}

impl From<&TaskConfig> for Task {
    fn from(config: &TaskConfig) -> Self {
        match config {
            TaskConfig::Extension { extension } => Task::Extension(ExtensionTask::new(extension)),
            TaskConfig::Package { package, version } => Task::Package(PackageTask {
                package_name: package.clone(),
                version_spec: version.as_ref().map(VersionSpec::from),
            }),
        }
    }
}

impl From<&VersionConfig> for VersionSpec {
    fn from(config: &VersionConfig) -> Self {
        match config {
            VersionConfig::Pin(version) => VersionSpec::Pinned(version.clone()),
            VersionConfig::FromExtension {
                from_extension,
                attribute,
            } => VersionSpec::DerivedFrom {
                extension: ExtensionTask::new(from_extension),
                attribute: attribute
                    .clone()
                    .unwrap_or_else(|| DEFAULT_VERSION_ATTRIBUTE.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Vec<TaskConfig> {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn parses_extension_entry() {
        let tasks = parse("- extension: SlicerMorph");
        assert_eq!(
            tasks,
            vec![TaskConfig::Extension {
                extension: "SlicerMorph".to_string()
            }]
        );
    }

    #[test]
    fn parses_unpinned_package() {
        let tasks = parse("- package: pynrrd");
        let task: Task = (&tasks[0]).into();
        assert_eq!(task, Task::Package(PackageTask::new("pynrrd")));
    }

    #[test]
    fn parses_pinned_package() {
        let tasks = parse("- package: pandas\n  version: \"2.1.4\"");
        let task: Task = (&tasks[0]).into();
        assert_eq!(task, Task::Package(PackageTask::pinned("pandas", "2.1.4")));
    }

    #[test]
    fn parses_derived_package_with_default_attribute() {
        let tasks = parse(
            r#"
- package: morphosource
  version:
    from_extension: MorphoSourceImport
"#,
        );
        let task: Task = (&tasks[0]).into();
        assert_eq!(
            task,
            Task::Package(PackageTask::derived(
                "morphosource",
                ExtensionTask::new("MorphoSourceImport")
            ))
        );
    }

    #[test]
    fn parses_derived_package_with_custom_attribute() {
        let tasks = parse(
            r#"
- package: alpaca-core
  version:
    from_extension: ALPACA
    attribute: VERSION
"#,
        );
        let Task::Package(pkg) = Task::from(&tasks[0]) else {
            panic!("Expected package task");
        };
        assert_eq!(
            pkg.version_spec,
            Some(VersionSpec::DerivedFrom {
                extension: ExtensionTask::new("ALPACA"),
                attribute: "VERSION".to_string(),
            })
        );
    }

    #[test]
    fn entry_with_both_kinds_is_rejected() {
        let result: Result<Vec<TaskConfig>, _> =
            serde_yaml::from_str("- extension: A\n  package: b\n");
        assert!(result.is_err());
    }

    #[test]
    fn misspelled_package_key_is_rejected() {
        let result: Result<Vec<TaskConfig>, _> =
            serde_yaml::from_str("- package: pandas\n  verison: \"2.1.4\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn misspelled_derived_version_key_is_rejected() {
        let result: Result<Vec<TaskConfig>, _> = serde_yaml::from_str(
            "- package: morphosource\n  version:\n    from_extension: A\n    atribute: VERSION\n",
        );
        assert!(result.is_err());
    }
}
