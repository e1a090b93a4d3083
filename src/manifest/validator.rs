//! Manifest invariant checks.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ProvisionError, Result};

use super::task::{Task, VersionSpec};

// Names end up inside host-side snippets and installer arguments.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").unwrap());

static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Check that a name is safe to hand to the registry or installer.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(ProvisionError::ManifestInvalid {
            message: format!("invalid {} name '{}'", kind, name),
        })
    }
}

/// Check the ordering and naming invariants of a task list.
///
/// Every package that derives its version from an extension must come after
/// that extension's own task in the same list.
pub fn validate_tasks(tasks: &[Task]) -> Result<()> {
    let mut seen_extensions: HashSet<&str> = HashSet::new();
    let mut all_extensions: HashSet<&str> = HashSet::new();

    for task in tasks {
        if let Task::Extension(ext) = task {
            all_extensions.insert(ext.name.as_str());
        }
    }

    for task in tasks {
        match task {
            Task::Extension(ext) => {
                validate_name("extension", &ext.name)?;
                seen_extensions.insert(ext.name.as_str());
            }
            Task::Package(pkg) => {
                validate_name("package", &pkg.package_name)?;
                match &pkg.version_spec {
                    Some(VersionSpec::Pinned(version)) if version.trim().is_empty() => {
                        return Err(ProvisionError::ManifestInvalid {
                            message: format!("package '{}' has an empty version pin", pkg.package_name),
                        });
                    }
                    Some(VersionSpec::DerivedFrom {
                        extension,
                        attribute,
                    }) => {
                        if !ATTRIBUTE_REGEX.is_match(attribute) {
                            return Err(ProvisionError::ManifestInvalid {
                                message: format!(
                                    "package '{}' uses invalid version attribute '{}'",
                                    pkg.package_name, attribute
                                ),
                            });
                        }
                        let name = extension.name.as_str();
                        if !all_extensions.contains(name) {
                            return Err(ProvisionError::ManifestInvalid {
                                message: format!(
                                    "package '{}' derives its version from extension '{}', which is not in the manifest",
                                    pkg.package_name, name
                                ),
                            });
                        }
                        if !seen_extensions.contains(name) {
                            return Err(ProvisionError::ManifestInvalid {
                                message: format!(
                                    "package '{}' must come after extension '{}'",
                                    pkg.package_name, name
                                ),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
