//! Package version resolution.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{ProvisionError, Result};
use crate::manifest::{PackageTask, VersionSpec};

/// Anything that exposes a version identifier.
pub trait HasVersion {
    fn version(&self) -> &str;
}

/// A version string read from an extension module attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedVersion(String);

impl HasVersion for ExportedVersion {
    fn version(&self) -> &str {
        &self.0
    }
}

/// An installed, importable extension module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionModule {
    /// Extension the module belongs to.
    pub name: String,
    exported_version: Option<ExportedVersion>,
}

impl ExtensionModule {
    /// A module that does not expose the requested version attribute.
    pub fn without_version(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported_version: None,
        }
    }

    /// A module exposing `version`. Blank values count as not exposed.
    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version = version.into().trim().to_string();
        Self {
            name: name.into(),
            exported_version: (!version.is_empty()).then_some(ExportedVersion(version)),
        }
    }

    /// The version capability, if the module has one.
    pub fn as_versioned(&self) -> Option<&dyn HasVersion> {
        self.exported_version.as_ref().map(|v| v as &dyn HasVersion)
    }
}

/// Read access to installed extension modules.
pub trait ModuleLookup {
    /// Import the module for `extension` and read `attribute` from it.
    ///
    /// Returns `Ok(None)` when the module is not installed or not importable.
    fn find_module(&self, extension: &str, attribute: &str) -> Result<Option<ExtensionModule>>;
}

/// A concrete version choice for a package install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedVersion {
    /// Install exactly this version.
    Pinned(String),
    /// Install whatever the installer picks (latest).
    Unpinned,
}

impl ResolvedVersion {
    /// The installer requirement for `package`: `name==version` or the bare name.
    pub fn requirement_for(&self, package: &str) -> String {
        match self {
            ResolvedVersion::Pinned(version) => format!("{}=={}", package, version),
            ResolvedVersion::Unpinned => package.to_string(),
        }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedVersion::Pinned(version) => write!(f, "{}", version),
            ResolvedVersion::Unpinned => write!(f, "unpinned"),
        }
    }
}

/// Turns a package task's version spec into a concrete version.
pub struct VersionResolver<'a> {
    modules: &'a dyn ModuleLookup,
}

impl<'a> VersionResolver<'a> {
    pub fn new(modules: &'a dyn ModuleLookup) -> Self {
        Self { modules }
    }

    /// Resolve the version to install for `task`.
    ///
    /// Derived versions are read from the extension's module at call time, so
    /// the extension must already be installed.
    pub fn resolve(&self, task: &PackageTask) -> Result<ResolvedVersion> {
        match &task.version_spec {
            None => Ok(ResolvedVersion::Unpinned),
            Some(VersionSpec::Pinned(version)) => Ok(ResolvedVersion::Pinned(version.clone())),
            Some(VersionSpec::DerivedFrom {
                extension,
                attribute,
            }) => {
                let name = &extension.name;
                let module = self
                    .modules
                    .find_module(name, attribute)
                    .map_err(|e| ProvisionError::VersionResolutionFailed {
                        extension: name.clone(),
                        reason: e.to_string(),
                    })?
                    .ok_or_else(|| ProvisionError::VersionResolutionFailed {
                        extension: name.clone(),
                        reason: "extension module is not installed or not importable".to_string(),
                    })?;

                let versioned =
                    module
                        .as_versioned()
                        .ok_or_else(|| ProvisionError::VersionResolutionFailed {
                            extension: name.clone(),
                            reason: format!("module does not expose '{}'", attribute),
                        })?;

                debug!(
                    "Resolved {} to version {} from {}.{}",
                    task.package_name,
                    versioned.version(),
                    name,
                    attribute
                );
                Ok(ResolvedVersion::Pinned(versioned.version().to_string()))
            }
        }
    }
}
