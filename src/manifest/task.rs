//! Install task types.

use std::fmt;

use serde::Serialize;

/// Default name of the attribute an extension module exposes its version under.
pub const DEFAULT_VERSION_ATTRIBUTE: &str = "__version__";

/// A request to ensure one named extension is installed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ExtensionTask {
    /// Extension name as known to the registry.
    pub name: String,
}

impl ExtensionTask {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// How a package version is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSpec {
    /// Literal version pin.
    Pinned(String),
    /// Version read from an installed extension's module attribute.
    DerivedFrom {
        extension: ExtensionTask,
        attribute: String,
    },
}

impl VersionSpec {
    /// Derive from the extension's default version attribute.
    pub fn derive(extension: ExtensionTask) -> Self {
        Self::DerivedFrom {
            extension,
            attribute: DEFAULT_VERSION_ATTRIBUTE.to_string(),
        }
    }
}

/// A request to install one language package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageTask {
    /// Package name as understood by the installer.
    pub package_name: String,
    /// Version constraint; `None` installs the latest version.
    pub version_spec: Option<VersionSpec>,
}

impl PackageTask {
    /// An unpinned package.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version_spec: None,
        }
    }

    /// A package pinned to a literal version.
    pub fn pinned(package_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version_spec: Some(VersionSpec::Pinned(version.into())),
        }
    }

    /// A package whose version follows an extension's exposed version.
    pub fn derived(package_name: impl Into<String>, extension: ExtensionTask) -> Self {
        Self {
            package_name: package_name.into(),
            version_spec: Some(VersionSpec::derive(extension)),
        }
    }

    /// The extension this package's version derives from, if any.
    pub fn derived_from(&self) -> Option<&ExtensionTask> {
        match &self.version_spec {
            Some(VersionSpec::DerivedFrom { extension, .. }) => Some(extension),
            _ => None,
        }
    }
}

/// One entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Task {
    Extension(ExtensionTask),
    Package(PackageTask),
}

impl Task {
    /// Name of the extension or package this task installs.
    pub fn name(&self) -> &str {
        match self {
            Task::Extension(t) => &t.name,
            Task::Package(t) => &t.package_name,
        }
    }

    /// Short label for display ("extension" or "package").
    pub fn kind(&self) -> &'static str {
        match self {
            Task::Extension(_) => "extension",
            Task::Package(_) => "package",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.name())
    }
}

impl From<ExtensionTask> for Task {
    fn from(task: ExtensionTask) -> Self {
        Task::Extension(task)
    }
}

impl From<PackageTask> for Task {
    fn from(task: PackageTask) -> Self {
        Task::Package(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_from_returns_extension() {
        let task = PackageTask::derived("morphosource", ExtensionTask::new("MorphoSourceImport"));
        assert_eq!(
            task.derived_from(),
            Some(&ExtensionTask::new("MorphoSourceImport"))
        );
    }

    #[test]
    fn pinned_and_unpinned_have_no_source_extension() {
        assert!(PackageTask::new("pynrrd").derived_from().is_none());
        assert!(PackageTask::pinned("pandas", "2.1.4").derived_from().is_none());
    }

    #[test]
    fn derive_uses_default_attribute() {
        let spec = VersionSpec::derive(ExtensionTask::new("A"));
        if let VersionSpec::DerivedFrom { attribute, .. } = spec {
            assert_eq!(attribute, "__version__");
        } else {
            panic!("Expected DerivedFrom");
        }
    }

    #[test]
    fn task_display_includes_kind_and_name() {
        let ext: Task = ExtensionTask::new("SlicerMorph").into();
        let pkg: Task = PackageTask::new("pandas").into();
        assert_eq!(ext.to_string(), "extension SlicerMorph");
        assert_eq!(pkg.to_string(), "package pandas");
    }
}
