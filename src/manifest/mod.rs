//! Install manifests.
//!
//! A [`Manifest`] is an ordered list of extension and package tasks for one
//! provisioning run. Construction validates that every package whose version
//! derives from an extension comes after that extension.
//!
//! # Example
//!
//! ```
//! use extprov::manifest::{ExtensionTask, Manifest, PackageTask};
//!
//! let manifest = Manifest::new(vec![
//!     ExtensionTask::new("MorphoSourceImport").into(),
//!     PackageTask::derived("morphosource", ExtensionTask::new("MorphoSourceImport")).into(),
//! ])
//! .unwrap();
//! assert_eq!(manifest.len(), 2);
//! ```

pub mod schema;
pub mod task;
pub mod validator;

pub use schema::{TaskConfig, VersionConfig};
pub use task::{ExtensionTask, PackageTask, Task, VersionSpec, DEFAULT_VERSION_ATTRIBUTE};
pub use validator::{validate_name, validate_tasks};

use crate::error::Result;

/// An ordered, validated sequence of install tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    tasks: Vec<Task>,
}

impl Manifest {
    /// Build a manifest, checking ordering and naming invariants.
    pub fn new(tasks: Vec<Task>) -> Result<Self> {
        validate_tasks(&tasks)?;
        Ok(Self { tasks })
    }

    /// Build a manifest from config-file entries.
    pub fn from_config(entries: &[TaskConfig]) -> Result<Self> {
        Self::new(entries.iter().map(Task::from).collect())
    }

    /// Manifest for a single extension.
    pub fn single_extension(name: &str) -> Result<Self> {
        Self::new(vec![ExtensionTask::new(name).into()])
    }

    /// The built-in manifest used when no config file provides one.
    ///
    /// Ensures the known extensions are present, then installs the Python
    /// packages their modules need (ImageStacks, Animator and GPA).
    pub fn builtin() -> Self {
        Self {
            tasks: vec![
                ExtensionTask::new("ALPACA").into(),
                ExtensionTask::new("MorphoSourceImport").into(),
                PackageTask::new("pynrrd").into(),
                PackageTask::new("easing-functions").into(),
                PackageTask::new("pandas").into(),
            ],
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_manifest_is_valid() {
        let manifest = Manifest::builtin();
        assert!(validate_tasks(manifest.tasks()).is_ok());
        assert_eq!(manifest.len(), 5);
    }

    #[test]
    fn builtin_manifest_puts_extensions_first() {
        let manifest = Manifest::builtin();
        let kinds: Vec<&str> = manifest.iter().map(Task::kind).collect();
        assert_eq!(
            kinds,
            vec!["extension", "extension", "package", "package", "package"]
        );
    }

    #[test]
    fn new_rejects_out_of_order_manifest() {
        let result = Manifest::new(vec![
            PackageTask::derived("pkg", ExtensionTask::new("A")).into(),
            ExtensionTask::new("A").into(),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn from_config_preserves_order() {
        let entries: Vec<TaskConfig> = serde_yaml::from_str(
            r#"
- package: pynrrd
- extension: SlicerMorph
- package: pandas
"#,
        )
        .unwrap();
        let manifest = Manifest::from_config(&entries).unwrap();
        let names: Vec<&str> = manifest.iter().map(Task::name).collect();
        assert_eq!(names, vec!["pynrrd", "SlicerMorph", "pandas"]);
    }

    #[test]
    fn single_extension_rejects_bad_name() {
        assert!(Manifest::single_extension("SlicerMorph").is_ok());
        assert!(Manifest::single_extension("bad name").is_err());
    }

    #[test]
    fn empty_manifest() {
        let manifest = Manifest::new(Vec::new()).unwrap();
        assert!(manifest.is_empty());
    }
}
