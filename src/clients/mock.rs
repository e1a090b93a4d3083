//! In-memory host for testing.
//!
//! `MockHost` implements [`ExtensionManagerClient`], [`PackageInstallerClient`]
//! and [`ModuleLookup`] over one shared state, so installing an extension
//! makes its module visible to version resolution, just like the real host.
//! Every call is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use extprov::clients::{ExtensionManagerClient, InstallOutcome, MockHost};
//!
//! let host = MockHost::new().with_registry_extension("SlicerMorph", Some("1.0"));
//! let outcome = host.install("SlicerMorph", false, false).unwrap();
//! assert_eq!(outcome, InstallOutcome::Installed);
//! assert_eq!(host.extension_installs(), vec!["SlicerMorph".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::{ProvisionError, Result};
use crate::resolver::{ExtensionModule, ModuleLookup, ResolvedVersion};

use super::{ExtensionManagerClient, InstallOutcome, PackageInstallerClient};

/// A call made against the mock host, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ExtensionInstall {
        name: String,
        interactive: bool,
        restart: bool,
    },
    ModuleLookup {
        extension: String,
        attribute: String,
    },
    PackageInstall {
        requirement: String,
    },
}

#[derive(Debug, Default)]
struct MockState {
    /// Extensions the registry can serve, with the version their module exports.
    registry: HashMap<String, Option<String>>,
    installed_extensions: HashMap<String, Option<String>>,
    installed_packages: HashMap<String, Option<String>>,
    failing_packages: HashSet<String>,
    calls: Vec<HostCall>,
}

/// Mock host application for testing.
#[derive(Debug, Default)]
pub struct MockHost {
    state: RefCell<MockState>,
}

impl MockHost {
    /// Create an empty host with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an extension available on the registry.
    pub fn with_registry_extension(self, name: &str, version: Option<&str>) -> Self {
        self.state
            .borrow_mut()
            .registry
            .insert(name.to_string(), version.map(str::to_string));
        self
    }

    /// Mark an extension as already installed.
    pub fn with_installed_extension(self, name: &str, version: Option<&str>) -> Self {
        self.state
            .borrow_mut()
            .installed_extensions
            .insert(name.to_string(), version.map(str::to_string));
        self
    }

    /// Mark a package as already installed.
    pub fn with_installed_package(self, name: &str, version: Option<&str>) -> Self {
        self.state
            .borrow_mut()
            .installed_packages
            .insert(name.to_string(), version.map(str::to_string));
        self
    }

    /// Make every install of this package fail.
    pub fn with_failing_package(self, name: &str) -> Self {
        self.state
            .borrow_mut()
            .failing_packages
            .insert(name.to_string());
        self
    }

    /// All calls made so far.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    /// Names passed to extension installs, in order.
    pub fn extension_installs(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                HostCall::ExtensionInstall { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Requirement strings passed to the package installer, in order.
    pub fn package_requirements(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                HostCall::PackageInstall { requirement } => Some(requirement.clone()),
                _ => None,
            })
            .collect()
    }

    /// Installed version of a package (`Some(None)` for an unversioned install).
    pub fn installed_package(&self, name: &str) -> Option<Option<String>> {
        self.state.borrow().installed_packages.get(name).cloned()
    }

    pub fn is_extension_installed(&self, name: &str) -> bool {
        self.state.borrow().installed_extensions.contains_key(name)
    }

    /// Forget recorded calls, keeping installed state.
    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }
}

impl ExtensionManagerClient for MockHost {
    fn install(&self, name: &str, interactive: bool, restart: bool) -> Result<InstallOutcome> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::ExtensionInstall {
            name: name.to_string(),
            interactive,
            restart,
        });

        if state.installed_extensions.contains_key(name) {
            return Ok(InstallOutcome::AlreadyPresent);
        }

        match state.registry.get(name).cloned() {
            Some(version) => {
                state.installed_extensions.insert(name.to_string(), version);
                Ok(InstallOutcome::Installed)
            }
            None => Err(ProvisionError::ExtensionInstallFailed {
                name: name.to_string(),
            }),
        }
    }
}

impl PackageInstallerClient for MockHost {
    fn install(&self, package_name: &str, version: &ResolvedVersion) -> Result<InstallOutcome> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::PackageInstall {
            requirement: version.requirement_for(package_name),
        });

        if state.failing_packages.contains(package_name) {
            return Err(ProvisionError::PackageInstallFailed {
                package: package_name.to_string(),
                version: version.to_string(),
            });
        }

        let wanted = match version {
            ResolvedVersion::Pinned(v) => Some(v.clone()),
            ResolvedVersion::Unpinned => None,
        };

        let satisfied = match (state.installed_packages.get(package_name), &wanted) {
            (Some(_), None) => true,
            (Some(installed), Some(w)) => installed.as_deref() == Some(w.as_str()),
            (None, _) => false,
        };

        if satisfied {
            Ok(InstallOutcome::AlreadyPresent)
        } else {
            state
                .installed_packages
                .insert(package_name.to_string(), wanted);
            Ok(InstallOutcome::Installed)
        }
    }
}

impl ModuleLookup for MockHost {
    fn find_module(&self, extension: &str, attribute: &str) -> Result<Option<ExtensionModule>> {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::ModuleLookup {
            extension: extension.to_string(),
            attribute: attribute.to_string(),
        });

        Ok(state
            .installed_extensions
            .get(extension)
            .map(|version| match version {
                Some(v) => ExtensionModule::with_version(extension, v.clone()),
                None => ExtensionModule::without_version(extension),
            }))
    }
}
