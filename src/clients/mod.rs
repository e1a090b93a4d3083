//! Client abstractions over the two external install services.
//!
//! - [`extension`] - [`ExtensionManagerClient`] for the host's extension registry
//! - [`package`] - [`PackageInstallerClient`] for the language package installer
//! - [`mock`] - In-memory host used by tests
//!
//! Both clients report success as an [`InstallOutcome`] and failure as a
//! [`ProvisionError`](crate::error::ProvisionError) naming what failed.

pub mod extension;
pub mod mock;
pub mod package;

pub use extension::ExtensionManagerClient;
pub use mock::MockHost;
pub use package::PackageInstallerClient;

use serde::Serialize;

/// Successful result of a client install call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    /// The install ran and changed the environment.
    Installed,
    /// The request was already satisfied; nothing changed.
    AlreadyPresent,
}
