//! Extension manager client contract.

use crate::error::Result;

use super::InstallOutcome;

/// Installs extensions from the host application's extension registry.
///
/// Implementations must:
/// - return [`InstallOutcome::AlreadyPresent`] without contacting the registry
///   when the extension is already installed
/// - map every registry failure (unknown extension, download or verification
///   error, incompatible host) to
///   [`ProvisionError::ExtensionInstallFailed`](crate::error::ProvisionError::ExtensionInstallFailed)
pub trait ExtensionManagerClient {
    /// Install `name`.
    ///
    /// `interactive` controls whether the host may show popups; `restart`
    /// controls whether the host restarts once the install finishes.
    fn install(&self, name: &str, interactive: bool, restart: bool) -> Result<InstallOutcome>;
}
