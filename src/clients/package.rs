//! Package installer client contract.

use crate::error::Result;
use crate::resolver::ResolvedVersion;

use super::InstallOutcome;

/// Installs language packages into the host's runtime environment.
///
/// A pinned version is requested as exactly `name==version`, an unpinned one
/// as the bare name (see [`ResolvedVersion::requirement_for`]). Re-installing
/// an already satisfied requirement reports [`InstallOutcome::AlreadyPresent`];
/// every installer error maps to
/// [`ProvisionError::PackageInstallFailed`](crate::error::ProvisionError::PackageInstallFailed).
pub trait PackageInstallerClient {
    fn install(&self, package_name: &str, version: &ResolvedVersion) -> Result<InstallOutcome>;
}
