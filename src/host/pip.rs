//! Package installer backed by the host's Python `pip`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::clients::{InstallOutcome, PackageInstallerClient};
use crate::error::{ProvisionError, Result};
use crate::resolver::ResolvedVersion;
use crate::shell::{execute, CommandResult};

/// Runs `<python> -m pip` for the host's bundled interpreter.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
    args: Vec<String>,
}

impl PipInstaller {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            args: Vec::new(),
        }
    }

    /// Add arguments placed before `-m pip`.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    fn pip(&self, pip_args: &[&str]) -> Result<CommandResult> {
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.extend_from_slice(&["-m", "pip"]);
        args.extend_from_slice(pip_args);
        execute(&self.python, &args)
    }

    /// Version of `package` currently installed, if any.
    pub fn installed_version(&self, package: &str) -> Result<Option<String>> {
        let result = self.pip(&["show", package])?;
        if !result.success {
            return Ok(None);
        }
        Ok(parse_show_version(&result.stdout))
    }
}

/// Extract the `Version:` field from `pip show` output.
fn parse_show_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Version:"))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Leading release segment (`1.2.0`) and whatever follows it.
static RELEASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+(?:\.\d+)*)(.*)$").unwrap());

/// Normalize a version string the way pip compares them: case-insensitive,
/// optional `v` prefix, trailing zero release segments and leading zeros
/// ignored, separators before pre/post/dev markers dropped.
fn normalize_version(version: &str) -> String {
    let lowered = version.trim().to_lowercase();
    let Some(caps) = RELEASE_REGEX.captures(&lowered) else {
        return lowered;
    };

    let mut release: Vec<&str> = caps[1]
        .split('.')
        .map(|part| match part.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        })
        .collect();
    while release.len() > 1 && release.last() == Some(&"0") {
        release.pop();
    }

    let (suffix, local) = match caps[2].split_once('+') {
        Some((suffix, local)) => (suffix, Some(local)),
        None => (&caps[2], None),
    };
    let suffix: String = suffix.chars().filter(|c| !matches!(c, '.' | '-' | '_')).collect();

    let mut normalized = release.join(".");
    normalized.push_str(&suffix);
    if let Some(local) = local {
        normalized.push('+');
        normalized.push_str(&local.replace(['-', '_'], "."));
    }
    normalized
}

/// Whether an installed version satisfies an exact `==` pin.
fn versions_match(installed: &str, wanted: &str) -> bool {
    normalize_version(installed) == normalize_version(wanted)
}

impl PackageInstallerClient for PipInstaller {
    fn install(&self, package_name: &str, version: &ResolvedVersion) -> Result<InstallOutcome> {
        let failed = || ProvisionError::PackageInstallFailed {
            package: package_name.to_string(),
            version: version.to_string(),
        };

        let installed = self.installed_version(package_name).map_err(|e| {
            warn!("Could not query {}: {}", package_name, e);
            failed()
        })?;

        let satisfied = match (installed.as_deref(), version) {
            (Some(_), ResolvedVersion::Unpinned) => true,
            (Some(current), ResolvedVersion::Pinned(wanted)) => versions_match(current, wanted),
            (None, _) => false,
        };
        if satisfied {
            debug!("{} is already satisfied ({:?})", package_name, installed);
            return Ok(InstallOutcome::AlreadyPresent);
        }

        let requirement = version.requirement_for(package_name);
        info!("Installing package {}", requirement);

        let result = self
            .pip(&["install", "--disable-pip-version-check", &requirement])
            .map_err(|e| {
                warn!("Could not launch pip for {}: {}", requirement, e);
                failed()
            })?;

        if result.success {
            Ok(InstallOutcome::Installed)
        } else {
            warn!(
                "pip install {} exited with {:?}: {}",
                requirement,
                result.exit_code,
                result.stderr.trim()
            );
            Err(failed())
        }
    }
}
