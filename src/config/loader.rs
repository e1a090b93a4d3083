//! Configuration file discovery and loading.
//!
//! Configuration is optional: without any file the defaults and the
//! built-in manifest apply.

use crate::config::merger::merge_configs;
use crate::config::schema::ProvisionConfig;
use crate::error::{ProvisionError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "EXTPROV_CONFIG";

const CONFIG_DIR: &str = ".extprov";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.extprov/config.yml`)
/// 2. Project config (`.extprov/config.yml`)
/// 3. Local overrides (`.extprov/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.extprov/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .extprov/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .extprov/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all_existing().is_empty()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProvisionConfig> {
    if content.trim().is_empty() {
        return Ok(ProvisionConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProvisionError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProvisionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProvisionError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProvisionConfig> {
    parse_config(&read(path)?, path)
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(&read(path)?).map_err(|e| ProvisionError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
pub fn load_merged_config(paths: &ConfigPaths) -> Result<ProvisionConfig> {
    let mut configs = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    let merged = merge_configs(&configs);
    let source = paths
        .all_existing()
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();

    serde_yaml::from_value(merged).map_err(|e| ProvisionError::ConfigParseError {
        path: source,
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load configuration for a run.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files under `project_root`.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProvisionConfig> {
    if let Some(override_path) = config_override {
        debug!("Loading config override {}", override_path.display());
        load_config_file(override_path)
    } else {
        load_merged_config(&ConfigPaths::discover(project_root))
    }
}

/// The config override named by `EXTPROV_CONFIG`, if set.
pub fn config_override_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::RunPolicy;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "strict: true");
        write_config(temp.path(), "config.local.yml", "");

        let paths = ConfigPaths::discover_with_home(temp.path(), None);
        assert!(paths.project.is_some());
        assert!(paths.project_local.is_some());
        assert!(paths.user_global.is_none());
    }

    #[test]
    fn discover_returns_empty_without_files() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover_with_home(temp.path(), None);
        assert!(paths.is_empty());
    }

    #[test]
    fn all_existing_returns_in_merge_order() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let global = write_config(home.path(), "config.yml", "");
        let proj = write_config(project.path(), "config.yml", "");
        let local = write_config(project.path(), "config.local.yml", "");

        let paths = ConfigPaths::discover_with_home(project.path(), Some(home.path()));
        assert_eq!(paths.all_existing(), vec![&global, &proj, &local]);
    }

    #[test]
    fn no_files_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(&ConfigPaths::discover_with_home(temp.path(), None)).unwrap();
        assert_eq!(config.host.executable, "Slicer");
        assert!(config.tasks.is_none());
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "host:\n  executable: /opt/Slicer/Slicer\n  python: /opt/Slicer/bin/PythonSlicer\n",
        );
        write_config(
            temp.path(),
            "config.local.yml",
            "host:\n  executable: /home/me/Slicer/Slicer\npolicy: single_shot\n",
        );

        let config = load_merged_config(&ConfigPaths::discover_with_home(temp.path(), None)).unwrap();
        assert_eq!(config.host.executable, "/home/me/Slicer/Slicer");
        assert_eq!(config.host.python, "/opt/Slicer/bin/PythonSlicer");
        assert_eq!(config.policy, RunPolicy::SingleShot);
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "config.yml", "tasks: [unclosed");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigParseError { .. }));
    }

    #[test]
    fn override_skips_discovery() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "strict: true");
        let other = temp.path().join("other.yml");
        fs::write(&other, "report: out.json").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert!(!config.strict);
        assert_eq!(config.report, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, ProvisionError::ConfigNotFound { .. }));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "config.yml", "\n");
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.host.python, "PythonSlicer");
    }
}
