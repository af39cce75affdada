//! Configuration file support.
//!
//! Configuration is layered, lowest precedence first:
//! - Defaults (the identity of the `task` package, built-in `core` provider)
//! - Global: `~/.task-pkg/config.toml`
//! - Project: `.task-pkg/config.toml` in the working directory
//! - An explicit file passed on the command line
//!
//! A later layer overrides only the keys it sets. A relative path in the
//! global or project file is resolved against the directory holding
//! `.task-pkg`; in an explicit file, against the directory holding the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::package_id::{PackageIdentity, DEFAULT_REPO_NAME, DEFAULT_REPO_PATH};
use crate::util::diagnostic::{ConfigLoadError, InvalidIdentityError};

/// Name of the per-user and per-project configuration directory.
pub const CONFIG_DIR_NAME: &str = ".task-pkg";

/// Name of the configuration file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Identity of the described package
    pub package: PackageConfig,

    /// Where the dependency descriptor comes from
    pub dependency: DependencyConfig,
}

/// Identity settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Repository path, e.g. `github.com/jurgen-kluft`
    pub repo_path: String,

    /// Package name
    pub name: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            repo_path: DEFAULT_REPO_PATH.to_string(),
            name: DEFAULT_REPO_NAME.to_string(),
        }
    }
}

/// Dependency settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyConfig {
    /// Descriptor file for the `core` dependency.
    ///
    /// The built-in descriptor is used when unset.
    pub manifest: Option<PathBuf>,
}

/// One configuration file as written; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub package: PackageSection,
    pub dependency: DependencySection,
}

/// `[package]` table of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSection {
    pub repo_path: Option<String>,
    pub name: Option<String>,
}

/// `[dependency]` table of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencySection {
    pub manifest: Option<PathBuf>,
}

impl ConfigFile {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).with_context(|| ConfigLoadError::read(path))?;

        toml::from_str::<ConfigFile>(&contents).with_context(|| ConfigLoadError::parse(path))
    }

    /// Load a configuration file, falling back to an empty one on failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
            Self::default()
        })
    }

    /// Resolve a relative `[dependency].manifest` against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if let Some(manifest) = self.dependency.manifest.as_mut() {
            if manifest.is_relative() {
                *manifest = base.join(&*manifest);
            }
        }
        self
    }
}

impl Config {
    /// Apply the keys set in a configuration file on top of this config.
    pub fn merge(&mut self, file: ConfigFile) {
        if let Some(repo_path) = file.package.repo_path {
            self.package.repo_path = repo_path;
        }
        if let Some(name) = file.package.name {
            self.package.name = name;
        }
        if file.dependency.manifest.is_some() {
            self.dependency.manifest = file.dependency.manifest;
        }
    }

    /// Validate the configured identity.
    pub fn identity(&self) -> Result<PackageIdentity, InvalidIdentityError> {
        PackageIdentity::parse(&self.package.repo_path, self.package.name.clone())
    }
}

/// Load merged configuration.
///
/// Global and project files that fail to load are skipped with a warning;
/// an explicitly requested file must load.
pub fn load_config(
    global_path: Option<&Path>,
    project_path: &Path,
    explicit_path: Option<&Path>,
) -> Result<Config> {
    let mut config = Config::default();

    if let Some(global) = global_path {
        tracing::debug!("global config: {}", global.display());
        config.merge(ConfigFile::load_or_default(global).resolve_paths(config_root(global)));
    }

    tracing::debug!("project config: {}", project_path.display());
    config.merge(
        ConfigFile::load_or_default(project_path).resolve_paths(config_root(project_path)),
    );

    if let Some(explicit) = explicit_path {
        tracing::debug!("explicit config: {}", explicit.display());
        let dir = explicit.parent().unwrap_or_else(|| Path::new(""));
        config.merge(ConfigFile::load(explicit)?.resolve_paths(dir));
    }

    Ok(config)
}

/// The directory holding `.task-pkg` for a `.task-pkg/config.toml` path.
fn config_root(config_path: &Path) -> &Path {
    config_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
}

/// Get the global config directory (~/.task-pkg).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME))
}

/// Get the global config path (~/.task-pkg/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Get the project config path (.task-pkg/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}
