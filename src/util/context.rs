//! Global context for CLI operations.
//!
//! Provides centralized access to the working directory and configuration
//! locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{self, Config};

/// Global context containing the working directory and configuration locations.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global config file (~/.task-pkg/config.toml), if a home dir exists
    global_config: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a new GlobalContext for the process working directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            global_config: config::global_config_path(),
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Replace the global config location (`None` disables it).
    pub fn with_global_config(mut self, path: Option<PathBuf>) -> Self {
        self.global_config = path;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global config path.
    pub fn global_config_path(&self) -> Option<&Path> {
        self.global_config.as_deref()
    }

    /// Get the project config path.
    pub fn project_config_path(&self) -> PathBuf {
        config::project_config_path(&self.cwd)
    }

    /// Load the layered configuration, with an optional explicit file on top.
    pub fn load_config(&self, explicit: Option<&Path>) -> Result<Config> {
        let explicit = explicit.map(|p| {
            if p.is_relative() {
                self.cwd.join(p)
            } else {
                p.to_path_buf()
            }
        });

        config::load_config(
            self.global_config_path(),
            &self.project_config_path(),
            explicit.as_deref(),
        )
    }
}
