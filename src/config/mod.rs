//
//  gcore-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Persists the API token (and an optional API host override) in a YAML
//! file under the user's home directory.
//!
//! ## Configuration File Location
//!
//! `~/.config/gcore/config.yaml` on every platform.
//!
//! ## Example Configuration File
//!
//! ```yaml
//! api_token: "12345$abcdef..."
//! api_url: "https://api.gcore.com"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gcore_cli::config::Config;
//!
//! let mut config = Config::load()?;
//! config.api_token = Some("new-token".to_string());
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable overriding the API host.
pub const API_URL_ENV: &str = "GCORE_API_URL";

/// Persisted CLI configuration.
///
/// Both keys are optional; unknown keys in the file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Permanent API token saved by `gcore auth login`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// API host override, e.g. for a staging endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid YAML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        write_config_file(path, &content)
            .with_context(|| format!("Could not write configuration file {}", path.display()))?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(dirs
            .home_dir()
            .join(".config")
            .join("gcore")
            .join("config.yaml"))
    }

    /// The stored token, if any non-empty one is saved.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Removes the stored token. Returns `true` if there was one.
    pub fn clear_token(&mut self) -> bool {
        self.api_token.take().is_some()
    }

    /// Resolves the API host: explicit value, then the config file.
    ///
    /// `None` means the production default.
    pub fn resolve_api_url(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.api_url.clone())
            .filter(|u| !u.trim().is_empty())
    }
}
