//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `USERGUARD__OUTPUT__FORMAT=json`
//! 3. Config file: `--config`, else `./.userguard.toml`, else the platform
//!    config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// File name used for per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".userguard.toml";

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "USERGUARD";

/// Keys `config get` / `config set` understand.
pub const KNOWN_KEYS: [&str; 2] = ["output.format", "output.no_color"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Disable colours even on a terminal.
    pub no_color: bool,
    /// Format used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from file and environment over built-in defaults.
    ///
    /// A file passed explicitly via `--config` must exist; the implicit
    /// locations are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);

        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_path()).required(config_file.is_some()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// The file `load` reads and `config set` writes.
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(explicit) = config_file {
            return explicit.clone();
        }
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local.to_path_buf();
        }
        Self::config_path()
    }

    /// Path to the default (per-user) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.userguard.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "userguard", "userguard")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Read a single dotted key as display text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.format" => Some(self.output.format.to_string()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }
}
