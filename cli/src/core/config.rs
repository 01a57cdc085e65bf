//! # Zorx Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional user configuration for zorx and layers environment
//! overrides on top. Configuration only supplies defaults; explicit command-line
//! options always win.
//!
//! ## Architecture
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults (`Config::default()`)
//! 2. The TOML file at `$ZORX_CONFIG` (`~` expanded), or `config.toml` in the
//!    platform config directory (e.g. `~/.config/zorx/config.toml` on Linux)
//! 3. Environment variables:
//!    - `ZORX_ENV=development` or `NODE_ENV=development`: development mode
//!    - `ZORX_MIN_NODE_VERSION`: minimum Node.js version gate
//!
//! `ZORX_COMMAND_TIMEOUT` is read by the `create` command's `--timeout` option
//! and overrides `command_timeout_secs`.
//!
//! ## Examples
//!
//! ```toml
//! # ~/.config/zorx/config.toml
//! package_manager = "pnpm"
//! command_timeout_secs = 300
//! min_node_version = "18.0.0"
//! development = false
//! ```
//!
use crate::common::system::parse_major_version;
use crate::core::error::{Result, ZorxError};
use crate::core::generator::PackageManager;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file name inside the platform config directory.
const CONFIG_FILENAME: &str = "config.toml";

/// Default limit for a single package-manager invocation, in seconds.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 600;

/// User configuration.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Package manager used when `--pm` is not given.
    pub package_manager: PackageManager,
    /// Per-invocation subprocess limit; 0 disables it.
    pub command_timeout_secs: u64,
    /// Refuse to start when `node` is older than this (major version compared).
    pub min_node_version: Option<String>,
    /// Development mode: debug console output and debug diagnostics.
    pub development: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::Npm,
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            min_node_version: None,
            development: false,
        }
    }
}

/// Loads, overrides and validates the configuration for this process.
///
/// A missing config file is not an error; the defaults are used instead.
///
/// # Returns
///
/// * `Result<Config>` - The merged configuration.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The config file exists but cannot be read.
/// - The file is not valid TOML or contains unknown keys.
/// - `min_node_version` (from the file or `ZORX_MIN_NODE_VERSION`) has no
///   parseable major version (`ZorxError::Config`).
pub fn load_config() -> Result<Config> {
    // --- Read the file, if any ---
    let mut config = match config_path()? {
        Some(path) if path.is_file() => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        Some(path) => {
            debug!("No configuration file at {}", path.display());
            Config::default()
        }
        None => {
            debug!("Could not determine the user config directory.");
            Config::default()
        }
    };
    // --- Environment overrides, then validation ---
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Resolves the config file location, honoring `ZORX_CONFIG`.
///
/// # Returns
///
/// * `Result<Option<PathBuf>>` - The path to read, or `None` when no home
///   directory can be determined.
fn config_path() -> Result<Option<PathBuf>> {
    if let Ok(explicit) = std::env::var("ZORX_CONFIG") {
        let expanded = shellexpand::tilde(&explicit).into_owned();
        return Ok(Some(PathBuf::from(expanded)));
    }
    Ok(ProjectDirs::from("dev", "zorx", "zorx")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME)))
}

/// Reads and parses one TOML config file.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Applies environment overrides read through `lookup`.
///
/// # Arguments
///
/// * `config` - Updated in place.
/// * `lookup` - Returns the value of an environment variable. Tests pass a map.
fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let development = ["ZORX_ENV", "NODE_ENV"]
        .iter()
        .filter_map(|key| lookup(key))
        .any(|value| value.eq_ignore_ascii_case("development"));
    if development {
        config.development = true;
    }
    if let Some(version) = lookup("ZORX_MIN_NODE_VERSION").filter(|v| !v.trim().is_empty()) {
        config.min_node_version = Some(version.trim().to_string());
    }
}

/// Rejects values that would only fail later, at use.
///
/// # Errors
///
/// Returns an `Err` (`ZorxError::Config`) for a `min_node_version` without a
/// parseable major version.
fn validate_config(config: &Config) -> Result<()> {
    if let Some(version) = &config.min_node_version {
        if parse_major_version(version).is_none() {
            anyhow::bail!(ZorxError::Config(format!(
                "Invalid min_node_version '{}'. Expected a version such as 16.0.0.",
                version
            )));
        }
    }
    Ok(())
}
