//! # Zorx System Checks (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host inspection performed before any command logic runs. The generated
//! projects target Node.js, so when a minimum Node.js version is configured the
//! CLI refuses to start on an older (or missing) `node`.
//!
//! Only major versions are compared: `16.0.0` accepts any `v16.x.y` or newer.
//!
use crate::common::process::capture_stdout;
use crate::core::error::{Result, ZorxError};
use anyhow::{anyhow, Context};
use tracing::debug;

/// Extracts the major component of a version string such as `v18.19.0` or `16`.
///
/// # Arguments
///
/// * `version` - A version, optionally prefixed with `v`.
///
/// # Returns
///
/// * `Option<u64>` - The major version, or `None` if the first component is
///   not a number.
pub fn parse_major_version(version: &str) -> Option<u64> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .next()?
        .parse()
        .ok()
}

/// Compares an installed version against the required minimum by major version.
///
/// # Arguments
///
/// * `found` - The installed version, e.g. `v18.19.0`.
/// * `required` - The configured minimum, e.g. `16.0.0`.
///
/// # Returns
///
/// * `Result<bool>` - `true` if the major of `found` is at least that of `required`.
///
/// # Errors
///
/// Returns an `Err` if either version has no parseable major component.
pub fn meets_minimum(found: &str, required: &str) -> Result<bool> {
    let required_major = parse_major_version(required).ok_or_else(|| {
        ZorxError::Config(format!("Invalid minimum Node.js version '{}'", required))
    })?;
    let found_major = parse_major_version(found)
        .ok_or_else(|| anyhow!("Unrecognized `node --version` output '{}'", found))?;
    Ok(found_major >= required_major)
}

/// Fails with `ZorxError::RuntimeVersion` when the installed `node` is older than `required`.
///
/// # Arguments
///
/// * `required` - The configured minimum version.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if `node` is new enough.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `node` is missing or `node --version` fails.
/// - Its output is not a recognizable version.
/// - The installed major version is lower than the required one (`ZorxError::RuntimeVersion`).
pub async fn ensure_node_version(required: &str) -> Result<()> {
    let found = capture_stdout("node", &["--version"])
        .await
        .context("Failed to determine the installed Node.js version")?;
    debug!("Detected Node.js {}, minimum {}", found, required);
    if !meets_minimum(&found, required)? {
        anyhow::bail!(ZorxError::RuntimeVersion {
            required: required.to_string(),
            // Reported without the `v` so it reads like `required`.
            found: found.trim_start_matches('v').to_string(),
        });
    }
    Ok(())
}
