//! # Scaffold Request Types
//!
//! File: cli/src/core/generator/request.rs
//!
//! The inputs of one generation run: what to build (`ScaffoldRequest`), with which
//! package manager (`PackageManager`), and where (`ProjectTarget`).
//!
use crate::core::error::{Result, ZorxError};
use serde::Deserialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Packages every generated project depends on, installed before any extras.
pub const DEFAULT_PACKAGES: [&str; 5] = ["express", "cors", "helmet", "dotenv", "nodemon"];

/// Default port written into `app.js`.
pub const DEFAULT_PORT: u16 = 3000;

/// Supported Node.js package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable looked up on PATH.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments that create a manifest without prompting.
    pub fn init_args(&self) -> Vec<String> {
        match self {
            // `pnpm init` never prompts and rejects `-y` in recent releases.
            PackageManager::Pnpm => vec!["init".to_string()],
            _ => vec!["init".to_string(), "-y".to_string()],
        }
    }

    /// Subcommand that adds named packages to the project.
    pub fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
        }
    }

    /// Full argument list for installing `packages`.
    ///
    /// # Arguments
    ///
    /// * `packages` - Package names in install order.
    ///
    /// # Returns
    ///
    /// * `Vec<String>` - The install subcommand followed by `packages`,
    ///   e.g. `["add", "express", "cors"]` for yarn.
    pub fn install_args(&self, packages: &[String]) -> Vec<String> {
        std::iter::once(self.install_subcommand().to_string())
            .chain(packages.iter().cloned())
            .collect()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = ZorxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(ZorxError::UnknownPackageManager(s.to_string())),
        }
    }
}

/// Everything one `create` run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub force: bool,
    pub port: u16,
    pub skip_install: bool,
    pub extra_packages: Vec<String>,
    pub package_manager: PackageManager,
    /// Reserved: `--ts`.
    pub typescript: bool,
    /// Reserved: `--template <name>`.
    pub template: Option<String>,
    /// Reserved: `--git`.
    pub git: bool,
}

impl ScaffoldRequest {
    /// A request with every option at its default.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            force: false,
            port: DEFAULT_PORT,
            skip_install: false,
            extra_packages: Vec::new(),
            package_manager: PackageManager::Npm,
            typescript: false,
            template: None,
            git: false,
        }
    }

    /// Default packages followed by the requested extras, in order.
    pub fn dependency_list(&self) -> Vec<String> {
        DEFAULT_PACKAGES
            .iter()
            .map(|p| p.to_string())
            .chain(self.extra_packages.iter().cloned())
            .collect()
    }
}

/// Parses a `--port` value.
///
/// Surrounding whitespace is ignored. The port is not checked for availability.
///
/// # Arguments
///
/// * `raw` - The value as typed on the command line.
///
/// # Returns
///
/// * `Result<u16>` - The port, in `1..=65535`.
///
/// # Errors
///
/// Returns an `Err` (`ZorxError::InvalidPort`) if `raw` is not an integer in
/// `1..=65535`.
pub fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ZorxError::InvalidPort(raw.to_string()).into()),
    }
}

/// Splits a comma-separated `--install` value, dropping blank entries.
///
/// # Arguments
///
/// * `raw` - For example `"morgan, zod"`.
///
/// # Returns
///
/// * `Vec<String>` - Trimmed package names in their original order. Duplicates
///   are kept.
pub fn parse_package_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks that `name` is a single, normal path segment.
///
/// # Arguments
///
/// * `name` - The project name from the command line.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if `name` can be joined onto a base directory
///   without leaving it.
///
/// # Errors
///
/// Returns an `Err` (`ZorxError::InvalidProjectName`) if `name` is empty,
/// contains a path separator or NUL, or is `.`, `..` or a drive prefix.
pub fn validate_project_name(name: &str) -> Result<()> {
    let reject = |reason: &str| -> Result<()> {
        Err(ZorxError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into())
    };

    if name.trim().is_empty() {
        return reject("the name must not be empty");
    }
    if name.contains(['/', '\\']) {
        return reject("the name must not contain path separators");
    }
    if name.contains('\0') {
        return reject("the name must not contain NUL bytes");
    }
    // Exactly one component, and it must be the whole name.
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(segment)), None) if segment == name => Ok(()),
        _ => reject("the name must be a plain directory name (no '.', '..' or drive prefixes)"),
    }
}

/// The directory a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    pub name: String,
    pub path: PathBuf,
    pub existed_at_start: bool,
}

impl ProjectTarget {
    /// Validates `name` and joins it onto `base_dir`.
    ///
    /// Records whether anything (including a broken symlink) is already there.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - The directory the project is created in.
    /// * `name` - The project name.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if `name` fails [`validate_project_name`].
    pub fn resolve(base_dir: &Path, name: &str) -> Result<Self> {
        validate_project_name(name)?;
        let path = base_dir.join(name);
        // `symlink_metadata` so a dangling link still counts as existing.
        let existed_at_start = path.symlink_metadata().is_ok();
        Ok(Self {
            name: name.to_string(),
            path,
            existed_at_start,
        })
    }
}
