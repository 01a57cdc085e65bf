//! # Zorx Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by every part of the zorx CLI.
//! Failures are raised as typed `ZorxError` values and carried through
//! `anyhow::Error`, which lets each layer attach context while the command
//! layer can still downcast to decide what went wrong.
//!
//! ## Architecture
//!
//! The variants fall into three groups:
//! - **User errors**: bad input or a target that is already taken
//!   (`TargetExists`, `InvalidProjectName`, `InvalidPort`, `UnknownPackageManager`).
//! - **Environment errors**: the machine cannot do what was asked
//!   (`FileSystem`, `MissingExecutable`, `Config`, `RuntimeVersion`).
//! - **Subprocess errors**: the package manager ran but did not succeed
//!   (`Subprocess`, `Timeout`).
//!
//! Missing connectivity is not an error: it downgrades installation to a
//! skipped step instead of failing the run. Panics are handled by the lifecycle
//! panic hook, not by this type.
//!
//! ## Examples
//!
//! ```rust
//! // Return a typed error
//! anyhow::bail!(ZorxError::TargetExists { name: "my-api".into() });
//!
//! // Add context to a filesystem call
//! fs::create_dir_all(&path)
//!     .with_context(|| format!("Failed to create directory {}", path.display()))?;
//!
//! // Inspect the cause
//! if let Some(ZorxError::Subprocess { exit_code, .. }) = err.downcast_ref::<ZorxError>() {
//!     println!("package manager exited with {:?}", exit_code);
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the zorx application.
#[derive(Error, Debug)]
pub enum ZorxError {
    #[error("Directory '{name}' already exists. Use --force to override it.")]
    TargetExists { name: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid port '{0}'. Expected a number between 1 and 65535.")]
    InvalidPort(String),

    #[error("Unknown package manager '{0}'. Expected one of: npm, yarn, pnpm, bun.")]
    UnknownPackageManager(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Could not find '{program}' on PATH. Is it installed?")]
    MissingExecutable { program: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Node.js {required} or higher is required. Current version: {found}")]
    RuntimeVersion { required: String, found: String },

    #[error("{command} failed with exit code {}", describe_exit_code(.exit_code))]
    Subprocess {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("{command} did not finish within {seconds}s and was stopped")]
    Timeout { command: String, seconds: u64 },
}

/// Renders an exit code, falling back to a note when the child was killed by a signal.
fn describe_exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
