//! # Zorx Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the commands and the generator, kept apart from
//! command logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: directory/file creation, removal and promotion of staged projects.
//! - **`network`**: the connectivity probe gating dependency installation.
//! - **`process`**: running package managers with streamed output and timeouts.
//! - **`system`**: the minimum Node.js version check.
//! - **`ui`**: the `Reporter` trait and the styled terminal console.
//!
//! ```rust
//! use crate::common::{fs::io, network::DnsProbe, process::SystemRunner, ui::Console};
//! ```
//!

/// Filesystem helpers.
pub mod fs;
/// Connectivity probe.
pub mod network;
/// External process execution.
pub mod process;
/// Host checks run before any command.
pub mod system;
/// User-facing terminal output.
pub mod ui;
