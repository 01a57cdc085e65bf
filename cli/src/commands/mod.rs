//! # Zorx Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level commands of the zorx CLI. Each module defines a clap argument
//! struct and a handler that `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `create`: scaffold a new Express project and install its dependencies
//! - `help`: the extended help banner and per-command reference
//!
//! Handlers return a `CommandOutcome`; only `main` turns it into an exit code.
//!

/// `zorx create <project-name>`.
pub mod create;
/// `zorx help [command]`.
pub mod help;
