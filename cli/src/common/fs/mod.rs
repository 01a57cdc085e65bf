//! # Zorx Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Entry point for filesystem helpers. Functionality lives in submodules and is
//! imported from there, e.g. `use crate::common::fs::io;`.
//!
//! - **`io`**: directory/file creation, overwriting writes, recursive removal and
//!   the rename used to promote a staged project.
//!

/// Basic file I/O used by the project generator (`ensure_dir_exists`, `ensure_file`, `promote_dir`, ...).
pub mod io;
