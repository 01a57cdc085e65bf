//! # Zorx Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Core infrastructure and the generation pipeline:
//! - `config`: user configuration and environment overrides
//! - `error`: the `ZorxError` taxonomy and `Result` alias
//! - `generator`: the ordered project-generation pipeline
//! - `lifecycle`: process termination, panic hook, signal handling
//! - `templating`: content of the generated files
//!
//! ```rust
//! use crate::core::error::{Result, ZorxError};
//! use crate::core::generator::{ProjectGenerator, ScaffoldRequest};
//! use crate::core::lifecycle::{CommandOutcome, Lifecycle};
//! ```
//!
pub mod config;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod templating;
