//! # Zorx Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! ## Overview
//!
//! Implements `zorx create`, which generates an Express.js project skeleton in
//! the current directory and installs its dependencies. The handler:
//! - Turns the raw flags into a validated `ScaffoldRequest`
//! - Picks the package manager (`--pm`, else config, else npm)
//! - Wires the real process runner and connectivity probe into the generator
//!
//! ## Examples
//!
//! ```bash
//! # Basic project creation
//! zorx create my-api
//!
//! # Extra packages, custom port, yarn
//! zorx create my-api --install "morgan,zod" --port 8080 --pm yarn
//!
//! # Recreate an existing directory without installing anything
//! zorx create my-api --force --skip-install
//! ```
//!
use crate::common::network::DnsProbe;
use crate::common::process::SystemRunner;
use crate::common::ui::Reporter;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::generator::{
    parse_package_list, parse_port, PackageManager, ProjectGenerator, ScaffoldRequest,
};
use crate::core::lifecycle::CommandOutcome;
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Arguments of `zorx create`.
#[derive(Parser, Debug, Clone)]
#[command(about = "Create a new Express.js project")]
pub struct CreateArgs {
    /// Name of the project directory to create.
    pub project_name: String,

    /// Override and recreate the directory if it exists.
    #[arg(long)]
    pub force: bool,

    /// Use the TypeScript template (not yet supported).
    #[arg(long)]
    pub ts: bool,

    /// Port the generated server listens on.
    #[arg(long, default_value = "3000")]
    pub port: String,

    /// Skip dependency installation.
    #[arg(long)]
    pub skip_install: bool,

    /// Extra packages to install (comma separated).
    #[arg(long, value_name = "PACKAGES")]
    pub install: Option<String>,

    /// Package manager to use: npm, yarn, pnpm or bun.
    #[arg(long = "pm", visible_alias = "package-manager", value_name = "PM")]
    pub package_manager: Option<String>,

    /// Use a specific project template (not yet supported).
    #[arg(long)]
    pub template: Option<String>,

    /// Initialize a git repository (not yet supported).
    #[arg(long)]
    pub git: bool,

    /// Seconds each package-manager command may run; 0 disables the limit.
    #[arg(long, env = "ZORX_COMMAND_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Builds the request from the parsed flags, falling back to `config` defaults.
///
/// # Arguments
///
/// * `args` - The parsed `zorx create` flags.
/// * `config` - Supplies the package manager when `--pm` is absent.
///
/// # Returns
///
/// * `Result<ScaffoldRequest>` - The request handed to the generator.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `--pm` names an unsupported package manager (`ZorxError::UnknownPackageManager`).
/// - `--port` is not an integer in `1..=65535` (`ZorxError::InvalidPort`).
pub fn build_request(args: &CreateArgs, config: &Config) -> Result<ScaffoldRequest> {
    let package_manager = match &args.package_manager {
        Some(raw) => raw.parse::<PackageManager>()?,
        None => config.package_manager,
    };

    // The project name itself is validated by the generator, before any write.
    let mut request = ScaffoldRequest::new(args.project_name.clone());
    request.force = args.force;
    request.port = parse_port(&args.port)?;
    request.skip_install = args.skip_install;
    request.extra_packages = args
        .install
        .as_deref()
        .map(parse_package_list)
        .unwrap_or_default();
    request.package_manager = package_manager;
    request.typescript = args.ts;
    request.template = args.template.clone();
    request.git = args.git;
    Ok(request)
}

/// Effective subprocess limit; `None` means unlimited.
///
/// `--timeout` (or `ZORX_COMMAND_TIMEOUT`) wins over `command_timeout_secs`
/// from the config. A value of 0 disables the limit.
pub fn command_timeout(args: &CreateArgs, config: &Config) -> Option<Duration> {
    match args.timeout.unwrap_or(config.command_timeout_secs) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

/// Handles `zorx create`.
///
/// The project is created in the current working directory, which is read once
/// here and passed down explicitly.
///
/// # Arguments
///
/// * `args` - The parsed flags.
/// * `config` - Loaded configuration.
/// * `reporter` - Shared with the process runner and the generator.
///
/// # Returns
///
/// * `CommandOutcome` - Exit code 0 on success, 1 with the error chain otherwise.
pub async fn handle_create(
    args: CreateArgs,
    config: &Config,
    reporter: Arc<dyn Reporter>,
) -> CommandOutcome {
    debug!("Handling create command with args: {:?}", args);

    let request = match build_request(&args, config) {
        Ok(request) => request,
        Err(e) => return CommandOutcome::failure(format!("{:#}", e)),
    };
    let base_dir = match std::env::current_dir().context("Failed to get current directory") {
        Ok(dir) => dir,
        Err(e) => return CommandOutcome::failure(format!("{:#}", e)),
    };

    let runner = SystemRunner::new(Arc::clone(&reporter), command_timeout(&args, config));
    let generator = ProjectGenerator::new(runner, DnsProbe, reporter, base_dir);
    generator.run(&request).await
}
