//! # Zorx Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the zorx CLI, a scaffolder for Express.js projects. It handles:
//! - Command-line argument parsing using Clap
//! - Loading configuration and setting up diagnostics
//! - Installing the panic hook and signal watcher
//! - Routing execution to the command handlers and mapping the outcome to an exit code
//!
//! ## Examples
//!
//! ```bash
//! # Extended help
//! zorx help
//!
//! # Create a project with more diagnostics
//! zorx -vv create my-api
//! ```
//!
//! Startup flow:
//! 1. Parse command-line args via Clap
//! 2. Load configuration (file, then environment overrides)
//! 3. Configure logging from `-v` count, development mode and `RUST_LOG`
//! 4. Install the panic hook and signal watcher
//! 5. Check the minimum Node.js version, when configured
//! 6. Dispatch and exit with the command's outcome
//!
use crate::common::ui::{Console, Reporter};
use crate::core::config::{self, Config};
use crate::core::lifecycle::Lifecycle;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // `create` and `help`
mod common; // Shared utilities (fs, process, network, ui, ...)
mod core; // Errors, config, generator, templates, lifecycle

#[derive(Parser, Debug)]
#[command(
    name = "zorx",
    about = "A smart CLI tool for rapid project scaffolding and boilerplate code generation",
    long_about = "Generates a ready-to-run Express.js project skeleton and installs its \
                  dependencies with npm, yarn, pnpm or bun.\n\
                  Run `zorx help` for examples and a quick start.",
    disable_help_subcommand = true,
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new Express.js project.
    Create(commands::create::CreateArgs),
    /// Display help information for zorx.
    Help(commands::help::HelpArgs),
}

/// Exit code for a clap parse result that is not a parsed command line.
///
/// # Arguments
///
/// * `error` - The error returned by `Cli::try_parse`.
///
/// # Returns
///
/// * `i32` - `0` for `--help` and `--version` output, `1` for every usage error.
fn usage_exit_code(error: &clap::Error) -> i32 {
    if error.exit_code() == 0 {
        0
    } else {
        1
    }
}

/// Maps the `-v` count to a filter level; development mode is at least `debug`.
fn log_level(verbose: u8, development: bool) -> &'static str {
    match (verbose, development) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber. `RUST_LOG`, when set, wins over `-v`.
fn init_tracing(verbose: u8, development: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, development)));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    // Usage errors exit with 1 like every other validation failure; help and
    // version output exit with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(&e);
            if let Err(print_err) = e.print() {
                eprintln!("{}", print_err);
            }
            Lifecycle::new(Arc::new(Console::new(false))).graceful_shutdown(None, code)
        }
    };

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(cli.verbose, false);
            tracing::error!("Configuration loading failed: {:?}", e);
            Lifecycle::new(Arc::new(Console::new(false)))
                .graceful_shutdown(Some(&format!("{:#}", e)), 1)
        }
    };
    init_tracing(cli.verbose, config.development);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let reporter: Arc<dyn Reporter> = Arc::new(Console::new(config.development));
    let lifecycle = Lifecycle::new(Arc::clone(&reporter));
    lifecycle.install_panic_hook();
    lifecycle.watch_signals();

    if config.development {
        reporter.debug("Running in development mode");
    }
    check_runtime(&config, &lifecycle).await;

    let outcome = match cli.command {
        Commands::Create(args) => {
            commands::create::handle_create(args, &config, Arc::clone(&reporter)).await
        }
        Commands::Help(args) => commands::help::handle_help(args, reporter.as_ref()),
    };

    if let Some(message) = &outcome.message {
        // `Lifecycle::finish` shows the message to the user.
        tracing::debug!("Command failed: {}", message);
    }
    lifecycle.finish(outcome)
}

/// Exits with code 1 when a configured minimum Node.js version is not met.
async fn check_runtime(config: &Config, lifecycle: &Lifecycle) {
    if let Some(required) = &config.min_node_version {
        if let Err(e) = common::system::ensure_node_version(required).await {
            lifecycle.graceful_shutdown(Some(&format!("{:#}", e)), 1);
        }
    }
}
