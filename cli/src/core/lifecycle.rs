//! # Zorx Process Lifecycle
//!
//! File: cli/src/core/lifecycle.rs
//!
//! ## Overview
//!
//! The one place allowed to end the process. Everything else returns results;
//! `main` hands the final [`CommandOutcome`] to [`Lifecycle::finish`].
//!
//! ## Architecture
//!
//! - **`CommandOutcome`**: exit code (0 or 1) plus an optional message.
//! - **`Lifecycle`**: built once in `main` around the shared reporter.
//!   - `graceful_shutdown(message, code)`: log (success styling for 0, error
//!     styling otherwise), flush, exit.
//!   - `install_panic_hook()`: any panic, in `main` or in a spawned task, is
//!     logged with its location and a backtrace, then the process exits 1 after
//!     a short flush delay.
//!   - `watch_signals()`: Ctrl+C / SIGTERM trigger a graceful shutdown with code 0.
//!
//! Signals do not roll back filesystem work in progress. The generator only
//! promotes a fully staged project, so an interrupted run leaves at most a
//! hidden `.zorx-staging-*` directory behind.
//!
use crate::common::ui::Reporter;
use std::backtrace::Backtrace;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Pause before exiting after a panic so buffered output reaches the terminal.
const FATAL_FLUSH_DELAY: Duration = Duration::from_millis(100);

/// Final result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
    pub message: Option<String>,
}

impl CommandOutcome {
    /// Exit 0 without a message.
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            message: None,
        }
    }

    /// Exit 1 with the cause.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: Some(message.into()),
        }
    }
}

/// Owns process termination.
#[derive(Clone)]
pub struct Lifecycle {
    reporter: Arc<dyn Reporter>,
}

impl Lifecycle {
    /// Creates a lifecycle that reports through `reporter`.
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }

    /// Logs `message` styled by `code` without exiting.
    pub fn announce(&self, message: Option<&str>, code: i32) {
        if let Some(message) = message {
            if code == 0 {
                self.reporter.success(message);
            } else {
                self.reporter.error(message);
            }
        }
    }

    /// Logs `message`, flushes output and exits with `code`.
    ///
    /// # Arguments
    ///
    /// * `message` - Shown with success styling for code 0, error styling
    ///   otherwise. `None` exits silently.
    /// * `code` - The process exit code.
    ///
    /// # Returns
    ///
    /// Never returns.
    pub fn graceful_shutdown(&self, message: Option<&str>, code: i32) -> ! {
        self.announce(message, code);
        info!("Exiting with code {}", code);
        flush_output();
        std::process::exit(code)
    }

    /// Exits according to a command's outcome.
    pub fn finish(&self, outcome: CommandOutcome) -> ! {
        self.graceful_shutdown(outcome.message.as_deref(), outcome.exit_code)
    }

    /// Turns every panic into a logged fatal error and exit code 1.
    ///
    /// The hook prints the panic location, the payload and a backtrace, then
    /// waits [`FATAL_FLUSH_DELAY`] so the output is not cut off.
    pub fn install_panic_hook(&self) {
        let reporter = Arc::clone(&self.reporter);
        std::panic::set_hook(Box::new(move |info| {
            // Panic payloads are `&str` or `String` in practice.
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());
            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string());

            error!("Fatal error at {}: {}", location, payload);
            reporter.error(&fatal_message(&payload, &location));
            eprintln!("Stack trace:\n{}", Backtrace::force_capture());

            flush_output();
            std::thread::sleep(FATAL_FLUSH_DELAY);
            std::process::exit(1);
        }));
    }

    /// Spawns a task that shuts down gracefully on Ctrl+C or SIGTERM.
    ///
    /// Must be called inside the tokio runtime. The exit code is 0.
    pub fn watch_signals(&self) {
        let lifecycle = self.clone();
        tokio::spawn(async move {
            let reason = wait_for_signal().await;
            lifecycle.graceful_shutdown(Some(reason), 0);
        });
    }
}

/// User-facing line for a panic.
fn fatal_message(payload: &str, location: &str) -> String {
    format!("Fatal Error (panic at {}): {}", location, payload)
}

/// Flushes both standard streams, ignoring errors.
fn flush_output() {
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
}

/// Resolves with a description of the first termination signal received.
async fn wait_for_signal() -> &'static str {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "Process interrupted (SIGINT)",
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<&'static str>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                "Process terminated (SIGTERM)"
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<&'static str>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    tokio::select! {
        reason = ctrl_c => reason,
        reason = terminate => reason,
    }
}
