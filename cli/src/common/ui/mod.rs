//! # Zorx Terminal Output (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! User-facing output for the CLI. Diagnostics go through `tracing`; everything
//! the user is meant to read (progress, warnings, the completion summary, help
//! text) goes through the [`Reporter`] trait defined here.
//!
//! ## Architecture
//!
//! - **`Reporter`**: leveled output (`normal`, `info`, `success`, `warn`, `error`,
//!   `debug`, `header`, `progress`). It is object safe so the generator, the
//!   process executor and the lifecycle manager can share one `Arc<dyn Reporter>`.
//! - **`Console`**: the production reporter. Styles lines with `colored`, writes
//!   warnings and errors to stderr and everything else to stdout. Debug lines are
//!   only shown in development mode.
//! - **`testing::RecordingReporter`** (tests only): captures lines in memory so
//!   tests can assert on what a component reported.
//!
//! ## Usage
//!
//! ```rust
//! let reporter: Arc<dyn Reporter> = Arc::new(Console::new(false));
//! reporter.header("Project Creation");
//! reporter.progress("Creating project structure", 1, 5);
//! reporter.success("Project my-api created successfully!");
//! ```
//!
use colored::Colorize;

/// Width, in cells, of the progress bar drawn by [`render_progress_bar`].
const PROGRESS_BAR_WIDTH: usize = 20;

/// Leveled, user-facing output sink.
pub trait Reporter: Send + Sync {
    /// Plain output with no prefix (subprocess stdout, next steps, help text).
    fn normal(&self, message: &str);
    /// Informational message.
    fn info(&self, message: &str);
    /// Positive outcome.
    fn success(&self, message: &str);
    /// Something the user should look at; the run continues.
    fn warn(&self, message: &str);
    /// A failure (also used for subprocess stderr lines).
    fn error(&self, message: &str);
    /// Troubleshooting detail, shown only in development mode.
    fn debug(&self, message: &str);
    /// Section separator with a title.
    fn header(&self, title: &str);
    /// Step `current` of `total` with a progress bar.
    fn progress(&self, message: &str, current: usize, total: usize);
}

/// Builds a text progress bar such as `[██████████░░░░░░░░░░] (50%)`.
///
/// # Arguments
///
/// * `current` - Completed steps. Values above `total` are clamped.
/// * `total` - Number of steps. `0` yields an empty bar.
///
/// # Returns
///
/// * `String` - The bar, [`PROGRESS_BAR_WIDTH`] cells wide, with a rounded percentage.
pub fn render_progress_bar(current: usize, total: usize) -> String {
    if total == 0 {
        return "[] (0%)".to_string();
    }
    // Round to the nearest cell and percent.
    let current = current.min(total);
    let completed = (PROGRESS_BAR_WIDTH * current + total / 2) / total;
    let percentage = (100 * current + total / 2) / total;
    format!(
        "[{}{}] ({}%)",
        "█".repeat(completed),
        "░".repeat(PROGRESS_BAR_WIDTH - completed),
        percentage
    )
}

/// Production reporter writing styled lines to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    show_debug: bool,
}

impl Console {
    /// Creates a console; `show_debug` is true in development mode.
    pub fn new(show_debug: bool) -> Self {
        Self { show_debug }
    }
}

impl Reporter for Console {
    fn normal(&self, message: &str) {
        println!("{}", message);
    }

    fn info(&self, message: &str) {
        println!("{}", format!("ℹ {}", message).cyan());
    }

    fn success(&self, message: &str) {
        println!("{}", format!("✅ {}", message).green());
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", format!("⚠ {}", message).yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{}", format!("❌ {}", message).red());
    }

    fn debug(&self, message: &str) {
        if self.show_debug {
            println!("{}", format!("🐛 {}", message).magenta());
        }
    }

    fn header(&self, title: &str) {
        // At least 20 wide, and always wider than the title.
        let line = "=".repeat((title.chars().count() + 4).max(20));
        println!();
        println!("{}", line.blue().bold());
        println!("{}", format!("  {}", title).blue().bold());
        println!("{}", line.blue().bold());
        println!();
    }

    fn progress(&self, message: &str, current: usize, total: usize) {
        println!(
            "{}",
            format!("🔄 {} {}", message, render_progress_bar(current, total)).blue()
        );
    }
}
