//! # Zorx Help Command
//!
//! File: cli/src/commands/help.rs
//!
//! ## Overview
//!
//! `zorx help` prints an extended guide (usage, options, examples, quick start,
//! upcoming features, support links) that goes beyond clap's generated
//! `--help`. `zorx help <command>` prints the reference for one command.
//!
use crate::common::ui::Reporter;
use crate::core::lifecycle::CommandOutcome;
use clap::Parser;

/// Project home, shown in the support section.
const REPOSITORY_URL: &str = "https://github.com/Dannys-notepad/zorx";

/// Arguments of `zorx help`.
#[derive(Parser, Debug, Clone)]
#[command(about = "Display help information for zorx")]
pub struct HelpArgs {
    /// Command to show detailed help for.
    pub command: Option<String>,
}

/// Handles `zorx help [command]`. Always succeeds.
///
/// # Arguments
///
/// * `args` - The optional command to describe.
/// * `reporter` - Receives the help text.
///
/// # Returns
///
/// * `CommandOutcome` - Always exit code 0, even for an unknown command.
pub fn handle_help(args: HelpArgs, reporter: &dyn Reporter) -> CommandOutcome {
    match args.command.as_deref() {
        None => print_overview(reporter),
        Some(name) => print_command_help(name, reporter),
    }
    CommandOutcome::success()
}

/// The full guide printed by a bare `zorx help`.
fn print_overview(r: &dyn Reporter) {
    r.normal("ZORX CLI");
    r.info("A smart CLI tool for rapid project scaffolding and boilerplate code generation");

    r.header("USAGE");
    r.normal("  zorx <command> [options]");

    r.header("COMMANDS");
    r.normal("  create <project-name>    Create a new project");
    r.normal("  help [command]           Show this help message");
    r.normal("  --version                Show version information");

    r.header("CREATE COMMAND");
    r.normal("  zorx create <project-name> [options]");

    r.header("OPTIONS");
    r.normal("  --force                  Override and recreate directory if it exists");
    r.normal("  --port <port>            Specify custom server port (default: 3000)");
    r.normal("  --skip-install           Skip dependency installation");
    r.normal("  --install <packages>     Extra packages (comma separated)");
    r.normal("  --pm <pm>                Package manager (npm, yarn, pnpm, bun)");
    r.normal("  --timeout <secs>         Limit for each package-manager command (0 = none)");
    r.normal("  -v, --verbose            Increase diagnostic output (repeatable)");

    r.header("EXAMPLES");
    r.normal("  # Basic project creation");
    r.success("  zorx create my-api");
    r.normal("  # Project with additional packages");
    r.success("  zorx create my-api --install \"morgan,zod\"");
    r.normal("  # Skip installation and use specific package manager");
    r.success("  zorx create my-api --skip-install --pm pnpm");

    r.header("QUICK START");
    r.normal("  1. zorx create my-project");
    r.normal("  2. cd my-project");
    r.normal("  3. npm run dev");
    r.normal("  4. Open http://localhost:3000");

    print_coming_features(r);

    r.header("SUPPORT");
    r.info(&format!("  GitHub: {}", REPOSITORY_URL));
    r.info(&format!("  Issues: {}/issues", REPOSITORY_URL));
}

/// Reserved options, shown as warnings.
fn print_coming_features(r: &dyn Reporter) {
    r.header("COMING FEATURES");
    r.warn("  --ts                     Use TypeScript template (coming soon)");
    r.warn("  --template <template>    Use specific project template (coming soon)");
    r.warn("  --git                    Initialize git repository (coming soon)");
}

/// Details for one command; unknown names get a warning and a pointer back.
fn print_command_help(name: &str, r: &dyn Reporter) {
    match name {
        "create" => {
            r.header("CREATE COMMAND DETAILS");
            r.info("Create a new Express.js project with customizable options.");

            r.header("ARGUMENTS");
            r.normal("  project-name          Required. Name of the project to create");

            r.header("OPTIONS");
            r.normal("  --force               Override existing directory");
            r.normal("  --port <number>       Server port (default: 3000)");
            r.normal("  --skip-install        Skip dependency installation");
            r.normal("  --install <list>      Additional packages (comma-separated)");
            r.normal("  --pm, --package-manager <pm>");
            r.normal("                        npm, yarn, pnpm, or bun (default: npm)");
            r.normal("  --timeout <secs>      Per-command limit, env ZORX_COMMAND_TIMEOUT");

            print_coming_features(r);

            r.header("EXAMPLES");
            r.success("  zorx create my-app");
            r.success("  zorx create my-api --install \"morgan,zod\"");
            r.success("  zorx create my-project --skip-install --pm yarn");
        }
        other => {
            r.warn(&format!("No detailed help available for: {}", other));
            r.info("Run `zorx help` for general usage information.");
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ui::testing::{RecordingReporter, Tone};

    #[test]
    fn test_overview_sections() {
        let reporter = RecordingReporter::new();
        let outcome = handle_help(HelpArgs { command: None }, &reporter);
        assert_eq!(outcome, CommandOutcome::success());

        let headers = reporter.messages(Tone::Header);
        for section in ["USAGE", "COMMANDS", "OPTIONS", "EXAMPLES", "QUICK START", "SUPPORT"] {
            assert!(headers.iter().any(|h| h == section), "missing {}", section);
        }
        assert!(reporter.contains(Tone::Info, "https://github.com/Dannys-notepad/zorx/issues"));
        assert!(reporter.contains(Tone::Warn, "--ts"));
    }

    #[test]
    fn test_create_details() {
        let reporter = RecordingReporter::new();
        handle_help(
            HelpArgs {
                command: Some("create".into()),
            },
            &reporter,
        );
        assert!(reporter.contains(Tone::Header, "CREATE COMMAND DETAILS"));
        assert!(reporter.contains(Tone::Normal, "project-name"));
        assert!(reporter.contains(Tone::Success, "zorx create my-app"));
    }

    #[test]
    fn test_unknown_command() {
        let reporter = RecordingReporter::new();
        let outcome = handle_help(
            HelpArgs {
                command: Some("deploy".into()),
            },
            &reporter,
        );
        assert_eq!(outcome.exit_code, 0);
        assert_eq!(
            reporter.messages(Tone::Warn),
            vec!["No detailed help available for: deploy".to_string()]
        );
        assert!(reporter.contains(Tone::Info, "zorx help"));
    }
}
