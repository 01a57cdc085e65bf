//! # Zorx Process Execution (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external programs (the package managers, `node --version`) on behalf of
//! the CLI. Output is streamed line by line into the [`Reporter`] as it arrives:
//! stdout at normal level, stderr at error level.
//!
//! ## Architecture
//!
//! - **`CommandRunner`**: the seam used by the project generator. Tests swap in a
//!   runner that records invocations instead of spawning anything.
//! - **`SystemRunner`**: spawns with `tokio::process::Command` in an explicit
//!   working directory, drains both pipes concurrently, and maps the result:
//!   - exit code 0: `Ok(())`
//!   - non-zero exit: `ZorxError::Subprocess`
//!   - program not on PATH: `ZorxError::MissingExecutable`
//!   - configured timeout elapsed: the child is killed, `ZorxError::Timeout`
//! - **`capture_stdout`**: one-shot helper returning a command's trimmed stdout.
//!
//! Nothing here retries.
//!
use crate::common::ui::Reporter;
use crate::core::error::{Result, ZorxError};
use anyhow::{anyhow, Context};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Runs an external program to completion.
///
/// The project generator is generic over this trait so tests can observe the
/// exact package-manager invocations without spawning anything.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd`; succeeds only on exit code 0.
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Which reporter level a child stream is forwarded to.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Spawns real child processes.
#[derive(Clone)]
pub struct SystemRunner {
    reporter: Arc<dyn Reporter>,
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Creates a runner that streams child output into `reporter`.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Receives every stdout and stderr line.
    /// * `timeout` - Per-command limit. `None` lets a child run for as long as it needs.
    pub fn new(reporter: Arc<dyn Reporter>, timeout: Option<Duration>) -> Self {
        Self { reporter, timeout }
    }
}

impl CommandRunner for SystemRunner {
    /// Spawns `program` in `cwd` and streams its output until it exits.
    ///
    /// stdin is closed. stdout lines go to the reporter's normal level and
    /// stderr lines to its error level, as they arrive. Both pipes are drained
    /// concurrently so a chatty child cannot block on a full pipe.
    ///
    /// # Arguments
    ///
    /// * `program` - The executable, resolved through `PATH`.
    /// * `args` - Arguments passed verbatim.
    /// * `cwd` - Working directory of the child. The CLI's own working
    ///   directory is never changed.
    ///
    /// # Returns
    ///
    /// * `Result<()>` - `Ok(())` if and only if the child exited with code 0.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if:
    /// - `program` is not on `PATH` (`ZorxError::MissingExecutable`).
    /// - The child exits with a non-zero code or is killed by a signal (`ZorxError::Subprocess`).
    /// - The configured timeout elapses; the child is killed first (`ZorxError::Timeout`).
    /// - Spawning or waiting fails for another OS reason.
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        // Must not be called `display`: the tracing macros shadow that name.
        let command_line = display_command(program, args);
        info!("Executing command: {} (in {})", command_line, cwd.display());

        // --- Configure and spawn the child ---
        let mut command = Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| spawn_error(program, e))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow!("Failed to capture stdout of '{}'", command_line))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| anyhow!("Failed to capture stderr of '{}'", command_line))?;

        // --- Stream output while waiting for exit ---
        let reporter = self.reporter.as_ref();
        let wait = async {
            let (out, err) = tokio::join!(
                forward_lines(stdout, reporter, Stream::Stdout),
                forward_lines(stderr, reporter, Stream::Stderr)
            );
            if let Err(e) = out.and(err) {
                warn!("Lost output from '{}': {}", command_line, e);
            }
            child.wait().await
        };

        // --- Apply the optional time limit ---
        let status: std::io::Result<ExitStatus> = match self.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, wait).await;
                match waited {
                    Ok(status) => status,
                    Err(_) => {
                        warn!("'{}' exceeded {:?}, killing it", command_line, limit);
                        if let Err(e) = child.kill().await {
                            warn!("Failed to kill '{}': {}", command_line, e);
                        }
                        return Err(anyhow!(ZorxError::Timeout {
                            command: command_line,
                            seconds: limit.as_secs(),
                        }));
                    }
                }
            }
            None => wait.await,
        };
        let status = status.with_context(|| format!("Failed to wait for '{}'", command_line))?;

        // --- Map the exit status ---
        if !status.success() {
            return Err(anyhow!(ZorxError::Subprocess {
                command: command_line,
                exit_code: status.code(),
            }));
        }
        debug!("Command '{}' completed successfully.", command_line);
        Ok(())
    }
}

/// Runs `program` with `args` and returns its trimmed stdout.
///
/// Used for quick version checks such as `node --version`; stderr is discarded.
///
/// # Arguments
///
/// * `program` - The executable, resolved through `PATH`.
/// * `args` - Arguments passed verbatim.
///
/// # Returns
///
/// * `Result<String>` - The child's stdout, lossily decoded and trimmed.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `program` is not on `PATH` (`ZorxError::MissingExecutable`).
/// - The child exits with a non-zero code (`ZorxError::Subprocess`).
pub async fn capture_stdout(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| spawn_error(program, e))?;

    if !output.status.success() {
        let owned: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        return Err(anyhow!(ZorxError::Subprocess {
            command: display_command(program, &owned),
            exit_code: output.status.code(),
        }));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Joins a program and its arguments for messages.
///
/// # Arguments
///
/// * `program` - The executable name.
/// * `args` - Its arguments.
///
/// # Returns
///
/// * `String` - `program` alone, or `program` followed by the space-separated arguments.
pub fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Maps a spawn failure; a missing program becomes `MissingExecutable`.
fn spawn_error(program: &str, e: std::io::Error) -> anyhow::Error {
    if e.kind() == std::io::ErrorKind::NotFound {
        anyhow!(ZorxError::MissingExecutable {
            program: program.to_string(),
        })
    } else {
        anyhow::Error::new(e).context(format!("Failed to execute command '{}'", program))
    }
}

/// Forwards each non-empty line of `stream` to the reporter until EOF.
///
/// Lines are split on raw `\n` bytes and decoded lossily, so output that is
/// not valid UTF-8 is still forwarded and the pipe stays drained until the
/// child closes it.
///
/// # Errors
///
/// Returns an `Err` only when reading from the pipe itself fails.
async fn forward_lines<R: AsyncRead + Unpin>(
    stream: R,
    reporter: &dyn Reporter,
    kind: Stream,
) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        // Zero bytes read means the child closed its end.
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end();
        if line.is_empty() {
            continue;
        }
        match kind {
            Stream::Stdout => reporter.normal(line),
            Stream::Stderr => reporter.error(line),
        }
    }
    Ok(())
}
