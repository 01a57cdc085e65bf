//! # Zorx CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`: locating the
//! compiled `zorx` binary, isolating it from the user's configuration, and
//! putting a scripted stand-in for `npm` on `PATH`.
//!

// Each test crate uses a different subset of these helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Returns a `Command` for the `zorx` binary under test.
///
/// The command ignores any user config file and the environment variables that
/// change zorx's behavior, so results do not depend on the host.
pub fn zorx_cmd() -> Command {
    let mut cmd = Command::cargo_bin("zorx").expect("Failed to find zorx binary for testing");
    cmd.env("ZORX_CONFIG", "/nonexistent/zorx/config.toml")
        .env_remove("ZORX_ENV")
        .env_remove("NODE_ENV")
        .env_remove("ZORX_MIN_NODE_VERSION")
        .env_remove("ZORX_COMMAND_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Shell stand-in for `npm`.
///
/// `init` writes a minimal `package.json` into the working directory, or exits
/// with `$FAKE_NPM_INIT_EXIT` when that is set. Every invocation is appended to
/// `$FAKE_NPM_LOG` when set.
const FAKE_NPM_SCRIPT: &str = r#"#!/bin/sh
if [ -n "$FAKE_NPM_LOG" ]; then
  echo "$PWD $*" >> "$FAKE_NPM_LOG"
fi
if [ "$1" = "init" ]; then
  if [ -n "$FAKE_NPM_INIT_EXIT" ]; then
    echo "npm ERR! simulated init failure" >&2
    exit "$FAKE_NPM_INIT_EXIT"
  fi
  printf '{\n  "name": "placeholder",\n  "version": "1.0.0"\n}\n' > package.json
  echo "Wrote to $PWD/package.json"
  exit 0
fi
echo "added $# packages"
exit 0
"#;

/// Writes the fake `npm` into `bin_dir` and returns it.
#[cfg(unix)]
pub fn install_fake_npm(bin_dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin_dir).expect("Failed to create fake bin directory");
    let path = bin_dir.join("npm");
    std::fs::write(&path, FAKE_NPM_SCRIPT).expect("Failed to write fake npm");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake npm executable");
    path
}

/// `PATH` with `dir` in front of the inherited value.
pub fn path_with(dir: &Path) -> String {
    match std::env::var("PATH") {
        Ok(existing) if !existing.is_empty() => format!("{}:{}", dir.display(), existing),
        _ => dir.display().to_string(),
    }
}
