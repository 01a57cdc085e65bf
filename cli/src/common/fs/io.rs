//! # Zorx Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the project generator. Every function
//! takes an explicit path (the generator never changes the process working
//! directory) and wraps I/O failures with context naming the path involved.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//! - **`ensure_file`**: creates an empty file if nothing is there; an existing file is left alone.
//! - **`write_string_to_file`**: creates parent directories, then overwrites the file.
//! - **`remove_path`**: removes a file or a directory tree.
//! - **`promote_dir`**: claims the final path and moves a fully prepared directory into it.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> anyhow::Result<()> {
//! let staged = Path::new(".zorx-staging-abc/my-api");
//! io::ensure_dir_exists(&staged.join("src/routes"))?;
//! io::write_string_to_file(&staged.join("app.js"), "// server")?;
//! io::promote_dir(staged, Path::new("my-api"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, ZorxError};
use anyhow::Context; // Adds path context to I/O errors
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// Behaves like `mkdir -p`: an existing directory is left untouched.
///
/// # Arguments
///
/// * `path` - The directory that must exist afterwards.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the directory exists or was created.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory (`ZorxError::FileSystem`).
/// - Creating the directory fails (e.g., permissions, read-only filesystem).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        debug!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        // Something else (usually a file) occupies the path.
        anyhow::bail!(ZorxError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Creates an empty file at `path` unless one already exists.
///
/// Parent directories are created as needed. An existing file keeps its
/// content, so calling this twice is harmless.
///
/// # Arguments
///
/// * `path` - The file to create.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` once a regular file exists at `path`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - Something other than a file (e.g., a directory) already exists at `path`.
/// - The parent directory or the file cannot be created.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        debug!("File already exists: {}", path.display());
        return Ok(());
    }
    if path.exists() {
        anyhow::bail!(ZorxError::FileSystem(format!(
            "Path exists but is not a file: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::File::create(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    debug!("Created empty file: {}", path.display());
    Ok(())
}

/// Writes string content to a file, overwriting it if it exists.
///
/// The parent directory is created first when missing.
///
/// # Arguments
///
/// * `path` - The target file.
/// * `content` - The full new content of the file.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the content was written.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Removes whatever is at `path`: a directory tree, a file, or a symlink.
///
/// Symlinks are removed themselves, never followed.
///
/// # Arguments
///
/// * `path` - The path to delete.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if nothing exists at `path` afterwards. A path
///   that was already missing is not an error.
///
/// # Errors
///
/// Returns an `Err` if the path cannot be inspected or removed.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to inspect {}", path.display())))
        }
    };
    if metadata.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory {}", path.display()))?;
    } else {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove file {}", path.display()))?;
    }
    info!("Removed {}", path.display());
    Ok(())
}

/// Moves the prepared directory `from` to the path `to`, which must not exist.
///
/// The target is claimed with a single `create_dir`, which fails atomically
/// when anything (even an empty directory) already occupies `to`. Only then
/// are the staged entries renamed into it. A plain `rename` of the directory
/// would silently replace an empty target on POSIX systems.
///
/// If moving the entries fails, the claimed target is removed again, so the
/// caller sees either a complete project at `to` or nothing.
///
/// # Arguments
///
/// * `from` - The fully prepared directory. Must be on the same filesystem as `to`.
/// * `to` - The final location.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` when every entry of `from` is now under `to`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `to` already exists (`ZorxError::FileSystem`), in which case nothing is touched.
/// - `to` cannot be created, or an entry of `from` cannot be moved.
pub fn promote_dir(from: &Path, to: &Path) -> Result<()> {
    // --- Claim the target ---
    match fs::create_dir(to) {
        Ok(()) => debug!("Claimed target directory {}", to.display()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            anyhow::bail!(ZorxError::FileSystem(format!(
                "Cannot move project into place, {} already exists",
                to.display()
            )));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to create directory {}", to.display())))
        }
    }

    // --- Move the staged entries ---
    if let Err(e) = move_entries(from, to) {
        if let Err(cleanup) = fs::remove_dir_all(to) {
            warn!(
                "Failed to remove partially promoted {}: {}",
                to.display(),
                cleanup
            );
        }
        return Err(e);
    }

    // `from` is empty now; whoever owns the staging area removes it otherwise.
    if let Err(e) = fs::remove_dir(from) {
        debug!("Left empty staging directory {}: {}", from.display(), e);
    }
    info!("Promoted {} to {}", from.display(), to.display());
    Ok(())
}

/// Renames every direct child of `from` into `to`.
fn move_entries(from: &Path, to: &Path) -> Result<()> {
    let entries = fs::read_dir(from)
        .with_context(|| format!("Failed to read staged project {}", from.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read an entry of {}", from.display()))?;
        let destination = to.join(entry.file_name());
        fs::rename(entry.path(), &destination).with_context(|| {
            format!(
                "Failed to move {} to {}",
                entry.path().display(),
                destination.display()
            )
        })?;
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// A directory under `base` holding `app.js` and `src/routes/main.route.js`.
    fn staged_project(base: &Path) -> std::path::PathBuf {
        let staged = base.join(".staged");
        fs::create_dir_all(staged.join("src/routes")).unwrap();
        fs::write(staged.join("app.js"), "content").unwrap();
        fs::write(staged.join("src/routes/main.route.js"), "router").unwrap();
        staged
    }

    #[test]
    fn test_ensure_dir_exists_creates_nested() -> Result<()> {
        let base = tempdir()?;
        let nested = base.path().join("src/controllers");
        ensure_dir_exists(&nested)?;
        assert!(nested.is_dir());
        // Second call is a no-op.
        ensure_dir_exists(&nested)?;
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file() -> Result<()> {
        let base = tempdir()?;
        let file = base.path().join("app.js");
        fs::write(&file, "x")?;
        let err = ensure_dir_exists(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }

    #[test]
    fn test_ensure_file_is_idempotent() -> Result<()> {
        let base = tempdir()?;
        let file = base.path().join("src/routes/main.route.js");
        ensure_file(&file)?;
        assert!(file.is_file());
        assert_eq!(fs::read_to_string(&file)?, "");

        fs::write(&file, "keep me")?;
        ensure_file(&file)?;
        assert_eq!(fs::read_to_string(&file)?, "keep me");
        Ok(())
    }

    #[test]
    fn test_write_string_to_file_overwrites() -> Result<()> {
        let base = tempdir()?;
        let file = base.path().join("nested/out.txt");
        write_string_to_file(&file, "first")?;
        write_string_to_file(&file, "second")?;
        assert_eq!(fs::read_to_string(&file)?, "second");
        Ok(())
    }

    #[test]
    fn test_remove_path_handles_files_dirs_and_missing() -> Result<()> {
        let base = tempdir()?;
        let dir = base.path().join("project");
        fs::create_dir_all(dir.join("src"))?;
        fs::write(dir.join("src/leftover.js"), "old")?;
        remove_path(&dir)?;
        assert!(!dir.exists());

        let file = base.path().join("file");
        fs::write(&file, "x")?;
        remove_path(&file)?;
        assert!(!file.exists());

        remove_path(&base.path().join("never-existed"))?;
        Ok(())
    }

    #[test]
    fn test_promote_dir_moves_whole_tree() -> Result<()> {
        let base = tempdir()?;
        let staged = staged_project(base.path());
        let target = base.path().join("demo");

        promote_dir(&staged, &target)?;
        assert!(!staged.exists());
        assert_eq!(fs::read_to_string(target.join("app.js"))?, "content");
        assert_eq!(
            fs::read_to_string(target.join("src/routes/main.route.js"))?,
            "router"
        );
        Ok(())
    }

    #[test]
    fn test_promote_dir_refuses_non_empty_target() -> Result<()> {
        let base = tempdir()?;
        let staged = staged_project(base.path());
        let target = base.path().join("demo");
        fs::create_dir(&target)?;
        fs::write(target.join("mine.txt"), "user data")?;

        assert!(promote_dir(&staged, &target).is_err());
        assert_eq!(fs::read_to_string(target.join("mine.txt"))?, "user data");
        assert!(staged.join("app.js").is_file());
        Ok(())
    }

    /// An empty directory created at the target after staging began must not
    /// be replaced by the staged project.
    #[test]
    fn test_promote_dir_refuses_empty_target_that_appeared_late() -> Result<()> {
        let base = tempdir()?;
        let staged = staged_project(base.path());
        let target = base.path().join("demo");
        fs::create_dir(&target)?;

        let err = promote_dir(&staged, &target).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZorxError>(),
            Some(ZorxError::FileSystem(msg)) if msg.contains("already exists")
        ));
        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target)?.count(), 0);
        assert!(staged.join("app.js").is_file());
        Ok(())
    }

    #[test]
    fn test_promote_dir_refuses_file_target() -> Result<()> {
        let base = tempdir()?;
        let staged = staged_project(base.path());
        let target = base.path().join("demo");
        fs::write(&target, "not a directory")?;

        assert!(promote_dir(&staged, &target).is_err());
        assert_eq!(fs::read_to_string(&target)?, "not a directory");
        Ok(())
    }
}
