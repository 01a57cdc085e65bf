//! # Zorx Project Generator
//!
//! File: cli/src/core/generator/mod.rs
//!
//! ## Overview
//!
//! The project-generation pipeline behind `zorx create`. It turns a
//! [`ScaffoldRequest`] into an Express project on disk and, optionally, installs
//! its dependencies with the chosen package manager.
//!
//! ## Architecture
//!
//! Stages run strictly in order; each one finishes before the next begins:
//!
//! 1. **Validate**: check the name, resolve the target, refuse an existing
//!    directory unless `--force` is given, announce reserved options.
//! 2. **Scaffold directories**: the seven `src/...` directories.
//! 3. **Scaffold files**: empty placeholders for the three source files.
//! 4. **Write templates**: rendered content from `core::templating`.
//! 5. **Init package manager**: `<pm> init` in the project root.
//! 6. **Patch manifest**: replace the generated `package.json` with ours.
//! 7. **Install** (unless `--skip-install`): probe connectivity, then
//!    `<pm> install|add <defaults> <extras>`; offline only warns.
//! 8. **Completed**: success summary and next steps.
//!
//! Stages 2 to 6 run inside a hidden staging directory created next to the
//! target. Only after stage 6 succeeds is the project moved into place, so a
//! failure leaves no half-built project behind. With `--force` the existing
//! directory is removed at that same point, never earlier, so a failed run keeps
//! the user's previous directory. Installation runs in the final location; its
//! failure is still fatal even though the scaffold exists.
//!
//! The generator is constructed with its collaborators (`CommandRunner`,
//! `ConnectivityProbe`, `Reporter`) and an explicit base directory. It never
//! changes the process working directory and never exits the process; it returns
//! a result that the command layer maps to a [`CommandOutcome`].
//!
mod request;

pub use request::{
    parse_package_list, parse_port, PackageManager, ProjectTarget, ScaffoldRequest,
};

use crate::common::fs::io;
use crate::common::network::ConnectivityProbe;
use crate::common::process::CommandRunner;
use crate::common::ui::Reporter;
use crate::core::error::{Result, ZorxError};
use crate::core::lifecycle::CommandOutcome;
use crate::core::templating::{self, TemplateParams, MANIFEST_FILE, TEMPLATE_FILES};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Directories created inside every project, relative to its root.
pub const PROJECT_DIRECTORIES: [&str; 7] = [
    "src",
    "src/controllers",
    "src/models",
    "src/routes",
    "src/middlewares",
    "src/utils",
    "src/configs",
];

/// Number of steps shown in progress output.
const TOTAL_STEPS: usize = 5;

/// Prefix of the hidden staging directory created in the base directory.
const STAGING_PREFIX: &str = ".zorx-staging-";

/// What happened to dependency installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// The package manager installed these packages.
    Installed { packages: Vec<String> },
    /// `--skip-install` was given.
    Skipped,
    /// The connectivity probe reported no network.
    Offline,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub target: PathBuf,
    pub install: InstallStatus,
}

/// Runs the generation pipeline against a base directory.
pub struct ProjectGenerator<R, P> {
    runner: R,
    probe: P,
    reporter: Arc<dyn Reporter>,
    base_dir: PathBuf,
}

impl<R: CommandRunner, P: ConnectivityProbe> ProjectGenerator<R, P> {
    /// Creates a generator with its collaborators.
    ///
    /// # Arguments
    ///
    /// * `runner` - Executes the package manager.
    /// * `probe` - Decides whether installation is attempted.
    /// * `reporter` - Receives all user-facing progress output.
    /// * `base_dir` - The directory the project is created in.
    pub fn new(runner: R, probe: P, reporter: Arc<dyn Reporter>, base_dir: PathBuf) -> Self {
        Self {
            runner,
            probe,
            reporter,
            base_dir,
        }
    }

    /// Runs the pipeline and reports the outcome, including the completion summary.
    ///
    /// # Arguments
    ///
    /// * `request` - The validated options of one `zorx create` invocation.
    ///
    /// # Returns
    ///
    /// * `CommandOutcome` - Exit code 0 on success. On failure, exit code 1 and
    ///   the full error chain as the message.
    pub async fn run(&self, request: &ScaffoldRequest) -> CommandOutcome {
        match self.generate(request).await {
            Ok(report) => {
                self.print_completion_message(request, &report);
                CommandOutcome::success()
            }
            Err(e) => {
                self.reporter.error("Project creation failed");
                CommandOutcome::failure(format!("{:#}", e))
            }
        }
    }

    /// Runs every stage, stopping at the first failure.
    ///
    /// # Arguments
    ///
    /// * `request` - The options of one `zorx create` invocation.
    ///
    /// # Returns
    ///
    /// * `Result<GenerationReport>` - Where the project landed and what happened
    ///   to dependency installation.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if:
    /// - The project name is invalid (`ZorxError::InvalidProjectName`).
    /// - The target exists and `force` is not set (`ZorxError::TargetExists`).
    /// - Any filesystem step fails. Nothing is left in the base directory and
    ///   an existing target is untouched.
    /// - `<pm> init` fails. Same cleanup as above.
    /// - Dependency installation fails. The scaffolded project stays in place.
    pub async fn generate(&self, request: &ScaffoldRequest) -> Result<GenerationReport> {
        self.reporter.header("Project Creation");
        self.reporter
            .info(&format!("Creating project: {}", request.project_name));

        // --- Stage 1: validate ---
        let target = self.validate(request)?;

        // --- Stages 2 to 6: build in staging ---
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.base_dir)
            .with_context(|| {
                format!(
                    "Failed to create a staging directory in {}",
                    self.base_dir.display()
                )
            })?;
        let staged_root = staging.path().join(&target.name);
        debug!("Staging project in {}", staged_root.display());

        // Dropping `staging` on an early return removes everything staged so far.
        self.scaffold(&staged_root, request).await?;

        // --- Move into place ---
        if target.existed_at_start && request.force {
            self.reporter.info("Removing existing directory...");
            io::remove_path(&target.path)?;
        }
        io::promote_dir(&staged_root, &target.path)?;
        drop(staging);
        info!("Project scaffolded at {}", target.path.display());

        // --- Stage 7: install ---
        let install = self.install(&target.path, request).await?;
        Ok(GenerationReport {
            target: target.path,
            install,
        })
    }

    /// Stage 1: resolves the target and checks it against `--force`.
    ///
    /// Nothing is written or removed here. With `--force` an existing target is
    /// only removed right before the finished project is moved into place.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the name is invalid, or if the target exists and
    /// `force` is not set.
    fn validate(&self, request: &ScaffoldRequest) -> Result<ProjectTarget> {
        let target = ProjectTarget::resolve(&self.base_dir, &request.project_name)?;
        self.announce_reserved_options(request);

        if target.existed_at_start {
            if !request.force {
                self.reporter
                    .warn(&format!("Directory {} already exists", target.name));
                self.reporter.info("Use --force to override existing directory");
                anyhow::bail!(ZorxError::TargetExists {
                    name: target.name.clone(),
                });
            }
            debug!("{} exists and will be replaced", target.path.display());
        }
        Ok(target)
    }

    /// Warns about accepted options that do not change the output yet.
    fn announce_reserved_options(&self, request: &ScaffoldRequest) {
        if request.typescript {
            self.reporter.warn(
                "--ts is not yet supported; generating the JavaScript template instead",
            );
        }
        if let Some(template) = &request.template {
            self.reporter.warn(&format!(
                "--template is not yet supported; ignoring '{}' and using the default Express template",
                template
            ));
        }
        if request.git {
            self.reporter
                .warn("--git is not yet supported; no repository will be initialized");
        }
    }

    /// Stages 2 to 6, all inside `root`.
    ///
    /// # Arguments
    ///
    /// * `root` - The staged project root. It does not exist yet.
    /// * `request` - Supplies the port, project name and package manager.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if a directory or file cannot be written, or if
    /// `<pm> init` fails.
    async fn scaffold(&self, root: &Path, request: &ScaffoldRequest) -> Result<()> {
        // --- Stage 2: directories ---
        self.reporter.info("Creating project directory...");
        io::ensure_dir_exists(root)?;

        self.reporter
            .progress("Creating project structure", 1, TOTAL_STEPS);
        create_directories(root)?;

        // --- Stages 3 and 4: files, then their content ---
        self.reporter.progress("Creating project files", 2, TOTAL_STEPS);
        create_placeholder_files(root)?;

        self.reporter.progress("Writing template files", 3, TOTAL_STEPS);
        write_templates(root, &TemplateParams { port: request.port })?;

        // --- Stages 5 and 6: package manager init, then our manifest ---
        self.reporter
            .progress("Initializing package manager", 4, TOTAL_STEPS);
        let pm = request.package_manager;
        self.runner
            .run(pm.program(), &pm.init_args(), root)
            .await
            .context("Package manager initialization failed")?;

        patch_manifest(root, &request.project_name)?;
        Ok(())
    }

    /// Stage 7: installs the default and extra packages in `root`.
    ///
    /// # Returns
    ///
    /// * `Result<InstallStatus>` - `Skipped` for `--skip-install`, `Offline`
    ///   when the connectivity check fails, otherwise `Installed`.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the package manager's install command fails.
    async fn install(&self, root: &Path, request: &ScaffoldRequest) -> Result<InstallStatus> {
        if request.skip_install {
            debug!("Dependency installation skipped by request.");
            return Ok(InstallStatus::Skipped);
        }
        self.reporter
            .progress("Installing dependencies", 5, TOTAL_STEPS);

        // Offline is a warning, not a failure.
        if !self.probe.has_connectivity().await {
            self.reporter.warn("No internet connection detected");
            self.reporter
                .info("Install dependencies manually when connected");
            return Ok(InstallStatus::Offline);
        }

        let packages = request.dependency_list();
        self.reporter
            .info(&format!("Installing {} packages...", packages.len()));
        let pm = request.package_manager;
        self.runner
            .run(pm.program(), &pm.install_args(&packages), root)
            .await
            .context("Dependency installation failed")?;
        Ok(InstallStatus::Installed { packages })
    }

    /// Stage 8: success line and next steps.
    fn print_completion_message(&self, request: &ScaffoldRequest, report: &GenerationReport) {
        let pm = request.package_manager;
        self.reporter.success(&format!(
            "Project {} created successfully! 🎉",
            request.project_name
        ));
        self.reporter.header("Next Steps");

        // Relative to the base directory when possible, e.g. `cd demo`.
        let display_path = pathdiff::diff_paths(&report.target, &self.base_dir)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| report.target.display().to_string());
        self.reporter.normal(&format!("  cd {}", display_path));
        if !matches!(report.install, InstallStatus::Installed { .. }) {
            self.reporter.normal(&format!("  {} install", pm));
        }
        self.reporter.normal(&format!("  {} run dev", pm));
        self.reporter
            .normal(&format!("  Open http://localhost:{}", request.port));
    }
}

/// Creates [`PROJECT_DIRECTORIES`] under `root`.
fn create_directories(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRECTORIES {
        io::ensure_dir_exists(&root.join(dir))?;
    }
    Ok(())
}

/// Creates an empty file for every template.
fn create_placeholder_files(root: &Path) -> Result<()> {
    for template in TEMPLATE_FILES {
        io::ensure_file(&root.join(template.relative_path))?;
    }
    Ok(())
}

/// Overwrites every placeholder with its rendered content.
fn write_templates(root: &Path, params: &TemplateParams) -> Result<()> {
    for template in TEMPLATE_FILES {
        let content = (template.render)(params);
        io::write_string_to_file(&root.join(template.relative_path), &content)?;
    }
    Ok(())
}

/// Replaces the package manager's manifest, if it wrote one, with ours.
///
/// # Arguments
///
/// * `root` - The project root the package manager was initialized in.
/// * `project_name` - Written as the manifest's `name`.
///
/// # Errors
///
/// Returns an `Err` if the manifest cannot be serialized or written.
fn patch_manifest(root: &Path, project_name: &str) -> Result<()> {
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        debug!(
            "No {} after initialization, leaving it absent.",
            MANIFEST_FILE
        );
        return Ok(());
    }
    let json = templating::manifest_content(project_name)
        .to_json()
        .context("Failed to serialize package manifest")?;
    io::write_string_to_file(&manifest_path, &json)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::network::FixedProbe;
    use crate::common::process::testing::FakeRunner;
    use crate::common::ui::testing::{RecordingReporter, Tone};
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use walkdir::WalkDir;

    struct Harness {
        base: TempDir,
        reporter: Arc<RecordingReporter>,
        generator: ProjectGenerator<FakeRunner, FixedProbe>,
    }

    fn harness_with(runner: FakeRunner, online: bool) -> Harness {
        let base = tempdir().unwrap();
        let reporter = Arc::new(RecordingReporter::new());
        let generator = ProjectGenerator::new(
            runner,
            FixedProbe(online),
            reporter.clone(),
            base.path().to_path_buf(),
        );
        Harness {
            base,
            reporter,
            generator,
        }
    }

    fn harness() -> Harness {
        harness_with(FakeRunner::new(), true)
    }

    /// Relative paths of everything under `root` (directories end with '/').
    fn tree(root: &Path) -> Vec<String> {
        let mut entries: Vec<String> = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap())
            .map(|e| {
                let rel = e.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
                if e.file_type().is_dir() {
                    format!("{}/", rel)
                } else {
                    rel
                }
            })
            .collect();
        entries.sort();
        entries
    }

    fn base_is_clean_except(base: &Path, allowed: &[&str]) -> bool {
        fs::read_dir(base)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .all(|name| allowed.contains(&name.as_str()))
    }

    #[tokio::test]
    async fn test_clean_run_produces_expected_tree() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.skip_install = true;

        let report = h.generator.generate(&request).await.unwrap();
        let root = h.base.path().join("demo");
        assert_eq!(report.target, root);
        assert_eq!(report.install, InstallStatus::Skipped);

        let entries = tree(&root);
        let dirs: Vec<&String> = entries.iter().filter(|e| e.ends_with('/')).collect();
        assert_eq!(dirs.len(), 7);
        for dir in PROJECT_DIRECTORIES {
            assert!(entries.contains(&format!("{}/", dir)), "missing {}", dir);
        }
        for template in TEMPLATE_FILES {
            let content = fs::read_to_string(root.join(template.relative_path)).unwrap();
            assert!(!content.trim().is_empty(), "{} is empty", template.relative_path);
        }
        // Only the staged-and-promoted project remains in the base directory.
        assert!(base_is_clean_except(h.base.path(), &["demo"]));
    }

    #[tokio::test]
    async fn test_manifest_is_replaced_after_init() {
        let h = harness();
        let mut request = ScaffoldRequest::new("my-api");
        request.skip_install = true;
        h.generator.generate(&request).await.unwrap();

        let manifest = fs::read_to_string(h.base.path().join("my-api/package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(value["name"], "my-api");
        assert_eq!(value["license"], "ISC");
        assert!(!manifest.contains("generated"));
    }

    #[tokio::test]
    async fn test_manifest_left_absent_when_init_writes_none() {
        let h = harness_with(FakeRunner::without_manifest(), true);
        let mut request = ScaffoldRequest::new("demo");
        request.skip_install = true;
        h.generator.generate(&request).await.unwrap();
        assert!(!h.base.path().join("demo/package.json").exists());
    }

    #[tokio::test]
    async fn test_init_runs_in_staging_with_explicit_cwd() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.skip_install = true;
        request.package_manager = PackageManager::Pnpm;
        h.generator.generate(&request).await.unwrap();

        let calls = h.generator.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "pnpm");
        assert_eq!(calls[0].args, vec!["init"]);
        assert!(calls[0].cwd.ends_with("demo"));
        assert_ne!(calls[0].cwd, h.base.path().join("demo"));
    }

    #[tokio::test]
    async fn test_existing_target_without_force_is_untouched() {
        let h = harness();
        let root = h.base.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("keep.txt"), "original").unwrap();

        let err = h
            .generator
            .generate(&ScaffoldRequest::new("demo"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZorxError>(),
            Some(ZorxError::TargetExists { name }) if name == "demo"
        ));
        assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "original");
        assert!(h.generator.runner.calls().is_empty());
        assert!(h.reporter.contains(Tone::Info, "--force"));
    }

    #[tokio::test]
    async fn test_force_removes_previous_contents() {
        let h = harness();
        let root = h.base.path().join("demo");
        fs::create_dir_all(root.join("src/old")).unwrap();
        fs::write(root.join("leftover.js"), "old").unwrap();

        let mut request = ScaffoldRequest::new("demo");
        request.force = true;
        request.skip_install = true;
        h.generator.generate(&request).await.unwrap();

        assert!(!root.join("leftover.js").exists());
        assert!(!root.join("src/old").exists());
        assert!(root.join("app.js").is_file());
    }

    /// A failed run with `--force` must not cost the user the existing directory.
    #[tokio::test]
    async fn test_force_keeps_existing_directory_when_init_fails() {
        let h = harness_with(FakeRunner::failing_on("init", 3), true);
        let root = h.base.path().join("demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("keep.txt"), "original").unwrap();

        let mut request = ScaffoldRequest::new("demo");
        request.force = true;
        let outcome = h.generator.run(&request).await;

        assert_eq!(outcome.exit_code, 1);
        assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "original");
        assert!(!root.join("app.js").exists());
        assert!(base_is_clean_except(h.base.path(), &["demo"]));
        assert!(!h.reporter.contains(Tone::Info, "Removing existing directory"));
    }

    #[tokio::test]
    async fn test_force_replaces_a_plain_file() {
        let h = harness();
        fs::write(h.base.path().join("demo"), "not a directory").unwrap();
        let mut request = ScaffoldRequest::new("demo");
        request.force = true;
        request.skip_install = true;
        h.generator.generate(&request).await.unwrap();
        assert!(h.base.path().join("demo").is_dir());
    }

    #[tokio::test]
    async fn test_invalid_name_is_rejected_before_any_write() {
        let h = harness();
        let err = h
            .generator
            .generate(&ScaffoldRequest::new("../escape"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZorxError>(),
            Some(ZorxError::InvalidProjectName { .. })
        ));
        assert!(base_is_clean_except(h.base.path(), &[]));
        assert!(!h.base.path().parent().unwrap().join("escape").exists());
    }

    #[tokio::test]
    async fn test_entry_file_uses_requested_port() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.skip_install = true;
        request.port = 8080;
        h.generator.generate(&request).await.unwrap();
        let app = fs::read_to_string(h.base.path().join("demo/app.js")).unwrap();
        assert!(app.contains("process.env.PORT || 8080"));
    }

    #[tokio::test]
    async fn test_skip_install_never_installs() {
        for online in [true, false] {
            let h = harness_with(FakeRunner::new(), online);
            let mut request = ScaffoldRequest::new("demo");
            request.skip_install = true;
            let outcome = h.generator.run(&request).await;
            assert_eq!(outcome.exit_code, 0);
            let calls = h.generator.runner.calls();
            assert!(calls.iter().all(|c| c.args[0] == "init"));
            assert!(h.reporter.contains(Tone::Normal, "npm install"));
        }
    }

    #[tokio::test]
    async fn test_offline_skips_install_with_warning() {
        let h = harness_with(FakeRunner::new(), false);
        let outcome = h.generator.run(&ScaffoldRequest::new("demo")).await;

        assert_eq!(outcome.exit_code, 0);
        assert!(h.reporter.contains(Tone::Warn, "No internet connection detected"));
        assert_eq!(h.generator.runner.calls().len(), 1);
        assert!(h.base.path().join("demo/app.js").is_file());
    }

    #[tokio::test]
    async fn test_install_appends_extra_packages_in_order() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.extra_packages = parse_package_list("cors,helmet");
        let report = h.generator.generate(&request).await.unwrap();

        let calls = h.generator.runner.calls();
        assert_eq!(calls.len(), 2);
        let install = &calls[1];
        assert_eq!(install.program, "npm");
        assert_eq!(
            install.args,
            vec!["install", "express", "cors", "helmet", "dotenv", "nodemon", "cors", "helmet"]
        );
        assert_eq!(install.cwd, h.base.path().join("demo"));
        assert!(matches!(report.install, InstallStatus::Installed { ref packages } if packages.len() == 7));
    }

    #[tokio::test]
    async fn test_yarn_uses_add_subcommand() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.package_manager = PackageManager::Yarn;
        h.generator.generate(&request).await.unwrap();
        let calls = h.generator.runner.calls();
        assert_eq!(calls[1].program, "yarn");
        assert_eq!(calls[1].args[0], "add");
    }

    #[tokio::test]
    async fn test_failed_init_leaves_nothing_behind() {
        let h = harness_with(FakeRunner::failing_on("init", 3), true);
        let outcome = h.generator.run(&ScaffoldRequest::new("demo")).await;

        assert_eq!(outcome.exit_code, 1);
        let message = outcome.message.unwrap();
        assert!(message.contains("npm init -y failed with exit code 3"));
        assert!(!h.base.path().join("demo").exists());
        assert!(base_is_clean_except(h.base.path(), &[]));
        assert!(h.reporter.contains(Tone::Error, "Project creation failed"));
    }

    #[tokio::test]
    async fn test_failed_install_is_fatal_but_keeps_scaffold() {
        let h = harness_with(FakeRunner::failing_on("install", 1), true);
        let err = h
            .generator
            .generate(&ScaffoldRequest::new("demo"))
            .await
            .unwrap_err();
        match err.downcast_ref::<ZorxError>() {
            Some(ZorxError::Subprocess { command, exit_code }) => {
                assert!(command.starts_with("npm install express"));
                assert_eq!(*exit_code, Some(1));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(h.base.path().join("demo/app.js").is_file());
    }

    #[tokio::test]
    async fn test_reserved_options_warn() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.skip_install = true;
        request.typescript = true;
        request.template = Some("nest".into());
        request.git = true;
        h.generator.generate(&request).await.unwrap();

        let warnings = h.reporter.messages(Tone::Warn);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.contains("not yet supported")));
        // Still the JavaScript template.
        assert!(h.base.path().join("demo/app.js").is_file());
    }

    #[tokio::test]
    async fn test_completion_message_lists_next_steps() {
        let h = harness();
        let mut request = ScaffoldRequest::new("demo");
        request.port = 4000;
        request.package_manager = PackageManager::Bun;
        let outcome = h.generator.run(&request).await;

        assert_eq!(outcome.exit_code, 0);
        assert!(h.reporter.contains(Tone::Success, "Project demo created successfully"));
        let steps = h.reporter.messages(Tone::Normal);
        assert_eq!(
            steps,
            vec![
                "  cd demo".to_string(),
                "  bun run dev".to_string(),
                "  Open http://localhost:4000".to_string(),
            ]
        );
    }
}
