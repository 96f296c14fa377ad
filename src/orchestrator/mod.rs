//! The build flow.
//!
//! A single linear pass: runtime check, package manager check, helper
//! check (with an install offer), optional compile database generation,
//! the build itself, and artifact relocation. Every check has a terminal
//! edge; nothing is retried.
//!
//! ```text
//! Start -> RuntimeCheck -> PackageManagerCheck -> HelperCheck
//!       -> [CompileDatabase] -> Build -> [ArtifactMove] -> End
//! ```

pub mod artifacts;
pub mod context;

pub use artifacts::relocate;
pub use context::{default_context, SystemContext};

use crate::config::{BuildConfig, BuildPaths};
use crate::error::{BuildError, Result};
use crate::requirements::{offer_install, probe_tool, InstallOutcome, InstallRequest, ToolProbe};
use crate::ui::UserInterface;
use std::fmt;
use std::path::PathBuf;

/// A step of the build flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RuntimeCheck,
    PackageManagerCheck,
    HelperCheck,
    CompileDatabase,
    Build,
    ArtifactMove,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::RuntimeCheck => "runtime check",
            Stage::PackageManagerCheck => "package manager check",
            Stage::HelperCheck => "build helper check",
            Stage::CompileDatabase => "compile database",
            Stage::Build => "build",
            Stage::ArtifactMove => "artifact move",
        };
        f.write_str(name)
    }
}

/// How a completed run ended.
#[derive(Debug)]
pub enum FlowOutcome {
    /// The build succeeded and the artifact is in the output directory.
    Built { artifact: PathBuf },
    /// The build command exited non-zero.
    BuildFailed { exit_code: i32 },
    /// A tool check stopped the run before the build.
    Aborted { stage: Stage, reason: BuildError },
}

impl FlowOutcome {
    /// Process exit code for this outcome.
    ///
    /// A failed build still exits 0; only aborted checks exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlowOutcome::Built { .. } | FlowOutcome::BuildFailed { .. } => 0,
            FlowOutcome::Aborted { .. } => 1,
        }
    }
}

/// Runs the build flow for one project.
pub struct Orchestrator<'a> {
    config: &'a BuildConfig,
    paths: BuildPaths,
    ctx: &'a SystemContext<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a BuildConfig, paths: BuildPaths, ctx: &'a SystemContext<'a>) -> Self {
        Self { config, paths, ctx }
    }

    /// Run every stage in order.
    ///
    /// Missing tools and a declined install are reported through `ui` and
    /// returned as [`FlowOutcome::Aborted`].
    ///
    /// # Errors
    ///
    /// Fails if a prompt cannot be read or a build output cannot be moved.
    pub fn run(&self, init: bool, ui: &mut dyn UserInterface) -> Result<FlowOutcome> {
        let tools = &self.config.tools;

        tracing::debug!(stage = %Stage::RuntimeCheck, "Entering stage");
        let runtime = self.probe(&tools.runtime, ui);
        if !runtime.is_present() {
            ui.blank();
            ui.message(&format!(
                "Build >> {} runtime not found, please install it.",
                tools.runtime
            ));
            ui.message(&self.config.runtime_hint);
            ui.blank();
            return Ok(self.abort_missing(Stage::RuntimeCheck, &tools.runtime));
        }
        ui.blank();
        self.report(&runtime, ui);

        tracing::debug!(stage = %Stage::PackageManagerCheck, "Entering stage");
        let package_manager = self.probe(&tools.package_manager, ui);
        let Some(package_manager_path) = package_manager.path.clone() else {
            ui.blank();
            ui.message(&format!(
                "Build >> {} not found, please install it.",
                tools.package_manager
            ));
            ui.blank();
            return Ok(self.abort_missing(Stage::PackageManagerCheck, &tools.package_manager));
        };
        self.report(&package_manager, ui);

        tracing::debug!(stage = %Stage::HelperCheck, "Entering stage");
        let mut helper = self.probe(&tools.build_helper, ui);
        if !helper.is_present() {
            let request = InstallRequest {
                tool: &tools.build_helper,
                package: &self.config.helper_package,
                package_manager: &package_manager_path,
                cwd: &self.paths.project_root,
            };
            match offer_install(&request, ui, self.ctx)? {
                InstallOutcome::Declined => {
                    return Ok(FlowOutcome::Aborted {
                        stage: Stage::HelperCheck,
                        reason: BuildError::InstallDeclined {
                            requirement: tools.build_helper.clone(),
                        },
                    });
                }
                InstallOutcome::Attempted { .. } => {
                    helper = self.probe(&tools.build_helper, ui);
                    if !helper.is_present() {
                        ui.warning(&format!(
                            "{} is still not on PATH after installing, continuing anyway",
                            tools.build_helper
                        ));
                    }
                }
            }
        }
        self.report(&helper, ui);
        let helper_program = helper
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&tools.build_helper));

        if init {
            tracing::debug!(stage = %Stage::CompileDatabase, "Entering stage");
            ui.blank();
            ui.status(&format!("Build >> Generating {}...", self.config.compile_db));
            ui.blank();

            let args = ["configure", "--", "-f", self.config.compile_db_generator.as_str()];
            let code = (self.ctx.run_visible)(&helper_program, &args, &self.paths.project_root);
            tracing::debug!("{} configure exited with {}", tools.build_helper, code);

            ui.blank();
            ui.status(&format!("Build >> {} generated", self.config.compile_db));
            ui.blank();
            relocate(&self.paths.compile_db_source, &self.paths.compile_db_target)?;
        }

        tracing::debug!(stage = %Stage::Build, "Entering stage");
        ui.blank();
        ui.status("Build >> Starting build...");
        let build_args = ["run", self.config.build_script.as_str()];
        let exit_code =
            (self.ctx.run_visible)(&package_manager_path, &build_args, &self.paths.project_root);
        tracing::debug!("Build exited with {}", exit_code);

        if exit_code != 0 {
            ui.blank();
            ui.error("Build >> Build failed!");
            return Ok(FlowOutcome::BuildFailed { exit_code });
        }

        tracing::debug!(stage = %Stage::ArtifactMove, "Entering stage");
        relocate(&self.paths.artifact_source, &self.paths.artifact_target)?;
        ui.blank();
        ui.success(&format!(
            "Build >> Build succeeded, output moved to ./{}",
            self.config.paths.out_dir.display()
        ));
        ui.blank();

        Ok(FlowOutcome::Built {
            artifact: self.paths.artifact_target.clone(),
        })
    }

    fn probe(&self, tool: &str, ui: &mut dyn UserInterface) -> ToolProbe {
        let mut spinner = ui.start_spinner(&format!("Checking {}...", tool));
        let probe = probe_tool(tool, self.ctx);
        spinner.finish_clear();
        probe
    }

    fn report(&self, probe: &ToolProbe, ui: &mut dyn UserInterface) {
        ui.status(&format!("Detected {}: {}", probe.name, probe.version));
    }

    fn abort_missing(&self, stage: Stage, tool: &str) -> FlowOutcome {
        FlowOutcome::Aborted {
            stage,
            reason: BuildError::RequirementMissing {
                requirement: tool.to_string(),
                message: "Not found on PATH".to_string(),
            },
        }
    }
}
