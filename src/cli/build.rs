//! The build command.
//!
//! Loads configuration for the project, resolves paths, and hands off to
//! the [`Orchestrator`].

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::config::{load_config, BuildPaths};
use crate::error::Result;
use crate::orchestrator::{FlowOutcome, Orchestrator, SystemContext};
use crate::ui::UserInterface;

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the build produced an artifact.
    pub success: bool,

    /// Exit code to use for the process.
    pub exit_code: i32,
}

impl From<&FlowOutcome> for CommandResult {
    fn from(outcome: &FlowOutcome) -> Self {
        Self {
            success: matches!(outcome, FlowOutcome::Built { .. }),
            exit_code: outcome.exit_code(),
        }
    }
}

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    args: Cli,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, args: Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Run the build against the given system.
    pub fn execute(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &SystemContext<'_>,
    ) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.args.config.as_deref())?;
        let paths = BuildPaths::resolve(&self.project_root, &config);
        tracing::debug!("Resolved paths: {:?}", paths);

        let outcome = Orchestrator::new(&config, paths, ctx).run(self.args.init, ui)?;
        if let FlowOutcome::Aborted { stage, reason } = &outcome {
            tracing::debug!("Stopped at {}: {}", stage, reason);
        }

        Ok(CommandResult::from(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn no_tools() -> SystemContext<'static> {
        SystemContext {
            locate: &|_| None,
            run_silent: &|_, _| None,
            run_visible: &|_, _, _| 0,
        }
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let args = Cli::try_parse_from(["addon-build", "-c", "missing.yml"]).unwrap();
        let cmd = BuildCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui, &no_tools()).unwrap_err();
        assert!(matches!(err, BuildError::ConfigNotFound { .. }));
    }

    #[test]
    fn missing_runtime_fails_with_exit_one() {
        let temp = TempDir::new().unwrap();
        let args = Cli::try_parse_from(["addon-build"]).unwrap();
        let cmd = BuildCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui, &no_tools()).unwrap();
        assert_eq!(
            result,
            CommandResult {
                success: false,
                exit_code: 1
            }
        );
    }

    #[test]
    fn config_overrides_tool_names() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("build.yml"), "tools:\n  runtime: bun\n").unwrap();
        let args = Cli::try_parse_from(["addon-build", "--config", "build.yml"]).unwrap();
        let cmd = BuildCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui, &no_tools()).unwrap();
        assert!(ui.has_message("bun runtime not found"));
    }
}
