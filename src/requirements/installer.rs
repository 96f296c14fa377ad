//! Interactive installation of the build helper.
//!
//! When the native build helper is missing the user is offered a global
//! install through the package manager. The install command's exit code
//! is reported but not acted on here; the caller re-probes afterwards.

use crate::error::Result;
use crate::orchestrator::SystemContext;
use crate::ui::{Prompt, UserInterface};
use std::path::Path;

/// What happened when a missing tool was offered for installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user answered `n`; nothing was run.
    Declined,
    /// The install command ran and exited with this code.
    Attempted { exit_code: i32 },
}

/// A global package install offered for a missing tool.
#[derive(Debug, Clone)]
pub struct InstallRequest<'p> {
    /// Executable that was not found.
    pub tool: &'p str,
    /// Package providing it.
    pub package: &'p str,
    /// Package manager executable used to install.
    pub package_manager: &'p Path,
    /// Directory the install runs in.
    pub cwd: &'p Path,
}

impl InstallRequest<'_> {
    /// Prompt key used for scripted or environment-provided answers.
    pub fn prompt_key(&self) -> String {
        format!("install_{}", self.tool)
    }

    /// Arguments passed to the package manager.
    pub fn install_args(&self) -> [&str; 3] {
        ["install", "-g", self.package]
    }
}

/// Ask whether to install the missing tool and run the install if accepted.
///
/// # Errors
///
/// Only prompt failures (e.g. closed stdin) are errors.
pub fn offer_install(
    request: &InstallRequest<'_>,
    ui: &mut dyn UserInterface,
    ctx: &SystemContext<'_>,
) -> Result<InstallOutcome> {
    ui.blank();

    let prompt = Prompt {
        key: request.prompt_key(),
        question: format!(
            "Build >> {} not found. Install it? (y/n) [default y]",
            request.tool
        ),
        default: true,
    };

    if !ui.confirm(&prompt)? {
        tracing::debug!("Install of {} declined", request.package);
        ui.message("Exiting build...");
        ui.blank();
        return Ok(InstallOutcome::Declined);
    }

    let exit_code = (ctx.run_visible)(request.package_manager, &request.install_args(), request.cwd);
    if exit_code != 0 {
        tracing::warn!(
            "Global install of {} exited with code {}",
            request.package,
            exit_code
        );
    }
    ui.blank();

    Ok(InstallOutcome::Attempted { exit_code })
}
