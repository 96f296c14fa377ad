//! Mockable system dependencies for the build flow.

use std::path::{Path, PathBuf};

use crate::requirements::probe::locate_tool;
use crate::shell::{run_silent, run_visible};

/// Mockable dependencies for tool lookup and command execution.
pub struct SystemContext<'a> {
    /// Resolve an executable on the search path.
    pub locate: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Run a command quietly, returning trimmed stdout on success.
    pub run_silent: &'a dyn Fn(&Path, &[&str]) -> Option<String>,
    /// Run a command visibly in a directory, returning its exit code.
    pub run_visible: &'a dyn Fn(&Path, &[&str], &Path) -> i32,
}

/// Build the default `SystemContext` for production use.
pub fn default_context() -> SystemContext<'static> {
    SystemContext {
        locate: &|tool| locate_tool(tool),
        run_silent: &|program, args| run_silent(program, args),
        run_visible: &|program, args, cwd| run_visible(program, args, cwd),
    }
}
