//! Tool discovery on the search path.
//!
//! Executables are resolved by walking `PATH` ourselves rather than
//! shelling out to `which`/`where`, whose behavior varies across systems.
//! On Windows the `PATHEXT` extensions are tried so `npm.cmd` resolves
//! for a lookup of `npm`.
//!
//! # Example
//!
//! ```no_run
//! use addon_build::requirements::probe::locate_tool;
//!
//! if let Some(node) = locate_tool("node") {
//!     println!("node at {}", node.display());
//! }
//! ```

use crate::orchestrator::SystemContext;
use crate::requirements::status::{ToolProbe, ToolVersion};
use std::path::{Path, PathBuf};

/// Extensions tried on Windows when `PATHEXT` is unset.
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// File names to try for `tool`, given the platform's `PATHEXT` (if any).
///
/// With `PATHEXT`, extension candidates come first; the bare name is only
/// tried when it already carries an extension. This skips the extensionless
/// shell shims npm installs next to `npm.cmd`.
pub fn candidate_names(tool: &str, pathext: Option<&str>) -> Vec<String> {
    let Some(pathext) = pathext else {
        return vec![tool.to_string()];
    };

    let mut names: Vec<String> = pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!("{}{}", tool, ext.to_ascii_lowercase()))
        .collect();
    if Path::new(tool).extension().is_some() {
        names.insert(0, tool.to_string());
    }
    names
}

fn platform_pathext() -> Option<String> {
    if cfg!(windows) {
        Some(std::env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string()))
    } else {
        None
    }
}

fn is_runnable(candidate: &Path) -> bool {
    candidate.is_file() && is_executable(candidate)
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. A `tool` that
/// already contains a directory component is checked directly.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    resolve_tool_path_with(tool, path_entries, platform_pathext().as_deref())
}

fn resolve_tool_path_with(
    tool: &str,
    path_entries: &[PathBuf],
    pathext: Option<&str>,
) -> Option<PathBuf> {
    let names = candidate_names(tool, pathext);

    if Path::new(tool).components().count() > 1 {
        return names.into_iter().map(PathBuf::from).find(|c| is_runnable(c));
    }

    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if is_runnable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Split the process `PATH` into its entries.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve `tool` against the process `PATH`.
pub fn locate_tool(tool: &str) -> Option<PathBuf> {
    resolve_tool_path(tool, &parse_system_path())
}

/// Probe a tool: resolve it, then ask for its version.
///
/// A missing tool or a failed `--version` query yields
/// [`ToolVersion::Unavailable`]; probing never fails.
pub fn probe_tool(name: &str, ctx: &SystemContext<'_>) -> ToolProbe {
    let path = (ctx.locate)(name);

    let version = match &path {
        Some(resolved) => ToolVersion::from_output((ctx.run_silent)(resolved, &["--version"])),
        None => ToolVersion::Unavailable,
    };

    match &path {
        Some(resolved) => tracing::debug!("Probed {}: {} ({})", name, resolved.display(), version),
        None => tracing::debug!("Probed {}: not found on PATH", name),
    }

    ToolProbe {
        name: name.to_string(),
        path,
        version,
    }
}
