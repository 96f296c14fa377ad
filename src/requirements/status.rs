//! Tool probe results.
//!
//! Each probe produces a [`ToolProbe`] describing whether an executable
//! resolved on the search path and which version it reported.

use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

static RE_SEMVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+\.\d+)").expect("semver pattern is valid"));

/// Version reported by a tool's `--version` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolVersion {
    /// The query succeeded; holds the normalized version string.
    Detected(String),
    /// The tool is missing, the query failed, or it printed nothing.
    Unavailable,
}

impl ToolVersion {
    /// Build from the captured output of a version query.
    pub fn from_output(output: Option<String>) -> Self {
        match output {
            Some(raw) if !raw.trim().is_empty() => Self::Detected(normalize_version(&raw)),
            _ => Self::Unavailable,
        }
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detected(v) => f.write_str(v),
            Self::Unavailable => f.write_str("unknown version"),
        }
    }
}

/// Normalize version output to `vX.Y.Z`.
///
/// `node` prints `v22.19.0`, `npm` prints `10.9.3`; both render as `v…`.
/// Output without a semver is returned as its first non-empty line.
pub fn normalize_version(raw: &str) -> String {
    if let Some(caps) = RE_SEMVER.captures(raw) {
        return format!("v{}", &caps[1]);
    }

    raw.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// The result of probing a single tool.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    /// Name the tool was looked up by.
    pub name: String,
    /// Resolved executable, if found on the search path.
    pub path: Option<PathBuf>,
    /// Reported version.
    pub version: ToolVersion,
}

impl ToolProbe {
    /// Whether the executable resolved on the search path.
    pub fn is_present(&self) -> bool {
        self.path.is_some()
    }
}
