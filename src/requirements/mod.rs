//! Toolchain detection and installation.
//!
//! This module locates the JavaScript runtime, the package manager and
//! the native build helper on the search path, reads their versions, and
//! offers to install the helper when it is missing.
//!
//! # Modules
//!
//! - [`probe`] - Search-path resolution and version probing
//! - [`status`] - Probe results and version normalization
//! - [`installer`] - Interactive global install of a missing helper

pub mod installer;
pub mod probe;
pub mod status;

pub use installer::{offer_install, InstallOutcome, InstallRequest};
pub use probe::{locate_tool, probe_tool, resolve_tool_path};
pub use status::{normalize_version, ToolProbe, ToolVersion};
