//! addon-build - One-command build of a native Node addon.
//!
//! Checks that the JavaScript runtime, its package manager and the native
//! build helper are installed (offering to install the helper), optionally
//! generates a compile database, runs the project's build script, and moves
//! the built module into the output directory.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Tool names, script names and paths, with YAML overrides
//! - [`error`] - Error types and result aliases
//! - [`orchestrator`] - The build flow and artifact relocation
//! - [`requirements`] - Tool probing, version detection and installation
//! - [`shell`] - External command execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use addon_build::config::{BuildConfig, BuildPaths};
//! use std::path::Path;
//!
//! let config = BuildConfig::default();
//! let paths = BuildPaths::resolve(Path::new("/work/isolated-vm"), &config);
//! assert_eq!(
//!     paths.artifact_target,
//!     Path::new("/work/isolated-vm/out/isolated_vm.node")
//! );
//! ```
//!
//! For the full flow against a fake toolchain, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{BuildError, Result};
