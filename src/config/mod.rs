//! Build configuration.
//!
//! - Schema definitions and defaults in [`schema`]
//! - Optional YAML loading in [`loader`]
//! - Validation in [`validator`]
//! - Path resolution in [`paths`]
//!
//! # Example
//!
//! ```
//! use addon_build::config::{BuildConfig, BuildPaths};
//! use std::path::Path;
//!
//! let config = BuildConfig::default();
//! let paths = BuildPaths::resolve(Path::new("/work/addon"), &config);
//! assert_eq!(paths.artifact_target, Path::new("/work/addon/out/isolated_vm.node"));
//! ```

pub mod loader;
pub mod paths;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, parse_config};
pub use paths::BuildPaths;
pub use schema::{BuildConfig, PathSettings, ToolNames};
pub use validator::{validate, validate_config, ValidationError};
