//! Resolved filesystem locations for a single build.

use crate::config::schema::BuildConfig;
use std::path::{Path, PathBuf};

/// Absolute locations derived from a project root and a [`BuildConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPaths {
    /// Directory every command runs in.
    pub project_root: PathBuf,
    /// Compile database as written by the configure step.
    pub compile_db_source: PathBuf,
    /// Compile database in the project root.
    pub compile_db_target: PathBuf,
    /// Native module as written by the build.
    pub artifact_source: PathBuf,
    /// Native module in the output directory.
    pub artifact_target: PathBuf,
}

impl BuildPaths {
    /// Resolve all locations against `project_root`.
    pub fn resolve(project_root: &Path, config: &BuildConfig) -> Self {
        let build_dir = project_root.join(&config.paths.build_dir);
        let out_dir = project_root.join(&config.paths.out_dir);

        Self {
            project_root: project_root.to_path_buf(),
            compile_db_source: build_dir.join(&config.compile_db),
            compile_db_target: project_root.join(&config.compile_db),
            artifact_source: build_dir.join(&config.artifact),
            artifact_target: out_dir.join(&config.artifact),
        }
    }
}
