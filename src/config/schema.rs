//! Configuration schema definitions.
//!
//! Every tool name, script name and path the build flow touches lives
//! here. The defaults describe the `isolated-vm` addon built with
//! `node`, `npm` and `node-gyp`; a YAML file passed with `--config`
//! may override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Executables probed on the search path.
    pub tools: ToolNames,

    /// Extra guidance printed when the runtime is missing.
    pub runtime_hint: String,

    /// Package installed globally when the build helper is missing.
    pub helper_package: String,

    /// Package script that builds the addon (`npm run <build_script>`).
    pub build_script: String,

    /// gyp generator that writes the compile database.
    pub compile_db_generator: String,

    /// Build and output directories.
    pub paths: PathSettings,

    /// File name of the native module produced by the build.
    pub artifact: String,

    /// File name of the compile database.
    pub compile_db: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tools: ToolNames::default(),
            runtime_hint: "Recommended Node v22.19.0 -> https://nodejs.org/en/download".to_string(),
            helper_package: "node-gyp".to_string(),
            build_script: "rebuild".to_string(),
            compile_db_generator: "gyp.generator.compile_commands_json.py".to_string(),
            paths: PathSettings::default(),
            artifact: "isolated_vm.node".to_string(),
            compile_db: "compile_commands.json".to_string(),
        }
    }
}

/// Names (or paths) of the three toolchain executables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolNames {
    /// JavaScript runtime.
    pub runtime: String,
    /// The runtime's package manager.
    pub package_manager: String,
    /// Native addon build helper.
    pub build_helper: String,
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            runtime: "node".to_string(),
            package_manager: "npm".to_string(),
            build_helper: "node-gyp".to_string(),
        }
    }
}

/// Directories relative to the project root (absolute paths are kept as-is).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Where the build helper leaves its outputs.
    pub build_dir: PathBuf,
    /// Where the finished artifact is moved to.
    pub out_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build").join("Release"),
            out_dir: PathBuf::from("out"),
        }
    }
}
