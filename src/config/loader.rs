//! Configuration loading.
//!
//! No file is read unless one is named explicitly; without `--config`
//! the built-in defaults apply.

use crate::config::schema::BuildConfig;
use crate::config::validator::validate;
use crate::error::{BuildError, Result};
use std::fs;
use std::path::Path;

/// Load the effective configuration.
///
/// A relative `explicit` path is resolved against `project_root`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the named file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if values fail validation.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<BuildConfig> {
    let config = match explicit {
        Some(path) => {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };
            tracing::debug!("Loading config overrides from {}", path.display());
            load_config_file(&path)?
        }
        None => BuildConfig::default(),
    };

    validate(&config)?;
    Ok(config)
}

/// Load a single config file and parse it into BuildConfig.
pub fn load_config_file(path: &Path) -> Result<BuildConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BuildError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BuildError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into BuildConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BuildConfig> {
    if content.trim().is_empty() {
        return Ok(BuildConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| BuildError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_explicit_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("addon-build.yml"), "artifact: ignored.node").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn explicit_config_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("build.yml"),
            "build_script: build:native\ntools:\n  package_manager: yarn\n",
        )
        .unwrap();

        let config = load_config(temp.path(), Some(Path::new("build.yml"))).unwrap();
        assert_eq!(config.build_script, "build:native");
        assert_eq!(config.tools.package_manager, "yarn");
        assert_eq!(config.tools.runtime, "node");
    }

    #[test]
    fn absolute_config_path_is_used_as_is() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let path = elsewhere.path().join("cfg.yml");
        fs::write(&path, "artifact: other.node").unwrap();

        let config = load_config(temp.path(), Some(&path)).unwrap();
        assert_eq!(config.artifact, "other.node");
    }

    #[test]
    fn missing_explicit_config_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(Path::new("nope.yml")));
        assert!(matches!(result, Err(BuildError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.yml"), "tools: [unclosed").unwrap();

        let result = load_config(temp.path(), Some(Path::new("bad.yml")));
        assert!(matches!(result, Err(BuildError::ConfigParseError { .. })));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("c.yml"), "tools:\n  runtime: \"\"\n").unwrap();

        let result = load_config(temp.path(), Some(Path::new("c.yml")));
        assert!(matches!(
            result,
            Err(BuildError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("   \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, BuildConfig::default());
    }
}
