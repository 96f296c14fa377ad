//! Configuration validation rules.
//!
//! - Tool, package and script names must not be empty
//! - Artifact and compile database must be bare file names

use crate::config::schema::BuildConfig;
use crate::error::{BuildError, Result};
use std::path::{Component, Path};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Config key the error refers to
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &BuildConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let required = [
        ("tools.runtime", &config.tools.runtime),
        ("tools.package_manager", &config.tools.package_manager),
        ("tools.build_helper", &config.tools.build_helper),
        ("helper_package", &config.helper_package),
        ("build_script", &config.build_script),
        ("compile_db_generator", &config.compile_db_generator),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(ValidationError {
                field: field.to_string(),
                message: format!("'{}' must not be empty", field),
            });
        }
    }

    for (field, value) in [
        ("artifact", &config.artifact),
        ("compile_db", &config.compile_db),
    ] {
        if !is_bare_file_name(value) {
            errors.push(ValidationError {
                field: field.to_string(),
                message: format!("'{}' must be a file name, got '{}'", field, value),
            });
        }
    }

    errors
}

/// Validate and convert the first problem into a [`BuildError`].
pub fn validate(config: &BuildConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(BuildError::ConfigValidationError { message })
}

fn is_bare_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&BuildConfig::default()).is_empty());
        assert!(validate(&BuildConfig::default()).is_ok());
    }

    #[test]
    fn empty_tool_name_is_rejected() {
        let mut config = BuildConfig::default();
        config.tools.build_helper = "  ".to_string();

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tools.build_helper");
    }

    #[test]
    fn artifact_with_directory_is_rejected() {
        let mut config = BuildConfig::default();
        config.artifact = "Release/isolated_vm.node".to_string();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.field == "artifact"));
    }

    #[test]
    fn parent_reference_is_rejected() {
        let mut config = BuildConfig::default();
        config.compile_db = "..".to_string();

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.field == "compile_db"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = BuildConfig::default();
        config.tools.runtime = String::new();
        config.build_script = String::new();
        config.artifact = String::new();

        assert_eq!(validate_config(&config).len(), 3);
    }

    #[test]
    fn validate_joins_messages() {
        let mut config = BuildConfig::default();
        config.tools.runtime = String::new();
        config.helper_package = String::new();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("tools.runtime"));
        assert!(msg.contains("helper_package"));
    }
}
