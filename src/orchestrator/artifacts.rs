//! Artifact relocation.
//!
//! Build outputs are moved, never copied: after a successful relocation
//! the source path no longer exists.

use crate::error::{BuildError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Move `from` to `to`, replacing any existing file at `to`.
///
/// The destination's parent directory is created if needed, once the
/// source is known to exist. When `from` and `to` are on different
/// filesystems the file is copied and the source removed.
///
/// # Errors
///
/// Returns `ArtifactMove` if the source is missing or any filesystem
/// operation fails.
pub fn relocate(from: &Path, to: &Path) -> Result<()> {
    let move_err = |source: std::io::Error| BuildError::ArtifactMove {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    fs::metadata(from).map_err(move_err)?;

    if let Some(parent) = to.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(move_err)?;
        }
    }

    match fs::rename(from, to) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            tracing::debug!(
                "{} and {} are on different devices, copying instead",
                from.display(),
                to.display()
            );
            fs::copy(from, to).map_err(move_err)?;
            fs::remove_file(from).map_err(move_err)?;
        }
        Err(e) => return Err(move_err(e)),
    }

    tracing::debug!("Moved {} -> {}", from.display(), to.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn moves_file_and_removes_source() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("build/Release/isolated_vm.node");
        let to = temp.path().join("out/isolated_vm.node");
        fs::create_dir_all(from.parent().unwrap()).unwrap();
        fs::create_dir_all(to.parent().unwrap()).unwrap();
        fs::write(&from, b"\x7fELF").unwrap();

        relocate(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"\x7fELF");
    }

    #[test]
    fn creates_missing_destination_directory() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("artifact.node");
        let to = temp.path().join("out/nested/artifact.node");
        fs::write(&from, "addon").unwrap();

        relocate(&from, &to).unwrap();

        assert!(to.exists());
        assert!(!from.exists());
    }

    #[test]
    fn replaces_existing_destination() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("compile_commands.new.json");
        let to = temp.path().join("compile_commands.json");
        fs::write(&from, "[new]").unwrap();
        fs::write(&to, "[old]").unwrap();

        relocate(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "[new]");
    }

    #[test]
    fn missing_source_is_artifact_move_error() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("build/Release/isolated_vm.node");
        let to = temp.path().join("out/isolated_vm.node");

        let err = relocate(&from, &to).unwrap_err();
        match err {
            BuildError::ArtifactMove {
                from: f, source, ..
            } => {
                assert_eq!(f, from);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected ArtifactMove, got {:?}", other),
        }
        assert!(!to.exists());
    }

    #[test]
    fn missing_source_leaves_no_output_directory() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("build/Release/isolated_vm.node");
        let to = temp.path().join("out/isolated_vm.node");

        assert!(relocate(&from, &to).is_err());
        assert!(!temp.path().join("out").exists());
    }
}
