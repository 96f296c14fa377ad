//! External command execution.
//!
//! Commands are spawned directly (no intermediate shell) using the
//! executable path resolved by the tool probe.

use crate::error::{BuildError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

/// Exit code reported when a command cannot be started at all.
pub const SPAWN_FAILURE_CODE: i32 = 1;

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, when captured.
    pub stdout: Option<String>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Discard stderr (if false, inherits from parent).
    pub discard_stderr: bool,

    /// Inherit stdin so the command can prompt the user.
    pub interactive: bool,
}

/// Execute a command.
///
/// # Errors
///
/// Returns `CommandFailed` with no exit code if the process could not be
/// spawned. A process that runs and exits non-zero is an `Ok` result.
pub fn execute(program: &Path, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let command_line = describe(program, args);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(if options.interactive {
        Stdio::inherit()
    } else {
        Stdio::null()
    });
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.discard_stderr {
        Stdio::null()
    } else {
        Stdio::inherit()
    });

    tracing::debug!("Running: {}", command_line);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start '{}': {}", command_line, e);
        BuildError::CommandFailed {
            command: command_line.clone(),
            code: None,
        }
    })?;

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        command_line,
        output.status.code(),
        start.elapsed()
    );

    let stdout = options
        .capture_stdout
        .then(|| String::from_utf8_lossy(&output.stdout).to_string());

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        success: output.status.success(),
    })
}

/// Run a command quietly and return its trimmed stdout.
///
/// Stderr is discarded. Returns `None` if the command is missing, can't be
/// started, or exits non-zero; this never fails.
pub fn run_silent(program: &Path, args: &[&str]) -> Option<String> {
    let options = CommandOptions {
        capture_stdout: true,
        discard_stderr: true,
        ..Default::default()
    };

    match execute(program, args, &options) {
        Ok(result) if result.success => result.stdout.map(|s| s.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("{}", e);
            None
        }
    }
}

/// Run a command with its output visible to the user and return the exit code.
///
/// Returns [`SPAWN_FAILURE_CODE`] if the command can't be started or was
/// terminated by a signal.
pub fn run_visible(program: &Path, args: &[&str], cwd: &Path) -> i32 {
    let options = CommandOptions {
        cwd: Some(cwd.to_path_buf()),
        interactive: true,
        ..Default::default()
    };

    match execute(program, args, &options) {
        Ok(result) => result.exit_code.unwrap_or(SPAWN_FAILURE_CODE),
        Err(e) => {
            tracing::warn!("{}", e);
            SPAWN_FAILURE_CODE
        }
    }
}

/// Human-readable form of a command line, used in logs and errors.
pub fn describe(program: &Path, args: &[&str]) -> String {
    let name = program
        .file_name()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy();
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, args.join(" "))
    }
}
