//! External command execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{
    describe, execute, run_silent, run_visible, CommandOptions, CommandResult,
    SPAWN_FAILURE_CODE,
};
pub use platform::{is_ci, is_ci_with};
