//! Command-line interface for addon-build.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`build`] - The build command

pub mod args;
pub mod build;

pub use args::Cli;
pub use build::{BuildCommand, CommandResult};
