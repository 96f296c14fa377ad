//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// addon-build - Build the native addon and move its outputs into place.
#[derive(Debug, Clone, Parser)]
#[command(name = "addon-build")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generate compile_commands.json before building
    #[arg(short = 'C', long)]
    pub init: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "ADDON_BUILD_PROJECT")]
    pub project: Option<PathBuf>,

    /// Path to a YAML file overriding tool names and paths
    #[arg(short, long, env = "ADDON_BUILD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never prompt; answer every question with its default
    #[arg(long)]
    pub non_interactive: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_a_plain_build() {
        let cli = Cli::try_parse_from(["addon-build"]).unwrap();
        assert!(!cli.init);
        assert!(cli.config.is_none());
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn short_init_flag() {
        let cli = Cli::try_parse_from(["addon-build", "-C"]).unwrap();
        assert!(cli.init);
    }

    #[test]
    fn long_init_flag() {
        let cli = Cli::try_parse_from(["addon-build", "--init"]).unwrap();
        assert!(cli.init);
    }

    #[test]
    fn project_and_config_paths() {
        let cli = Cli::try_parse_from([
            "addon-build",
            "--project",
            "/work/isolated-vm",
            "-c",
            "build.yml",
        ])
        .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/work/isolated-vm")));
        assert_eq!(cli.config, Some(PathBuf::from("build.yml")));
    }

    #[test]
    fn quiet_selects_quiet_mode() {
        let cli = Cli::try_parse_from(["addon-build", "-q"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn verbose_selects_verbose_mode() {
        let cli = Cli::try_parse_from(["addon-build", "--verbose"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Verbose);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["addon-build", "-q", "-v"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["addon-build", "--release"]).is_err());
    }
}
