//! Output verbosity.

/// Output verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also echo each check in plain (non-terminal) output.
    Verbose,
    /// Progress lines, guidance and results.
    #[default]
    Normal,
    /// Guidance, warnings, errors and the final result only.
    Quiet,
}

impl OutputMode {
    /// Whether spinner messages are echoed as plain lines.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether animated spinners are drawn.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether progress lines and spacing are printed.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
