//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status messages plus extra detail.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show final results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows spinners and animations.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows extra detail.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
