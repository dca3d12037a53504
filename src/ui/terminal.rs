//! Interactive terminal UI.

use console::Term;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{FreshenError, Result};

use super::non_interactive::NoopAnimation;
use super::{
    AnimationHandle, ConfirmPrompt, FreshenTheme, InstallAnimation, NonInteractiveUI, OutputMode,
    ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Convert dialoguer errors to FreshenError.
fn map_dialoguer_err(e: dialoguer::Error) -> FreshenError {
    FreshenError::Io(e.into())
}

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: FreshenTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// `use_colors` is decided once by the caller; the UI never consults
    /// process-wide state for it.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: FreshenTheme::from_colors(use_colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.info.apply_to(msg)).ok();
        }
    }

    fn highlight(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.highlight.apply_to(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        Confirm::new()
            .with_prompt(&prompt.question)
            .default(prompt.default)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn start_install_animation(&mut self, package: &str) -> Box<dyn AnimationHandle> {
        if self.mode.shows_spinners() {
            Box::new(InstallAnimation::start(package))
        } else {
            Box::new(NoopAnimation)
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode, use_colors: bool) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, use_colors))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
