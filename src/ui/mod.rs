//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - Confirmation prompts, spinners, and the install animation

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::InstallAnimation;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FreshenTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message to the user.
    fn message(&mut self, msg: &str);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a highlighted/important message.
    fn highlight(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a yes/no confirmation prompt.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Start the cosmetic install animation for a package.
    fn start_install_animation(&mut self, package: &str) -> Box<dyn AnimationHandle>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as skipped.
    fn finish_skipped(&mut self, msg: &str);
}

/// Handle for stopping the install animation.
pub trait AnimationHandle {
    /// Signal the animation to stop and wait for its worker to exit.
    ///
    /// Idempotent; must be called on every exit path of the install step.
    fn finish(&mut self);
}

/// A yes/no confirmation prompt.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    /// Unique key for the prompt (used for scripted answers in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer assumed when the user just presses enter.
    pub default: bool,
}
