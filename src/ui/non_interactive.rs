//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{
    AnimationHandle, ConfirmPrompt, OutputMode, SpinnerHandle, UserInterface,
};

/// UI implementation for non-interactive mode.
///
/// Prompts are never shown; they answer their default. Spinners and the
/// install animation collapse to single status lines, which read better in
/// log-based environments.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn highlight(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        Ok(prompt.default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn start_install_animation(&mut self, package: &str) -> Box<dyn AnimationHandle> {
        if self.mode.shows_status() {
            println!("Installing {}...", package);
        }
        Box::new(NoopAnimation)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints final states as plain lines.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("○ {}", msg);
    }
}

/// Animation handle with no worker behind it.
pub(crate) struct NoopAnimation;

impl AnimationHandle for NoopAnimation {
    fn finish(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn confirm_answers_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let decline = ConfirmPrompt {
            key: "upgrade_demo".to_string(),
            question: "Upgrade?".to_string(),
            default: false,
        };
        assert!(!ui.confirm(&decline).unwrap());

        let accept = ConfirmPrompt {
            default: true,
            ..decline
        };
        assert!(ui.confirm(&accept).unwrap());
    }

    #[test]
    fn animation_handle_is_inert() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let mut animation = ui.start_install_animation("demo-tool");
        animation.finish();
        animation.finish();
    }
}
