//! Mock UI for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;

use super::{AnimationHandle, ConfirmPrompt, OutputMode, SpinnerHandle, UserInterface};

#[derive(Default)]
struct MockState {
    messages: Vec<String>,
    confirms_asked: Vec<String>,
    animations_started: usize,
    animations_finished: usize,
}

/// Recording UI implementation for tests.
///
/// Captures every message, logs confirm prompts, and answers them from
/// scripted responses (falling back to the prompt's default).
pub struct MockUI {
    state: Arc<Mutex<MockState>>,
    confirm_responses: HashMap<String, bool>,
    interactive: bool,
    mode: OutputMode,
}

impl MockUI {
    /// Create a non-interactive mock.
    pub fn new() -> Self {
        Self::with_interactive(false)
    }

    /// Create an interactive mock; confirm prompts consult scripted answers.
    pub fn interactive() -> Self {
        Self::with_interactive(true)
    }

    fn with_interactive(interactive: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            confirm_responses: HashMap::new(),
            interactive,
            mode: OutputMode::Normal,
        }
    }

    /// Script the answer for a confirm prompt key.
    pub fn set_confirm_response(&mut self, key: &str, answer: bool) {
        self.confirm_responses.insert(key.to_string(), answer);
    }

    /// Check whether any recorded message contains the fragment.
    pub fn has_message(&self, fragment: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .messages
            .iter()
            .any(|m| m.contains(fragment))
    }

    /// All recorded messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.state.lock().unwrap().messages.clone()
    }

    /// Keys of the confirm prompts that were shown.
    pub fn confirms_asked(&self) -> Vec<String> {
        self.state.lock().unwrap().confirms_asked.clone()
    }

    /// Number of install animations started.
    pub fn animations_started(&self) -> usize {
        self.state.lock().unwrap().animations_started
    }

    /// Number of install animations finished.
    pub fn animations_finished(&self) -> usize {
        self.state.lock().unwrap().animations_finished
    }

    fn record(&self, msg: &str) {
        self.state.lock().unwrap().messages.push(msg.to_string());
    }
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(msg);
    }

    fn info(&mut self, msg: &str) {
        self.record(msg);
    }

    fn highlight(&mut self, msg: &str) {
        self.record(msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(&format!("✓ {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.record(&format!("⚠ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.record(&format!("✗ {}", msg));
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.confirms_asked.push(prompt.key.clone());
        Ok(self
            .confirm_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(&format!("spinner: {}", message));
        Box::new(MockSpinner {
            state: Arc::clone(&self.state),
        })
    }

    fn start_install_animation(&mut self, package: &str) -> Box<dyn AnimationHandle> {
        let mut state = self.state.lock().unwrap();
        state.animations_started += 1;
        state.messages.push(format!("animation: {}", package));
        Box::new(MockAnimation {
            state: Arc::clone(&self.state),
            finished: false,
        })
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle recording its final state into the shared log.
struct MockSpinner {
    state: Arc<Mutex<MockState>>,
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.state
            .lock()
            .unwrap()
            .messages
            .push(format!("✓ {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.state
            .lock()
            .unwrap()
            .messages
            .push(format!("✗ {}", msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.state
            .lock()
            .unwrap()
            .messages
            .push(format!("○ {}", msg));
    }
}

/// Animation handle counting finish calls (once per handle).
struct MockAnimation {
    state: Arc<Mutex<MockState>>,
    finished: bool,
}

impl AnimationHandle for MockAnimation {
    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.state.lock().unwrap().animations_finished += 1;
        }
    }
}
