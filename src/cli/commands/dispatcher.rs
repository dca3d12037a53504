//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::pypi::PypiClient;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    index_url: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher with an optional index override.
    pub fn new(index_url: Option<String>) -> Self {
        Self { index_url }
    }

    /// Build the index client the commands share.
    fn client(&self) -> PypiClient {
        match &self.index_url {
            Some(url) => PypiClient::with_base_url(url),
            None => PypiClient::new(),
        }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.client(), args.clone());
                cmd.execute(ui)
            }
            Commands::Upgrade(args) => {
                let cmd = super::upgrade::UpgradeCommand::new(self.client(), args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_uses_the_index_override() {
        let dispatcher = CommandDispatcher::new(Some("http://127.0.0.1:8080".to_string()));
        assert_eq!(dispatcher.client().base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn dispatcher_defaults_to_the_public_index() {
        let dispatcher = CommandDispatcher::new(None);
        assert_eq!(dispatcher.client().base_url(), "https://pypi.org");
    }
}
