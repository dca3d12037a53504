//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, UpgradeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
