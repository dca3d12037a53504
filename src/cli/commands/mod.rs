//! CLI subcommand implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod upgrade;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
