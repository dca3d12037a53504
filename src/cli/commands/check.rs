//! Check command implementation.
//!
//! The `freshen check` command reports whether a newer stable release of a
//! package is available, without installing anything.

use anyhow::Context;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::pypi::PypiClient;
use crate::ui::UserInterface;
use crate::updates::check_package;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    client: PypiClient,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(client: PypiClient, args: CheckArgs) -> Self {
        Self { client, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package = &self.args.package;

        if self.args.json {
            let check = check_package(&self.client, package);
            let body = serde_json::to_string_pretty(&check)
                .context("Failed to serialize check result")?;
            println!("{}", body);
            return Ok(CommandResult::success());
        }

        if ui.output_mode().is_verbose() {
            ui.message(&format!("Index: {}", self.client.base_url()));
        }

        let mut spinner = ui.start_spinner(&format!("Checking {}...", package));
        let check = check_package(&self.client, package);

        match (&check.installed, &check.latest) {
            (_, None) => {
                spinner.finish_error(&format!(
                    "Could not resolve the latest release of {}",
                    package
                ));
                Ok(CommandResult::failure(1))
            }
            (None, Some(latest)) => {
                spinner.finish_skipped(&format!(
                    "{} is not installed locally (latest release: {})",
                    package, latest
                ));
                Ok(CommandResult::success())
            }
            (Some(installed), Some(latest)) if check.update_available() => {
                spinner.finish_success(&format!(
                    "Update available: {} {} -> {}",
                    package, installed, latest
                ));
                ui.message(&format!("Run `freshen upgrade {}` to install it.", package));
                Ok(CommandResult::success())
            }
            (Some(installed), Some(_)) => {
                spinner.finish_success(&format!("{} is up to date ({})", package, installed));
                Ok(CommandResult::success())
            }
        }
    }
}
