//! Upgrade command implementation.
//!
//! The `freshen upgrade` command runs the consent-gated upgrade flow.

use crate::cli::args::UpgradeArgs;
use crate::error::Result;
use crate::pypi::PypiClient;
use crate::ui::UserInterface;
use crate::updates::{check_package, prompt_and_upgrade};

use super::dispatcher::{Command, CommandResult};

/// The upgrade command implementation.
pub struct UpgradeCommand {
    client: PypiClient,
    args: UpgradeArgs,
}

impl UpgradeCommand {
    /// Create a new upgrade command.
    pub fn new(client: PypiClient, args: UpgradeArgs) -> Self {
        Self { client, args }
    }
}

impl Command for UpgradeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let check = check_package(&self.client, &self.args.package);
        let outcome = prompt_and_upgrade(ui, &check)?;
        tracing::debug!("Upgrade outcome for {}: {:?}", self.args.package, outcome);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use httpmock::prelude::*;

    #[test]
    fn uninstalled_package_is_a_quiet_no_op() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pypi/freshen-upgrade-test-pkg/json");
            then.status(200).json_body(serde_json::json!({
                "info": { "name": "freshen-upgrade-test-pkg", "version": "2.0.0" },
                "releases": { "2.0.0": [] }
            }));
        });

        let cmd = UpgradeCommand::new(
            PypiClient::with_base_url(server.base_url()),
            UpgradeArgs {
                package: "freshen-upgrade-test-pkg".to_string(),
            },
        );

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        // Not installed locally: the comparison is guarded, nothing is shown.
        assert!(result.success);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn unreachable_index_is_a_quiet_no_op() {
        let cmd = UpgradeCommand::new(
            PypiClient::with_base_url("http://127.0.0.1:9"),
            UpgradeArgs {
                package: "freshen-upgrade-test-pkg".to_string(),
            },
        );

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.messages().is_empty());
    }
}
