//! Upgrade prompting and execution.

use crate::error::Result;
use crate::ui::{ConfirmPrompt, UserInterface};

use super::check::UpdateCheck;
use super::install::Installer;

/// Result of an upgrade attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// The installed version is current.
    UpToDate,
    /// Installed or latest version could not be resolved; no comparison made.
    Indeterminate,
    /// An update exists but was not installed (declined, or no terminal).
    Skipped,
    /// The installer ran successfully.
    Upgraded { version: String },
}

/// Compare versions, ask for consent, and run the installer.
///
/// Quiet on the no-op paths: an up-to-date or unresolved package produces
/// no user-visible output. A failing installer propagates as an error after
/// the install animation has been stopped and joined.
pub fn prompt_and_upgrade(
    ui: &mut dyn UserInterface,
    check: &UpdateCheck,
) -> Result<UpgradeOutcome> {
    let (installed, latest) = match (&check.installed, &check.latest) {
        (Some(installed), Some(latest)) => (installed, latest),
        _ => {
            tracing::debug!(
                "Skipping upgrade check for {}: installed={:?} latest={:?}",
                check.package,
                check.installed,
                check.latest
            );
            return Ok(UpgradeOutcome::Indeterminate);
        }
    };

    if !check.update_available() {
        return Ok(UpgradeOutcome::UpToDate);
    }

    ui.info(&format!(
        "There is a new version of {} available: {}.",
        check.package, latest
    ));

    if !ui.is_interactive() {
        ui.message(&format!(
            "Run `freshen upgrade {}` in a terminal to install it.",
            check.package
        ));
        return Ok(UpgradeOutcome::Skipped);
    }

    let confirmed = ui.confirm(&ConfirmPrompt {
        key: format!("upgrade_{}", check.package),
        question: format!(
            "Do you want to upgrade {} from version {} to {}?",
            check.package, installed, latest
        ),
        default: false,
    })?;

    if !confirmed {
        ui.info(&format!("{} upgrade skipped.", check.package));
        return Ok(UpgradeOutcome::Skipped);
    }

    let installer = Installer::detect()?;
    execute_upgrade(ui, &installer, &check.package, latest)
}

/// Run the installer under the cosmetic install animation.
///
/// The animation is signaled and joined on every exit path, including an
/// installer failure, before the error propagates.
fn execute_upgrade(
    ui: &mut dyn UserInterface,
    installer: &Installer,
    package: &str,
    latest: &str,
) -> Result<UpgradeOutcome> {
    ui.highlight(&format!("Upgrading {}...", package));
    tracing::debug!("Upgrading {} via {}", package, installer.name());

    let mut animation = ui.start_install_animation(package);
    let result = installer.run_upgrade(package);
    animation.finish();
    result?;

    ui.success(&format!("{} upgraded to version {}.", package, latest));
    ui.message("Please restart the tool to pick up the new version.");

    Ok(UpgradeOutcome::Upgraded {
        version: latest.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn check(installed: Option<&str>, latest: Option<&str>) -> UpdateCheck {
        UpdateCheck {
            package: "demo-tool".to_string(),
            installed: installed.map(String::from),
            latest: latest.map(String::from),
        }
    }

    #[test]
    fn up_to_date_is_silent() {
        let mut ui = MockUI::interactive();
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("1.0.0"), Some("1.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::UpToDate);
        assert!(ui.messages().is_empty());
        assert!(ui.confirms_asked().is_empty());
    }

    #[test]
    fn newer_installed_is_silent() {
        let mut ui = MockUI::interactive();
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("2.0.0"), Some("1.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::UpToDate);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn absent_installed_version_is_guarded() {
        let mut ui = MockUI::interactive();
        let outcome = prompt_and_upgrade(&mut ui, &check(None, Some("1.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::Indeterminate);
        assert!(ui.messages().is_empty());
        assert!(ui.confirms_asked().is_empty());
    }

    #[test]
    fn absent_latest_version_is_guarded() {
        let mut ui = MockUI::interactive();
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("1.0.0"), None)).unwrap();
        assert_eq!(outcome, UpgradeOutcome::Indeterminate);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn update_offer_is_shown_exactly_once() {
        let mut ui = MockUI::interactive();
        // Declines via the prompt default.
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("1.0.0"), Some("2.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::Skipped);
        assert!(ui.has_message("new version of demo-tool available: 2.0.0"));
        assert_eq!(ui.confirms_asked(), vec!["upgrade_demo-tool".to_string()]);
    }

    #[test]
    fn declined_prompt_skips_without_installing() {
        let mut ui = MockUI::interactive();
        ui.set_confirm_response("upgrade_demo-tool", false);
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("1.0.0"), Some("2.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::Skipped);
        assert!(ui.has_message("demo-tool upgrade skipped."));
        assert_eq!(ui.animations_started(), 0);
    }

    #[test]
    fn non_interactive_shows_hint_instead_of_prompting() {
        let mut ui = MockUI::new();
        let outcome = prompt_and_upgrade(&mut ui, &check(Some("1.0.0"), Some("2.0.0"))).unwrap();
        assert_eq!(outcome, UpgradeOutcome::Skipped);
        assert!(ui.has_message("new version of demo-tool available"));
        assert!(ui.has_message("Run `freshen upgrade demo-tool` in a terminal"));
        assert!(ui.confirms_asked().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn execute_upgrade_reports_the_new_version() {
        let mut ui = MockUI::interactive();
        let installer = Installer::Pip {
            python: "true".to_string(),
        };
        let outcome = execute_upgrade(&mut ui, &installer, "demo-tool", "2.0.0").unwrap();
        assert_eq!(
            outcome,
            UpgradeOutcome::Upgraded {
                version: "2.0.0".to_string()
            }
        );
        assert!(ui.has_message("Upgrading demo-tool..."));
        assert!(ui.has_message("✓ demo-tool upgraded to version 2.0.0."));
        assert!(ui.has_message("Please restart the tool"));
        assert_eq!(ui.animations_started(), 1);
        assert_eq!(ui.animations_finished(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn execute_upgrade_joins_animation_on_failure() {
        let mut ui = MockUI::interactive();
        let installer = Installer::Pip {
            python: "false".to_string(),
        };
        let err = execute_upgrade(&mut ui, &installer, "demo-tool", "2.0.0");
        assert!(err.is_err());
        // The animation never outlives the install step, even on failure.
        assert_eq!(ui.animations_started(), 1);
        assert_eq!(ui.animations_finished(), 1);
        assert!(!ui.has_message("upgraded to version"));
    }
}
