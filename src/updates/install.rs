//! Installer selection and invocation.
//!
//! Upgrades go through `uv` when its version probe succeeds, else through
//! `pip` invoked via a Python interpreter found on PATH.

use std::process::{Command, Stdio};

use crate::error::{FreshenError, Result};

const UV_BIN: &str = "uv";
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Which installer performs the upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Installer {
    /// The `uv` binary, preferred when present.
    Uv,
    /// `pip` invoked through a Python interpreter.
    Pip { python: String },
}

impl Installer {
    /// Select the installer.
    ///
    /// Probes `uv --version` with all output discarded; any failure means
    /// the `pip` fallback. Only a missing Python interpreter is an error.
    pub fn detect() -> Result<Self> {
        if probe_version_command(UV_BIN) {
            return Ok(Installer::Uv);
        }
        let python = python_interpreter().ok_or(FreshenError::NoInterpreter)?;
        Ok(Installer::Pip { python })
    }

    /// Get a human-readable name for this installer.
    pub fn name(&self) -> &str {
        match self {
            Installer::Uv => "uv",
            Installer::Pip { .. } => "pip",
        }
    }

    /// The full upgrade invocation as a display string.
    pub fn command_line(&self, package: &str) -> String {
        self.argv(package).join(" ")
    }

    fn argv(&self, package: &str) -> Vec<String> {
        let mut argv: Vec<String> = match self {
            Installer::Uv => vec![UV_BIN.to_string(), "pip".to_string()],
            Installer::Pip { python } => {
                vec![python.clone(), "-m".to_string(), "pip".to_string()]
            }
        };
        argv.extend(
            [
                "install",
                "--upgrade",
                package,
                "--quiet",
                "--disable-pip-version-check",
            ]
            .map(String::from),
        );
        argv
    }

    /// Run the upgrade.
    ///
    /// The subprocess's stderr is suppressed. A non-zero exit is fatal for
    /// the attempt and propagates as [`FreshenError::InstallerFailed`].
    pub fn run_upgrade(&self, package: &str) -> Result<()> {
        let argv = self.argv(package);
        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(FreshenError::InstallerFailed {
                command: self.command_line(package),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Probe a binary by running its version command with output discarded.
fn probe_version_command(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// First Python interpreter answering its version probe on PATH.
fn python_interpreter() -> Option<String> {
    PYTHON_CANDIDATES
        .iter()
        .copied()
        .find(|candidate| probe_version_command(candidate))
        .map(String::from)
}

/// Installed version of a package, from local pip metadata.
///
/// Returns `None` (never an error) when no interpreter is available, the
/// package is not installed, or the metadata has no version field.
pub fn installed_version(package: &str) -> Option<String> {
    let python = python_interpreter()?;
    let output = Command::new(&python)
        .args(["-m", "pip", "show", package])
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    extract_version_field(&String::from_utf8_lossy(&output.stdout))
}

/// Extract the `Version:` field from `pip show` output.
fn extract_version_field(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"(?m)^Version:\s*(\S+)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
