//! Update checking against the package index.

use serde::Serialize;

use crate::pypi::{PackageVersion, PypiClient};

use super::install::installed_version;

/// Resolved version pair for a package.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCheck {
    /// Package name as given.
    pub package: String,
    /// Locally installed version, if any.
    pub installed: Option<String>,
    /// Latest stable version on the index, if resolvable.
    pub latest: Option<String>,
}

impl UpdateCheck {
    /// Whether a newer version is available.
    ///
    /// False whenever either side of the comparison is absent; the raw
    /// comparison is never attempted on incomplete data.
    pub fn update_available(&self) -> bool {
        match (&self.installed, &self.latest) {
            (Some(installed), Some(latest)) => {
                PackageVersion::parse(installed) < PackageVersion::parse(latest)
            }
            _ => false,
        }
    }

    /// Whether both versions resolved.
    pub fn is_complete(&self) -> bool {
        self.installed.is_some() && self.latest.is_some()
    }
}

/// Resolve the installed and latest versions of a package.
pub fn check_package(client: &PypiClient, package: &str) -> UpdateCheck {
    UpdateCheck {
        package: package.to_string(),
        installed: installed_version(package),
        latest: client.latest_stable_version(package),
    }
}
