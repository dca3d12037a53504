//! Project document parsing and stable-release selection.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::version::PackageVersion;

/// Substrings that mark a release identifier as a pre-release or
/// post-release. Matching is substring-based, so any `a` or `b` anywhere
/// in the identifier marks it unstable.
const PRERELEASE_MARKERS: [&str; 6] = ["a", "b", "rc", "dev", ".post", ".pre"];

/// The index's JSON project document (`/pypi/{name}/json`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPage {
    /// Current-release metadata.
    pub info: ProjectInfo,
    /// All release identifiers, mapped to their file listings.
    pub releases: BTreeMap<String, serde_json::Value>,
}

/// The `info` block of a project document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    /// Package name as registered on the index.
    pub name: String,
    /// The index's current version for the project.
    pub version: String,
}

/// Check whether a release identifier is a stable release.
pub fn is_stable(version: &str) -> bool {
    !PRERELEASE_MARKERS
        .iter()
        .any(|marker| version.contains(marker))
}

impl ProjectPage {
    /// The latest stable release identifier.
    ///
    /// Falls back to the index's current version when no release
    /// identifier survives the stable filter.
    pub fn latest_stable(&self) -> String {
        self.releases
            .keys()
            .filter(|version| is_stable(version))
            .max_by_key(|version| PackageVersion::parse(version))
            .cloned()
            .unwrap_or_else(|| self.info.version.clone())
    }
}
