//! HTTP access to a PyPI-compatible package index.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use super::release::ProjectPage;

/// The public package index.
pub const DEFAULT_INDEX_URL: &str = "https://pypi.org";

/// Queries a PyPI-compatible index for project metadata.
pub struct PypiClient {
    client: Client,
    base_url: String,
}

impl PypiClient {
    /// Create a client for the public index.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_INDEX_URL)
    }

    /// Create a client for a custom index (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::builder()
                .user_agent(concat!("freshen/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// The configured index base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a project's JSON document from the index.
    pub fn project_page(&self, package: &str) -> Result<ProjectPage> {
        let url = format!("{}/pypi/{}/json", self.base_url, package);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .json()
            .context("Failed to parse package index response")
    }

    /// The latest stable version of a package.
    ///
    /// Returns `None` when the index is unreachable or answers non-200;
    /// resolution failures are reported at debug level only.
    pub fn latest_stable_version(&self, package: &str) -> Option<String> {
        match self.project_page(package) {
            Ok(page) => Some(page.latest_stable()),
            Err(err) => {
                tracing::debug!("Version lookup failed for {}: {:#}", package, err);
                None
            }
        }
    }
}

impl Default for PypiClient {
    fn default() -> Self {
        Self::new()
    }
}
