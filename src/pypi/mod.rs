//! Package index access.
//!
//! This module provides:
//! - [`PypiClient`] for querying a PyPI-compatible index over HTTP
//! - [`ProjectPage`] deserialization of the index's JSON project document
//! - [`PackageVersion`] ordering for version identifiers

pub mod client;
pub mod release;
pub mod version;

pub use client::{PypiClient, DEFAULT_INDEX_URL};
pub use release::{is_stable, ProjectInfo, ProjectPage};
pub use version::PackageVersion;
