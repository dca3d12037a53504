//! Freshen - keep PyPI-distributed command-line tools up to date.
//!
//! Freshen checks a PyPI-compatible index for a newer stable release of a
//! package, asks for consent, and performs the upgrade through `uv` when
//! available (else `pip`). It ships as a binary and as a library, so CLI
//! tools distributed on PyPI can embed the flow as their own self-update
//! step.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`pypi`] - Package index client and version ordering
//! - [`shell`] - Platform and environment helpers
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`updates`] - Update checking, consent prompting, and installer invocation
//!
//! # Example
//!
//! ```
//! use freshen::pypi::PackageVersion;
//!
//! // Version ordering is numeric per component, not lexical.
//! assert!(PackageVersion::parse("1.9.0") < PackageVersion::parse("1.10.0"));
//! ```

pub mod cli;
pub mod error;
pub mod pypi;
pub mod shell;
pub mod ui;
pub mod updates;

pub use error::{FreshenError, Result};
