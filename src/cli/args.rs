//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Freshen - keep PyPI-distributed command-line tools up to date.
#[derive(Debug, Parser)]
#[command(name = "freshen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the package index
    #[arg(long, global = true, env = "FRESHEN_INDEX_URL")]
    pub index_url: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a newer stable release is available
    Check(CheckArgs),

    /// Upgrade a package to its latest stable release
    Upgrade(UpgradeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Package to check
    pub package: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `upgrade` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpgradeArgs {
    /// Package to upgrade
    pub package: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
