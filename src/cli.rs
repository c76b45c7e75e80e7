// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `branchgate`.
///
/// The binary evaluates one build decision for one head update and exits 0
/// (build) or 2 (skip), so it can gate a CI pipeline step directly.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "branchgate",
    version,
    about = "Decide whether a branch update should trigger a build, based on changed include regions.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Branchgate.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Branchgate.toml")]
    pub config: String,

    /// Path to the git repository to inspect.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: String,

    /// Name of the head (branch or pull request) being updated.
    #[arg(long, value_name = "NAME")]
    pub head: String,

    /// Current revision of the head.
    ///
    /// If omitted, the head's branch tip is resolved from the repository.
    #[arg(long, value_name = "REV")]
    pub curr: Option<String>,

    /// Revision of the last build, if one is recorded.
    ///
    /// Omitting this marks the update as an initial build.
    #[arg(long, value_name = "REV")]
    pub prev: Option<String>,

    /// Treat the head as a pull request targeting this branch.
    #[arg(long, value_name = "BRANCH")]
    pub target: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BRANCHGATE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the strategy, but don't evaluate anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
