// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::RevisionId;

#[derive(Error, Debug)]
pub enum BranchgateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("could not resolve the owner of the change source")]
    OwnerUnresolved,

    #[error("could not build a filesystem view for head '{head}' at {revision}")]
    ViewUnresolved { head: String, revision: RevisionId },

    #[error("could not resolve branch '{0}' to a revision")]
    BranchUnresolved(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Git error: {0}")]
    GitError(#[from] git2::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BranchgateError {
    /// True for infrastructure-level resolution failures (owner, filesystem
    /// view, excluded-branch tip), as opposed to configuration problems or
    /// unexpected errors. Only used to pick log wording; the fail policy
    /// applies uniformly.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            BranchgateError::OwnerUnresolved
                | BranchgateError::ViewUnresolved { .. }
                | BranchgateError::BranchUnresolved(_)
        )
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BranchgateError>;
