// src/scm/mod.rs

//! Version-control collaborator seam.
//!
//! The decision engine never talks to a VCS directly; it goes through the
//! [`ChangeSource`] / [`FilesystemView`] traits. Production code uses the
//! `git2`-backed [`GitChangeSource`]; tests can use the scripted
//! [`mock::MockChangeSource`] without touching a real repository.

use std::fmt::Debug;

use crate::errors::Result;
use crate::types::{Changeset, Head, RevisionId};

pub mod git;
pub mod mock;

pub use git::GitChangeSource;

/// A source of change history for one repository.
///
/// Not `Sync`: `git2::Repository` handles are single-threaded. Hosts that
/// evaluate heads concurrently open one source per worker.
pub trait ChangeSource {
    /// Identity of the project that owns this source (e.g. the repository
    /// working directory). `None` means the source is detached from any
    /// project and change-set resolution cannot proceed.
    fn owner(&self) -> Option<String>;

    /// Snapshot of `head` at `revision`, from which history can be
    /// enumerated.
    fn filesystem_view<'a>(
        &'a self,
        head: &Head,
        revision: &RevisionId,
    ) -> Result<Box<dyn FilesystemView + 'a>>;

    /// Resolve a named branch to its current tip revision.
    fn branch_tip(&self, branch: &str) -> Result<RevisionId>;
}

/// A view of the repository pinned at one revision.
pub trait FilesystemView: Debug {
    /// Linear history of changesets between `since` (exclusive) and this
    /// view's revision, newest first. Each changeset carries the file paths
    /// it touches.
    fn changesets_since(&self, head: &Head, since: &RevisionId) -> Result<Vec<Changeset>>;
}
