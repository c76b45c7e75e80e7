// src/scm/git.rs

//! `git2`-backed implementation of the [`ChangeSource`] seam.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use git2::{BranchType, Commit, DiffOptions, Oid, Repository, Sort};
use tracing::debug;

use crate::errors::{BranchgateError, Result};
use crate::scm::{ChangeSource, FilesystemView};
use crate::types::{Changeset, Head, RevisionId};

/// Change source backed by a local git repository (typically a clone that the
/// host keeps up to date by fetching).
pub struct GitChangeSource {
    repo: Repository,
}

impl GitChangeSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::open(path)?;
        Ok(Self { repo })
    }

    fn resolve_oid(&self, revision: &RevisionId) -> Result<Oid> {
        let object = self.repo.revparse_single(revision.as_str())?;
        Ok(object.peel_to_commit()?.id())
    }
}

impl fmt::Debug for GitChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitChangeSource")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl ChangeSource for GitChangeSource {
    fn owner(&self) -> Option<String> {
        // Bare repositories have no working directory to act as the owning
        // project; treat them as detached.
        self.repo
            .workdir()
            .map(|p| p.display().to_string())
    }

    fn filesystem_view<'a>(
        &'a self,
        head: &Head,
        revision: &RevisionId,
    ) -> Result<Box<dyn FilesystemView + 'a>> {
        let tip = self
            .resolve_oid(revision)
            .map_err(|_| BranchgateError::ViewUnresolved {
                head: head.name().to_string(),
                revision: revision.clone(),
            })?;
        Ok(Box::new(GitFilesystemView {
            repo: &self.repo,
            tip,
        }))
    }

    fn branch_tip(&self, branch: &str) -> Result<RevisionId> {
        // Local branch first, then the default remote.
        let candidates = [
            (branch.to_string(), BranchType::Local),
            (format!("origin/{branch}"), BranchType::Remote),
        ];
        for (name, kind) in candidates {
            if let Ok(found) = self.repo.find_branch(&name, kind) {
                let commit = found.get().peel_to_commit()?;
                debug!(branch = %name, tip = %commit.id(), "resolved branch tip");
                return Ok(RevisionId::new(commit.id().to_string()));
            }
        }
        Err(BranchgateError::BranchUnresolved(branch.to_string()))
    }
}

/// Repository view pinned at one commit.
struct GitFilesystemView<'a> {
    repo: &'a Repository,
    tip: Oid,
}

impl fmt::Debug for GitFilesystemView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitFilesystemView")
            .field("tip", &self.tip)
            .finish()
    }
}

impl FilesystemView for GitFilesystemView<'_> {
    fn changesets_since(&self, _head: &Head, since: &RevisionId) -> Result<Vec<Changeset>> {
        let since_oid = self
            .repo
            .revparse_single(since.as_str())?
            .peel_to_commit()?
            .id();

        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        walk.push(self.tip)?;
        walk.hide(since_oid)?;

        let mut changesets = Vec::new();
        for oid in walk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let paths = commit_paths(self.repo, &commit)?;
            changesets.push(Changeset::new(oid.to_string(), paths));
        }
        debug!(
            tip = %self.tip,
            since = %since_oid,
            count = changesets.len(),
            "enumerated changesets"
        );
        Ok(changesets)
    }
}

/// File paths touched by a single commit, relative to the repository root.
///
/// Root commits are diffed against the empty tree.
fn commit_paths(repo: &Repository, commit: &Commit<'_>) -> Result<Vec<String>> {
    let tree = commit.tree()?;
    let parent_tree = match commit.parent_count() {
        0 => None,
        _ => Some(commit.parent(0)?.tree()?),
    };

    let mut options = DiffOptions::new();
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut options))?;

    let mut paths = BTreeSet::new();
    for delta in diff.deltas() {
        for file in [delta.old_file(), delta.new_file()] {
            if let Some(path) = file.path() {
                paths.insert(path.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    Ok(paths.into_iter().collect())
}
