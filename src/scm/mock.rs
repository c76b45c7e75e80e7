// src/scm/mock.rs

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{BranchgateError, Result};
use crate::scm::{ChangeSource, FilesystemView};
use crate::types::{Changeset, Head, RevisionId};

/// Scripted in-memory [`ChangeSource`] for tests.
///
/// History is keyed by `(head name, since revision)`: a test scripts exactly
/// the changeset lists the engine is expected to request. Unscripted queries
/// return an empty history. Call counters let tests assert how often the
/// collaborator was consulted (e.g. for cache behaviour).
#[derive(Default)]
pub struct MockChangeSource {
    owner: Option<String>,
    branch_tips: HashMap<String, RevisionId>,
    history: HashMap<(String, RevisionId), Vec<Changeset>>,
    fail_views: bool,
    view_calls: AtomicUsize,
    changeset_queries: AtomicUsize,
}

impl MockChangeSource {
    pub fn new() -> Self {
        Self {
            owner: Some("mock-project".to_string()),
            ..Self::default()
        }
    }

    /// Simulate a source whose owner cannot be resolved.
    pub fn without_owner(mut self) -> Self {
        self.owner = None;
        self
    }

    /// Simulate an infrastructure failure when building filesystem views.
    pub fn failing_views(mut self) -> Self {
        self.fail_views = true;
        self
    }

    pub fn with_branch_tip(mut self, branch: &str, tip: impl Into<RevisionId>) -> Self {
        self.branch_tips.insert(branch.to_string(), tip.into());
        self
    }

    /// Script the changesets returned for `head` since `since`.
    pub fn with_changesets(
        mut self,
        head: &str,
        since: impl Into<RevisionId>,
        changesets: Vec<Changeset>,
    ) -> Self {
        self.history
            .insert((head.to_string(), since.into()), changesets);
        self
    }

    /// Number of filesystem views built so far.
    pub fn view_calls(&self) -> usize {
        self.view_calls.load(Ordering::SeqCst)
    }

    /// Number of changeset enumerations performed so far.
    pub fn changeset_queries(&self) -> usize {
        self.changeset_queries.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for MockChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockChangeSource")
            .field("owner", &self.owner)
            .field("heads", &self.history.len())
            .finish()
    }
}

impl ChangeSource for MockChangeSource {
    fn owner(&self) -> Option<String> {
        self.owner.clone()
    }

    fn filesystem_view<'a>(
        &'a self,
        head: &Head,
        revision: &RevisionId,
    ) -> Result<Box<dyn FilesystemView + 'a>> {
        self.view_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_views {
            return Err(BranchgateError::ViewUnresolved {
                head: head.name().to_string(),
                revision: revision.clone(),
            });
        }
        Ok(Box::new(MockView { source: self }))
    }

    fn branch_tip(&self, branch: &str) -> Result<RevisionId> {
        self.branch_tips
            .get(branch)
            .cloned()
            .ok_or_else(|| BranchgateError::BranchUnresolved(branch.to_string()))
    }
}

struct MockView<'a> {
    source: &'a MockChangeSource,
}

impl fmt::Debug for MockView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockView").finish()
    }
}

impl FilesystemView for MockView<'_> {
    fn changesets_since(&self, head: &Head, since: &RevisionId) -> Result<Vec<Changeset>> {
        self.source.changeset_queries.fetch_add(1, Ordering::SeqCst);
        let key = (head.name().to_string(), since.clone());
        Ok(self.source.history.get(&key).cloned().unwrap_or_default())
    }
}
