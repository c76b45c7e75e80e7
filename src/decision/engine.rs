// src/decision/engine.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, error, info, trace};

use crate::decision::cache::{CacheKey, ChangeSetCache};
use crate::decision::exclusion;
use crate::errors::{BranchgateError, Result};
use crate::regions::RegionSet;
use crate::scm::ChangeSource;
use crate::types::{FailPolicy, Head, Revision, RevisionId};

/// Decides whether a head update should trigger a build.
///
/// One engine instance corresponds to one configured strategy (include
/// regions + excluded branch + fail policy) and owns its change-set cache.
/// All methods take `&self`; the engine is safe to share across threads
/// evaluating different heads concurrently.
#[derive(Debug)]
pub struct DecisionEngine {
    regions: RegionSet,
    excluded_branch: String,
    fail_policy: FailPolicy,
    cache: ChangeSetCache,
}

impl DecisionEngine {
    pub fn new(
        included_regions: &str,
        excluded_branch: &str,
        fail_policy: FailPolicy,
        cache_capacity: usize,
    ) -> Self {
        Self {
            regions: RegionSet::parse(included_regions),
            excluded_branch: excluded_branch.trim().to_string(),
            fail_policy,
            cache: ChangeSetCache::new(cache_capacity),
        }
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    pub fn excluded_branch(&self) -> &str {
        &self.excluded_branch
    }

    pub fn fail_policy(&self) -> FailPolicy {
        self.fail_policy
    }

    /// Decide whether the update of `head` from `prev` to `curr` should
    /// trigger a build.
    ///
    /// Returns `true` if at least one file changed in that span falls inside
    /// an include region. Evaluation errors resolve to the configured fail
    /// policy instead of propagating.
    pub fn is_automatic_build(
        &self,
        source: &dyn ChangeSource,
        head: &Head,
        curr: &Revision,
        prev: Option<&Revision>,
    ) -> bool {
        match self.evaluate(source, head, curr, prev) {
            Ok(decision) => decision,
            Err(err) => {
                let fallback = self.fail_policy.fallback_decision();
                if err.is_resolution() {
                    error!(%head, %err, fallback, "change-set resolution failed");
                } else {
                    error!(%head, %err, fallback, "unexpected error while deciding");
                }
                fallback
            }
        }
    }

    fn evaluate(
        &self,
        source: &dyn ChangeSource,
        head: &Head,
        curr: &Revision,
        prev: Option<&Revision>,
    ) -> Result<bool> {
        // Initial builds: no previous revision recorded for this head.
        let (curr_id, prev_id) = match prev {
            Some(prev) => (curr.id().clone(), prev.id().clone()),
            None => match curr {
                Revision::PullRequest { pull, target } => {
                    info!(%head, %pull, %target, "new pull request, diffing against its target");
                    (pull.clone(), target.clone())
                }
                Revision::Plain(_) => {
                    info!(%head, "new branch, triggering initial build");
                    return Ok(true);
                }
            },
        };

        debug!(regions = ?self.regions.patterns().collect::<Vec<_>>(), "included regions");
        if self.regions.is_empty() {
            info!(%head, "no include regions configured, never triggering");
            return Ok(false);
        }

        let changed = self.changed_files(source, head, &curr_id, &prev_id)?;

        for path in changed.iter() {
            if let Some(region) = self.regions.first_match(path) {
                info!(%head, pattern = %region.pattern(), %path, "changed file inside include region");
                return Ok(true);
            }
            trace!(%path, "changed file outside all include regions");
        }

        info!(%head, files = changed.len(), "no changed file inside include regions");
        Ok(false)
    }

    fn changed_files(
        &self,
        source: &dyn ChangeSource,
        head: &Head,
        curr_id: &RevisionId,
        prev_id: &RevisionId,
    ) -> Result<Arc<[String]>> {
        let key = CacheKey::new(
            prev_id.clone(),
            curr_id.clone(),
            self.excluded_branch.clone(),
        );
        self.cache.get_or_compute(&key, || {
            self.compute_changed_files(source, head, curr_id, prev_id)
        })
    }

    fn compute_changed_files(
        &self,
        source: &dyn ChangeSource,
        head: &Head,
        curr_id: &RevisionId,
        prev_id: &RevisionId,
    ) -> Result<Vec<String>> {
        let owner = source.owner().ok_or(BranchgateError::OwnerUnresolved)?;
        debug!(%owner, %head, "resolving changed files");

        let view = source.filesystem_view(head, curr_id)?;
        let mut changesets = view.changesets_since(head, prev_id)?;

        // Exclusion is skipped when the excluded branch is the head itself;
        // every commit would be shared and nothing could ever trigger.
        if !self.excluded_branch.is_empty() && self.excluded_branch != head.name() {
            info!(branch = %self.excluded_branch, "excluding commits shared with branch");
            let excluded_tip = source.branch_tip(&self.excluded_branch)?;
            debug!(branch = %self.excluded_branch, tip = %excluded_tip, "excluded branch resolved");

            let novel = view.changesets_since(head, &excluded_tip)?;
            let before = changesets.len();
            changesets = exclusion::intersect_by_revision(changesets, &novel);
            info!(
                before,
                not_on_excluded = novel.len(),
                kept = changesets.len(),
                "applied excluded-branch filter"
            );
        }

        // Sorted and deduplicated so iteration order is stable across calls.
        let files: BTreeSet<String> = changesets
            .iter()
            .flat_map(|cs| cs.affected_paths().iter().cloned())
            .collect();
        Ok(files.into_iter().collect())
    }
}
