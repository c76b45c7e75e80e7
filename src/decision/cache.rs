// src/decision/cache.rs

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use tracing::debug;

use crate::errors::Result;
use crate::types::RevisionId;

/// Identity of one change-set computation.
///
/// Structural key: two computations are the same exactly when they span the
/// same revision pair under the same excluded branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    prev: RevisionId,
    curr: RevisionId,
    excluded_branch: String,
}

impl CacheKey {
    pub fn new(prev: RevisionId, curr: RevisionId, excluded_branch: impl Into<String>) -> Self {
        Self {
            prev,
            curr,
            excluded_branch: excluded_branch.into(),
        }
    }
}

/// Memoization of resolved changed-file lists.
///
/// This avoids re-walking history and re-diffing commits on every polling
/// cycle. Eviction is a bounded LRU; entries are never explicitly
/// invalidated, which is sound because a key identifies an immutable span of
/// history.
pub struct ChangeSetCache {
    entries: Mutex<LruCache<CacheKey, Arc<[String]>>>,
}

impl fmt::Debug for ChangeSetCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSetCache").finish_non_exhaustive()
    }
}

impl ChangeSetCache {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Capacity is clamped to at least one entry; config validation rejects
    /// zero before it gets here.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the cached file list for `key`, computing it via `compute` on a
    /// miss.
    ///
    /// Failed computations are not cached; a later call retries. The lock is
    /// held only for map lookup/insert, so a slow computation for one key
    /// never blocks lookups for unrelated keys. Two concurrent misses for the
    /// same key may both run `compute`; last write wins, and both compute the
    /// same value since the key pins an immutable span of history.
    pub fn get_or_compute<F>(&self, key: &CacheKey, compute: F) -> Result<Arc<[String]>>
    where
        F: FnOnce() -> Result<Vec<String>>,
    {
        if let Some(hit) = self.entries.lock().unwrap().get(key) {
            return Ok(Arc::clone(hit));
        }

        debug!(?key, "cache miss: resolving changed files");
        let value: Arc<[String]> = compute()?.into();
        self.entries
            .lock()
            .unwrap()
            .put(key.clone(), Arc::clone(&value));
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
