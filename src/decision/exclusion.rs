// src/decision/exclusion.rs

//! Excluded-branch commit filtering.

use std::collections::HashSet;

use crate::types::{Changeset, RevisionId};

/// Keep the changesets of `base` whose revision also appears in `reference`.
///
/// Intersection is by revision identifier, never by file path, so two
/// unrelated commits touching the same files are never conflated. `base`
/// order is preserved; the reference side is turned into a set, giving
/// O(n+m).
///
/// The engine passes the head's history since the previous build as `base`
/// and the head's history since the excluded branch's tip as `reference`:
/// the intersection is exactly the commits novel to this head.
pub fn intersect_by_revision(base: Vec<Changeset>, reference: &[Changeset]) -> Vec<Changeset> {
    let keep: HashSet<&RevisionId> = reference.iter().map(Changeset::revision).collect();
    base.into_iter()
        .filter(|cs| keep.contains(cs.revision()))
        .collect()
}
