use std::sync::atomic::{AtomicUsize, Ordering};

use branchgate::decision::{CacheKey, ChangeSetCache};
use branchgate::errors::BranchgateError;
use branchgate::types::RevisionId;
use branchgate_test_utils::init_tracing;

fn key(prev: &str, curr: &str, excluded: &str) -> CacheKey {
    CacheKey::new(RevisionId::from(prev), RevisionId::from(curr), excluded)
}

#[test]
fn hit_does_not_recompute() {
    init_tracing();

    let cache = ChangeSetCache::new(16);
    let calls = AtomicUsize::new(0);
    let compute = || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec!["docs/readme.md".to_string()])
    };

    let k = key("c1", "c2", "");
    let first = cache.get_or_compute(&k, compute).unwrap();
    let second = cache
        .get_or_compute(&k, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["should-not-run".to_string()])
        })
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    assert_eq!(&*first, &["docs/readme.md".to_string()]);
}

#[test]
fn distinct_keys_compute_independently() {
    init_tracing();

    let cache = ChangeSetCache::new(16);

    let a = cache
        .get_or_compute(&key("c1", "c2", ""), || Ok(vec!["a".to_string()]))
        .unwrap();
    let b = cache
        .get_or_compute(&key("c2", "c3", ""), || Ok(vec!["b".to_string()]))
        .unwrap();
    // The excluded branch is part of the key: same revision span, different
    // exclusion, different computation.
    let c = cache
        .get_or_compute(&key("c1", "c2", "develop"), || Ok(vec!["c".to_string()]))
        .unwrap();

    assert_eq!(&*a, &["a".to_string()]);
    assert_eq!(&*b, &["b".to_string()]);
    assert_eq!(&*c, &["c".to_string()]);
    assert_eq!(cache.len(), 3);
}

#[test]
fn failures_are_not_cached() {
    init_tracing();

    let cache = ChangeSetCache::new(16);
    let calls = AtomicUsize::new(0);
    let k = key("c1", "c2", "");

    let err = cache.get_or_compute(&k, || {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(BranchgateError::OwnerUnresolved)
    });
    assert!(err.is_err());
    assert!(cache.is_empty());

    // The next call retries and can succeed.
    let ok = cache
        .get_or_compute(&k, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["a".to_string()])
        })
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(&*ok, &["a".to_string()]);
}

#[test]
fn capacity_bounds_the_cache() {
    init_tracing();

    let cache = ChangeSetCache::new(1);
    let calls = AtomicUsize::new(0);
    let compute_a = || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec!["a".to_string()])
    };

    cache.get_or_compute(&key("c1", "c2", ""), compute_a).unwrap();
    // Second key evicts the first (LRU, capacity 1).
    cache
        .get_or_compute(&key("c2", "c3", ""), || Ok(vec!["b".to_string()]))
        .unwrap();
    assert_eq!(cache.len(), 1);

    // The first key is recomputed after eviction, with the same result.
    let again = cache
        .get_or_compute(&key("c1", "c2", ""), || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["a".to_string()])
        })
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(&*again, &["a".to_string()]);
}
