#![allow(dead_code)]

use branchgate::decision::{ChangeSetCache, DecisionEngine};
use branchgate::types::{Changeset, FailPolicy};

/// Shorthand for a changeset touching the given paths.
pub fn changeset(revision: &str, paths: &[&str]) -> Changeset {
    Changeset::new(revision, paths.iter().map(|p| p.to_string()).collect())
}

/// Builder for `DecisionEngine` to simplify test setup.
pub struct EngineBuilder {
    regions: Vec<String>,
    excluded_branch: String,
    fail_policy: FailPolicy,
    cache_capacity: usize,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            excluded_branch: String::new(),
            fail_policy: FailPolicy::default(),
            cache_capacity: ChangeSetCache::DEFAULT_CAPACITY,
        }
    }

    pub fn region(mut self, pattern: &str) -> Self {
        self.regions.push(pattern.to_string());
        self
    }

    pub fn excluded_branch(mut self, branch: &str) -> Self {
        self.excluded_branch = branch.to_string();
        self
    }

    pub fn fail_open(mut self) -> Self {
        self.fail_policy = FailPolicy::Open;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn build(self) -> DecisionEngine {
        DecisionEngine::new(
            &self.regions.join("\n"),
            &self.excluded_branch,
            self.fail_policy,
            self.cache_capacity,
        )
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
