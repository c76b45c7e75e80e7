// src/config/model.rs

use serde::Deserialize;

use crate::decision::ChangeSetCache;
use crate::types::FailPolicy;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [strategy]
/// included_regions = """
/// src/**
/// docs/**
/// """
/// excluded_branch = "develop"
/// fail_policy = "closed"
///
/// [cache]
/// capacity = 256
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Trigger strategy from `[strategy]`.
    #[serde(default)]
    pub strategy: StrategySection,

    /// Change-set cache tuning from `[cache]`.
    #[serde(default)]
    pub cache: CacheSection,
}

/// `[strategy]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StrategySection {
    /// Multi-line string of include-region glob patterns, one per line.
    ///
    /// Lines are trimmed; blank lines are ignored. An empty value means the
    /// strategy never triggers a build.
    #[serde(default)]
    pub included_regions: String,

    /// Branch whose shared commits are discounted from the decision.
    ///
    /// Empty (the default) disables exclusion.
    #[serde(default)]
    pub excluded_branch: String,

    /// `"open"` or `"closed"`.
    ///
    /// - `"closed"` (default): evaluation errors skip the build.
    /// - `"open"`: evaluation errors trigger the build.
    #[serde(default)]
    pub fail_policy: FailPolicy,
}

/// `[cache]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    /// Maximum number of memoized change-set computations.
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

fn default_cache_capacity() -> usize {
    ChangeSetCache::DEFAULT_CAPACITY
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

/// Validated configuration.
///
/// Constructed via `ConfigFile::try_from(raw)` (see `validate.rs`); the
/// `new_unchecked` constructor is for code paths that have already validated.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    strategy: StrategySection,
    cache: CacheSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(strategy: StrategySection, cache: CacheSection) -> Self {
        Self { strategy, cache }
    }

    pub fn strategy(&self) -> &StrategySection {
        &self.strategy
    }

    pub fn cache(&self) -> &CacheSection {
        &self.cache
    }
}
