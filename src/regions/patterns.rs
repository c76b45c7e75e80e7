// src/regions/patterns.rs

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};
use tracing::warn;

/// A single include-region glob pattern.
///
/// Matching semantics are the classic path-glob rules:
///
/// - `*` matches any sequence of characters except the path separator.
/// - `**` matches any sequence of characters including separators.
/// - `?` matches exactly one character that is not the separator.
/// - Matching is case-sensitive and anchored: the whole path must match.
/// - A pattern ending in `/` matches everything below that directory.
///
/// An invalid pattern is kept (so the region list stays non-empty) but never
/// matches anything.
#[derive(Clone)]
pub struct Region {
    pattern: String,
    matcher: Option<GlobMatcher>,
}

impl Region {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let matcher = match compile(&pattern) {
            Ok(m) => Some(m),
            Err(err) => {
                warn!(pattern = %pattern, %err, "invalid include region, it will never match");
                None
            }
        };
        Self { pattern, matcher }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Test a repository-relative path (forward slashes) against this region.
    pub fn matches(&self, rel_path: &str) -> bool {
        match &self.matcher {
            Some(m) => m.is_match(rel_path),
            None => false,
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("pattern", &self.pattern)
            .field("valid", &self.matcher.is_some())
            .finish()
    }
}

/// An ordered set of include regions.
#[derive(Debug, Clone, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Parse the multi-line `included_regions` configuration string.
    ///
    /// Each line is trimmed; lines that are empty after trimming are dropped,
    /// so a string of blank lines yields an empty set and the strategy never
    /// triggers.
    pub fn parse(raw: &str) -> Self {
        let regions = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Region::new)
            .collect();
        Self { regions }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: patterns.into_iter().map(Region::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.pattern())
    }

    /// First region (in input order) matching `rel_path`, if any.
    ///
    /// Short-circuits on the first hit so the reported pattern is
    /// deterministic.
    pub fn first_match(&self, rel_path: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.matches(rel_path))
    }

    /// Whether any region matches `rel_path`.
    pub fn matches_any(&self, rel_path: &str) -> bool {
        self.first_match(rel_path).is_some()
    }
}

/// Compile one region pattern into a matcher.
///
/// `literal_separator(true)` keeps `*` and `?` from crossing `/`, which is
/// what gives the pattern language its path-aware semantics (`*.txt` does not
/// match `dir/notes.txt`; `dir/**` does).
fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    let normalized = if pattern.ends_with('/') {
        // "docs/" means the whole subtree, same as "docs/**".
        format!("{pattern}**")
    } else {
        pattern.to_string()
    };

    Ok(GlobBuilder::new(&normalized)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}
