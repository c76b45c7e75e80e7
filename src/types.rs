use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Opaque identifier for a point in a head's history (e.g. a commit hash).
///
/// Compared for equality only; the engine never interprets its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevisionId(String);

impl RevisionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RevisionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RevisionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A resolved revision of a head.
///
/// Pull requests carry both their own tip (`pull`) and the tip of the branch
/// they target, so that an initial PR build can diff `target..pull` instead of
/// triggering unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Plain(RevisionId),
    PullRequest {
        pull: RevisionId,
        target: RevisionId,
    },
}

impl Revision {
    pub fn plain(id: impl Into<RevisionId>) -> Self {
        Revision::Plain(id.into())
    }

    pub fn pull_request(pull: impl Into<RevisionId>, target: impl Into<RevisionId>) -> Self {
        Revision::PullRequest {
            pull: pull.into(),
            target: target.into(),
        }
    }

    /// The revision identifying this head's own tip.
    pub fn id(&self) -> &RevisionId {
        match self {
            Revision::Plain(id) => id,
            Revision::PullRequest { pull, .. } => pull,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Plain(id) => write!(f, "{id}"),
            Revision::PullRequest { pull, target } => {
                write!(f, "{pull} (targeting {target})")
            }
        }
    }
}

/// A named line of development (branch or pull request).
///
/// Pull-request-ness is expressed on [`Revision`], not duplicated here; the
/// engine only needs the name (e.g. to compare against the excluded branch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    name: String,
}

impl Head {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One committed change: a revision plus the file paths it touches.
///
/// Paths are relative to the repository root, with forward slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset {
    revision: RevisionId,
    affected_paths: Vec<String>,
}

impl Changeset {
    pub fn new(revision: impl Into<RevisionId>, affected_paths: Vec<String>) -> Self {
        Self {
            revision: revision.into(),
            affected_paths,
        }
    }

    pub fn revision(&self) -> &RevisionId {
        &self.revision
    }

    pub fn affected_paths(&self) -> &[String] {
        &self.affected_paths
    }
}

/// Decision to fall back to when change-set resolution fails.
///
/// - `Closed` (default): a failed evaluation skips the build.
/// - `Open`: a failed evaluation triggers the build, for installations that
///   would rather build too often than miss one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailPolicy {
    Open,
    Closed,
}

impl FailPolicy {
    /// The decision reported when evaluation errors out.
    pub fn fallback_decision(self) -> bool {
        matches!(self, FailPolicy::Open)
    }
}

impl Default for FailPolicy {
    fn default() -> Self {
        FailPolicy::Closed
    }
}

impl FromStr for FailPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(FailPolicy::Open),
            "closed" => Ok(FailPolicy::Closed),
            other => Err(format!(
                "invalid fail_policy: {other} (expected \"open\" or \"closed\")"
            )),
        }
    }
}
