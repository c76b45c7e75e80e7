// src/decision/mod.rs

//! Build-trigger decision engine.
//!
//! This module ties together:
//! - the memoizing change-set cache
//! - the excluded-branch commit filter
//! - the include-region match loop that turns a changed-file list into a
//!   yes/no build decision
//!
//! The pure pieces live in [`cache`] and [`exclusion`]; the orchestration is
//! implemented in [`engine`].

pub mod cache;
pub mod engine;
pub mod exclusion;

pub use cache::{CacheKey, ChangeSetCache};
pub use engine::DecisionEngine;
