// src/regions/mod.rs

//! Include-region pattern matching.
//!
//! This module is responsible for:
//! - Parsing the multi-line `included_regions` configuration string into an
//!   ordered list of glob patterns.
//! - Compiling and evaluating those patterns against repository-relative file
//!   paths.
//!
//! It does **not** know about revisions or changesets; it only answers "does
//! this path fall inside a configured region?".

pub mod patterns;

pub use patterns::{Region, RegionSet};
