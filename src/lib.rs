// src/lib.rs

pub mod cli;
pub mod config;
pub mod decision;
pub mod errors;
pub mod logging;
pub mod regions;
pub mod scm;
pub mod types;

use std::path::PathBuf;

use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::ConfigFile;
use crate::decision::DecisionEngine;
use crate::errors::Result;
use crate::scm::{ChangeSource, GitChangeSource};
use crate::types::{Head, Revision, RevisionId};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the git-backed change source
/// - the decision engine
///
/// Returns `Some(decision)` for a real evaluation, `None` for `--dry-run`.
pub fn run(args: CliArgs) -> Result<Option<bool>> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(None);
    }

    let source = GitChangeSource::open(&args.repo)?;
    let head = Head::new(args.head.as_str());

    // Current revision: explicit, or the head's branch tip.
    let curr_id = match &args.curr {
        Some(rev) => RevisionId::from(rev.clone()),
        None => source.branch_tip(&args.head)?,
    };

    let curr = match &args.target {
        Some(target_branch) => {
            let target_tip = source.branch_tip(target_branch)?;
            Revision::pull_request(curr_id, target_tip)
        }
        None => Revision::plain(curr_id),
    };
    let prev = args.prev.map(Revision::plain);

    let engine = DecisionEngine::new(
        &cfg.strategy().included_regions,
        &cfg.strategy().excluded_branch,
        cfg.strategy().fail_policy,
        cfg.cache().capacity,
    );

    let decision = engine.is_automatic_build(&source, &head, &curr, prev.as_ref());
    info!(%head, decision, "build decision");
    Ok(Some(decision))
}

/// Simple dry-run output: print the effective strategy.
fn print_dry_run(cfg: &ConfigFile) {
    println!("branchgate dry-run");
    println!("  strategy.fail_policy = {:?}", cfg.strategy().fail_policy);
    if cfg.strategy().excluded_branch.trim().is_empty() {
        println!("  strategy.excluded_branch = (disabled)");
    } else {
        println!(
            "  strategy.excluded_branch = {}",
            cfg.strategy().excluded_branch.trim()
        );
    }
    println!("  cache.capacity = {}", cfg.cache().capacity);
    println!();

    let regions = crate::regions::RegionSet::parse(&cfg.strategy().included_regions);
    println!("included regions ({}):", regions.len());
    for pattern in regions.patterns() {
        println!("  - {pattern}");
    }
}
