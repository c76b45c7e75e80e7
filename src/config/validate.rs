// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{BranchgateError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::BranchgateError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.strategy, raw.cache))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_cache(cfg)?;
    validate_excluded_branch(cfg)?;
    Ok(())
}

fn validate_cache(cfg: &RawConfigFile) -> Result<()> {
    // fail_policy is strongly typed and validated during deserialization,
    // so we don't need to check it here.

    if cfg.cache.capacity == 0 {
        return Err(BranchgateError::ConfigError(
            "[cache].capacity must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_excluded_branch(cfg: &RawConfigFile) -> Result<()> {
    let branch = cfg.strategy.excluded_branch.trim();
    if branch.chars().any(char::is_whitespace) {
        return Err(BranchgateError::ConfigError(format!(
            "[strategy].excluded_branch must be a single branch name (got '{branch}')"
        )));
    }
    Ok(())
}
