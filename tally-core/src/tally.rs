use anyhow::Result;
use std::{cmp::Ordering, path::Path};

use crate::{Config, entries::ParseResult, parse_entries::parse_time_entries};

/// Where a total stands against the configured daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetProgress {
    /// Minutes still missing.
    Remaining(u64),
    Reached,
    /// Minutes logged beyond the target.
    Over(u64),
}

pub struct Tally {
    pub config: Config,
}

impl Tally {
    /// Creates a new `Tally`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Tally` from a specific config file. A bad file is an error here.
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = Config::load_from(path)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        parse_time_entries(text)
    }

    /// Compares `total` with the daily target, if one is configured.
    pub fn target_progress(&self, total: u64) -> Option<TargetProgress> {
        let target = u64::from(self.config.daily_target?);
        let progress = match total.cmp(&target) {
            Ordering::Less => TargetProgress::Remaining(target - total),
            Ordering::Equal => TargetProgress::Reached,
            Ordering::Greater => TargetProgress::Over(total - target),
        };
        Some(progress)
    }
}
