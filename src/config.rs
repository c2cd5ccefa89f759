//! Replay driver configuration from environment variables.
//!
//! `MARKET_SEED`, `MARKET_ENTRIES`, `MARKET_ITEMS` (comma separated) and
//! `MARKET_PARTICIPANTS`. Missing or unparsable values fall back to defaults.

use crate::market_data_gen::GeneratorConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct ReplayConfig {
    pub seed: u64,
    pub num_entries: usize,
    pub items: Vec<String>,
    pub num_participants: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            seed: generator.seed,
            num_entries: generator.num_entries,
            items: generator.items,
            num_participants: generator.num_participants,
        }
    }
}

impl ReplayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let items: Vec<String> = lookup("MARKET_ITEMS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        Self {
            seed: lookup("MARKET_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            num_entries: lookup("MARKET_ENTRIES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.num_entries),
            items: if items.is_empty() { defaults.items } else { items },
            num_participants: lookup("MARKET_PARTICIPANTS")
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.num_participants),
        }
    }

    pub fn into_generator_config(self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            num_entries: self.num_entries,
            items: self.items,
            num_participants: self.num_participants,
            ..Default::default()
        }
    }
}
