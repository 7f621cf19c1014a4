use balance_ast::Difficulty;
use balance_solver_core::{Generator, TierRanges};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "balance_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Tier for the first puzzle and for `new`.
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible puzzle sequences.
    pub seed: Option<u64>,
    /// Print the block summary of both pans after each step.
    pub show_pans: bool,
    /// Override for the generator ranges.
    pub ranges: Option<TierRanges>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            show_pans: true,
            ranges: None,
        }
    }
}

impl BalanceConfig {
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from `path`, falling back to defaults on any problem.
    ///
    /// Invalid ranges are dropped (with a warning) so the generator always
    /// starts from something playable.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let mut config = match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "error parsing config file, using defaults");
                    return Self::default();
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error reading config file, using defaults");
                return Self::default();
            }
        };

        if let Some(ranges) = &config.ranges {
            if let Err(e) = ranges.validate() {
                warn!(path = %path.display(), error = %e, "ignoring invalid ranges");
                config.ranges = None;
            }
        }
        config
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    pub fn generator(&self) -> Generator {
        match self.ranges {
            Some(ranges) => Generator::with_ranges(ranges).unwrap_or_default(),
            None => Generator::new(),
        }
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
