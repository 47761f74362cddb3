//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! { "search": { "max_expansions": 10000 }, "normalize": { "max_depth": 64 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default nesting bound for normalization.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Top-level configuration for both engines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub normalize: NormalizeConfig,
}

/// Limits for breadth-first search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Hard cap on node expansions. `None` searches until the frontier drains.
    pub max_expansions: Option<u64>,
}

/// Limits for deep normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Deepest composite nesting accepted before failing with
    /// [`Error::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_expansions == Some(0) {
            return Err(Error::Config("search.max_expansions must be at least 1".into()));
        }
        if self.normalize.max_depth == 0 {
            return Err(Error::Config("normalize.max_depth must be at least 1".into()));
        }
        Ok(())
    }
}
