//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_expand_timeout_ms() -> u64 {
    2_000
}

/// Configuration for the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Upper bound, in milliseconds, on each handler's pattern-expansion
    /// call during link aggregation. A handler that does not answer within
    /// this bound contributes nothing to the listing.
    #[serde(default = "default_expand_timeout_ms")]
    pub expand_timeout_ms: u64,
}

impl DiscoveryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// The expansion bound as a [`Duration`]
    pub fn expand_timeout(&self) -> Duration {
        Duration::from_millis(self.expand_timeout_ms)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            expand_timeout_ms: default_expand_timeout_ms(),
        }
    }
}
