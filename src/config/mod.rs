//! Settings for formatting and session policy, loadable from JSON
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "format": { "angle_decimals": 3 }, "session": { "min_vectors": 1 } }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::format::FormatConfig;
use crate::session::SessionConfig;
use crate::Result;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Loads and validates configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses and validates configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets angle and magnitude decimal places
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.format = self.format.with_decimals(decimals);
        self
    }

    /// Sets the fewest vectors a calculation accepts
    pub fn with_min_vectors(mut self, min_vectors: usize) -> Self {
        self.session.min_vectors = min_vectors;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.format.validate()
    }
}
