//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for flags that most invocations
//! repeat. Precedence: explicit flag, then config file, then built-in
//! default.
//!
//! ```yaml
//! encoding: base64
//! strict: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use piihash_core::Encoding;
use serde::Deserialize;

/// Defaults loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Encoding used when `--encoding` is not given.
    pub encoding: Encoding,
    /// Abort a batch on the first rejected line.
    pub strict: bool,
}

impl CliConfig {
    /// Load the config file at `path`, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse a config document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// The effective encoding given an optional flag value.
    pub fn encoding(&self, flag: Option<Encoding>) -> Encoding {
        flag.unwrap_or(self.encoding)
    }
}
