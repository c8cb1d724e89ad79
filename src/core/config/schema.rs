//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$PARENGEN_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/parengen/config.toml`
//! 3. `~/.parengen/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing. `max_pairs` is a
//! [`PairCount`], so negative values are already rejected by
//! deserialization; validation additionally requires its Catalan number
//! to be representable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::generator::catalan;
use crate::core::types::PairCount;

/// How generated combinations are written to stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One combination per line
    #[default]
    Lines,
    /// A JSON document with pairs, count and combinations
    Json,
}

impl OutputFormat {
    /// Valid format names, as written in the config file.
    pub const VALID_NAMES: &'static [&'static str] = &["lines", "json"];

    /// Parse a format name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "lines" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid format '{}', must be one of: {}",
                other,
                Self::VALID_NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines => write!(f, "lines"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// max_pairs = 12
/// format = "lines"
/// interactive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Largest pair count `generate` will enumerate without `--limit`
    pub max_pairs: Option<PairCount>,

    /// Default output format
    pub format: Option<OutputFormat>,

    /// Prompt for missing input
    pub interactive: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(max) = self.max_pairs {
            if catalan(max.get()).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "max_pairs {} is too large to count combinations for",
                    max
                )));
            }
        }

        Ok(())
    }
}
