//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$PARENGEN_CONFIG` if set. When set, no other location is consulted,
//!    and a missing file means defaults.
//! 2. `$XDG_CONFIG_HOME/parengen/config.toml`
//! 3. `~/.parengen/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use parengen::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Max pairs: {}", config.max_pairs());
//! println!("Format: {}", config.format());
//! println!("Interactive: {}", config.interactive());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputFormat};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::PairCount;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PARENGEN_CONFIG";

/// Ceiling applied when `max_pairs` is not configured. C(12) = 208012.
pub const DEFAULT_MAX_PAIRS: PairCount = PairCount::new(12);

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Keys accepted by `config get` and `config set`.
pub const KEYS: &[&str] = &["max_pairs", "format", "interactive"];

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values. Missing config files are not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Self::locate_global();
        Self::load_from(path.as_deref())
    }

    /// Load configuration from an explicit file, or defaults for `None`.
    ///
    /// A path that does not exist yields defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Config, ConfigError> {
        let (global, global_path) = match path {
            Some(p) if p.exists() => (Self::read_global_config(p)?, Some(p.to_path_buf())),
            _ => (GlobalConfig::default(), None),
        };

        global.validate()?;

        Ok(Config {
            global,
            global_path,
        })
    }

    /// Find the global config file to read, if any.
    fn locate_global() -> Option<PathBuf> {
        // 1. $PARENGEN_CONFIG is authoritative when set
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        // 2. $XDG_CONFIG_HOME/parengen/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("parengen/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.parengen/config.toml
        dirs::home_dir()
            .map(|home| home.join(".parengen/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a global config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path `config set` writes to.
    ///
    /// `$PARENGEN_CONFIG` if set, otherwise `~/.parengen/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".parengen/config.toml"))
    }

    /// Write global config atomically to the canonical location.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path()?;
        Self::write_global_to(&path, config)?;
        Ok(path)
    }

    /// Write global config atomically to `path`.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames it over the target.
    pub fn write_global_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Largest pair count generated without an explicit limit.
    ///
    /// Defaults to [`DEFAULT_MAX_PAIRS`].
    pub fn max_pairs(&self) -> PairCount {
        self.global.max_pairs.unwrap_or(DEFAULT_MAX_PAIRS)
    }

    /// Default output format.
    ///
    /// Defaults to `lines`.
    pub fn format(&self) -> OutputFormat {
        self.global.format.unwrap_or_default()
    }

    /// Check if interactive prompts are enabled by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    // =========================================================================
    // Key-based access for the config command
    // =========================================================================

    /// Effective value of `key`, with defaults applied.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "max_pairs" => Ok(self.max_pairs().to_string()),
            "format" => Ok(self.format().to_string()),
            "interactive" => Ok(self.interactive().to_string()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Parse `value` and store it under `key` in the global config.
    ///
    /// The config is left untouched if the value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.global.clone();
        match key {
            "max_pairs" => {
                let pairs: PairCount = value
                    .parse()
                    .map_err(|e| ConfigError::InvalidValue(format!("max_pairs: {e}")))?;
                next.max_pairs = Some(pairs);
            }
            "format" => {
                next.format = Some(OutputFormat::parse(value)?);
            }
            "interactive" => {
                let flag: bool = value.parse().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "interactive must be 'true' or 'false', got '{value}'"
                    ))
                })?;
                next.interactive = Some(flag);
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        next.validate()?;
        self.global = next;
        Ok(())
    }
}
