//! config command - Get, set, or list configuration values

use crate::core::config::{Config, KEYS};
use crate::engine::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Get a configuration value (defaults applied).
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = config.get(key)?;
    println!("{}", value);
    Ok(())
}

/// Set a configuration value and write the global config file.
pub fn set(ctx: &Context, config: &Config, key: &str, value: &str) -> Result<()> {
    let mut updated = config.clone();
    updated.set(key, value)?;

    let path = Config::write_global(&updated.global).context("Failed to write config")?;

    output::print(format!("Set {} = {}", key, value), ctx.verbosity());
    output::debug(format!("wrote {}", path.display()), ctx.verbosity());
    Ok(())
}

/// List all configuration values.
pub fn list(config: &Config) -> Result<()> {
    match config.global_config_loaded_from() {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file; showing defaults"),
    }

    for key in KEYS {
        println!("{} = {}", key, config.get(key)?);
    }

    Ok(())
}
