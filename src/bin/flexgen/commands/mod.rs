//! Command implementations

pub mod completions;
pub mod generate;
pub mod platforms;
pub mod table;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexgen::util::config::{find_config, Config};

/// Current working directory, with a readable error.
pub fn cwd() -> Result<PathBuf> {
    std::env::current_dir().context("failed to determine the current directory")
}

/// Load `--config`, or the nearest `Flexgen.toml`, or defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    match find_config(&cwd()?) {
        Some(path) => Config::load(&path),
        None => {
            tracing::debug!("no Flexgen.toml found; using defaults");
            Ok(Config::default())
        }
    }
}
