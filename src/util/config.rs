//! Configuration file support for flexgen.
//!
//! A project describes its generated bindings in `Flexgen.toml`:
//!
//! ```toml
//! table = "scripts/enums.toml"
//!
//! [header]
//! license = ["Copyright (c) Example Authors."]
//!
//! [[output]]
//! language = "go"
//! path = "enums_gen.go"
//! package = "yoga"
//!
//! [layout]
//! libs_dir = "_libs"
//! include_dir = "include"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.
//! Command-line flags take precedence over anything set here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::codegen::{Header, Language};
use crate::core::platform::InstallLayout;
use crate::util::fs::resolve_against;

/// File name searched for when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "Flexgen.toml";

/// flexgen configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Enum table to load instead of the canonical one.
    pub table: Option<PathBuf>,

    /// Provenance header settings
    pub header: HeaderConfig,

    /// Generated artifacts
    #[serde(rename = "output")]
    pub outputs: Vec<OutputConfig>,

    /// Native library install layout
    pub layout: LayoutConfig,

    /// Directory the config was loaded from.
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// Provenance header settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// License lines written above the generated-code marker.
    pub license: Vec<String>,
}

/// One generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Target language
    pub language: Language,

    /// Destination file
    pub path: PathBuf,

    /// Go package name (ignored for Rust)
    #[serde(default)]
    pub package: Option<String>,
}

/// Native library install layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Root of the per-platform static libraries (default `_libs`)
    pub libs_dir: Option<PathBuf>,

    /// Root of the installed headers (default `include`)
    pub include_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Relative paths in the file are resolved against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let root = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        config.resolve_paths(&root);
        config.root = Some(root);

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Provenance header for generated files.
    pub fn header(&self) -> Header {
        Header {
            license: self.header.license.clone(),
        }
    }

    /// Install layout, defaulting relative to `root` where unset.
    pub fn install_layout(&self, root: &Path) -> InstallLayout {
        let defaults = InstallLayout::default_for(root);
        InstallLayout::new(
            self.layout.libs_dir.clone().unwrap_or(defaults.libs_dir),
            self.layout.include_dir.clone().unwrap_or(defaults.include_dir),
        )
    }

    fn resolve_paths(&mut self, root: &Path) {
        if let Some(table) = &self.table {
            self.table = Some(resolve_against(root, table));
        }
        for output in &mut self.outputs {
            output.path = resolve_against(root, &output.path);
        }
        if let Some(dir) = &self.layout.libs_dir {
            self.layout.libs_dir = Some(resolve_against(root, dir));
        }
        if let Some(dir) = &self.layout.include_dir {
            self.layout.include_dir = Some(resolve_against(root, dir));
        }
    }
}

/// Find `Flexgen.toml` in `start` or any of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
