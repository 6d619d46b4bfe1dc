//! Implementation of `flexgen generate`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::codegen::{self, Header, Language};
use crate::core::table::EnumTable;
use crate::util::config::{Config, OutputConfig};
use crate::util::fs::{normalize_path, read_if_exists, resolve_against, write_atomic};
use crate::util::hash::sha256_str;

/// One artifact to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    /// Target language
    pub language: Language,

    /// Destination file
    pub path: PathBuf,

    /// Go package name (ignored for Rust)
    pub package: Option<String>,
}

impl OutputSpec {
    /// Create an output spec without a package override.
    pub fn new(language: Language, path: impl Into<PathBuf>) -> Self {
        OutputSpec {
            language,
            path: path.into(),
            package: None,
        }
    }

    /// Set the Go package name.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

impl From<&OutputConfig> for OutputSpec {
    fn from(config: &OutputConfig) -> Self {
        OutputSpec {
            language: config.language,
            path: config.path.clone(),
            package: config.package.clone(),
        }
    }
}

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Enum table file (None = canonical table)
    pub table: Option<PathBuf>,

    /// Provenance header
    pub header: Header,

    /// Artifacts to produce
    pub outputs: Vec<OutputSpec>,

    /// Compare against disk instead of writing
    pub check: bool,
}

impl GenerateOptions {
    /// Options taken from a loaded `Flexgen.toml`.
    pub fn from_config(config: &Config) -> Self {
        GenerateOptions {
            table: config.table.clone(),
            header: config.header(),
            outputs: config.outputs.iter().map(OutputSpec::from).collect(),
            check: false,
        }
    }
}

/// What happened to one output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputState {
    /// File was created or replaced.
    Written,
    /// File already had the generated contents; left untouched.
    Unchanged,
    /// Check mode: file matches.
    Fresh,
    /// Check mode: file is missing or differs.
    Stale,
}

impl OutputState {
    /// Whether the file on disk does not match the generated contents.
    pub fn is_stale(&self) -> bool {
        matches!(self, OutputState::Stale)
    }
}

/// Result for one output.
#[derive(Debug, Clone, Serialize)]
pub struct OutputReport {
    pub language: Language,
    pub path: PathBuf,
    /// SHA-256 of the generated contents.
    pub checksum: String,
    pub state: OutputState,
}

/// Result of a generate run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateReport {
    /// Number of enum types rendered into each output.
    pub enums: usize,
    pub outputs: Vec<OutputReport>,
}

impl GenerateReport {
    /// Outputs whose file on disk is out of date (check mode only).
    pub fn stale(&self) -> impl Iterator<Item = &OutputReport> {
        self.outputs.iter().filter(|o| o.state.is_stale())
    }

    /// Whether every checked output matched.
    pub fn is_fresh(&self) -> bool {
        self.stale().next().is_none()
    }
}

/// Load the configured table, or the canonical one.
pub fn load_table(path: Option<&Path>) -> Result<EnumTable> {
    match path {
        Some(path) => EnumTable::load(path)
            .with_context(|| format!("failed to load enum table from {}", path.display())),
        None => EnumTable::canonical().context("failed to load the built-in enum table"),
    }
}

/// Render every output, then write (or check) them.
///
/// All artifacts are rendered before any file is touched, so a bad table
/// never leaves some outputs updated and others stale.
pub fn generate_outputs(opts: &GenerateOptions) -> Result<GenerateReport> {
    if opts.outputs.is_empty() {
        bail!("no outputs configured");
    }
    check_distinct_paths(&opts.outputs)?;

    let table = load_table(opts.table.as_deref())?;

    let mut rendered = Vec::with_capacity(opts.outputs.len());
    for output in &opts.outputs {
        let renderer = output.language.renderer(output.package.as_deref());
        let contents = codegen::generate(&table, renderer.as_ref(), &opts.header)
            .with_context(|| format!("failed to generate {}", output.path.display()))?;
        rendered.push((output, contents));
    }

    let mut report = GenerateReport {
        enums: table.len(),
        outputs: Vec::with_capacity(rendered.len()),
    };

    for (output, contents) in rendered {
        let up_to_date = read_if_exists(&output.path)?.as_deref() == Some(contents.as_str());

        let state = match (opts.check, up_to_date) {
            (true, true) => OutputState::Fresh,
            (true, false) => OutputState::Stale,
            (false, true) => {
                tracing::debug!("{} is up to date", output.path.display());
                OutputState::Unchanged
            }
            (false, false) => {
                write_atomic(&output.path, &contents)?;
                tracing::info!(
                    "wrote {} ({} bytes)",
                    output.path.display(),
                    contents.len()
                );
                OutputState::Written
            }
        };

        report.outputs.push(OutputReport {
            language: output.language,
            path: output.path.clone(),
            checksum: sha256_str(&contents),
            state,
        });
    }

    Ok(report)
}

fn check_distinct_paths(outputs: &[OutputSpec]) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine the current directory")?;
    let mut seen = HashSet::new();
    for output in outputs {
        if !seen.insert(normalize_path(&resolve_against(&cwd, &output.path))) {
            bail!(
                "output path {} is configured more than once",
                output.path.display()
            );
        }
    }
    Ok(())
}
