//! Enum code generation.
//!
//! Generation is a single generic traversal over the resolved table. The
//! traversal owns ordering, validation and the provenance header; everything
//! language-specific sits behind the [`Renderer`] trait, one implementation
//! per target language.

pub mod error;
pub mod go;
pub mod namespace;
pub mod resolve;
pub mod rust;

use std::fmt::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::table::EnumTable;

pub use error::GenerateError;
pub use go::GoRenderer;
pub use resolve::{
    resolve_enum, resolve_table, Repr, ResolvedEnum, ResolvedMember, UnrecognizedEnumValue,
    UNKNOWN_NAME,
};
pub use rust::RustRenderer;

/// Name of the generating tool, as written in provenance headers.
pub const GENERATOR_NAME: &str = "flexgen";

/// Package used for Go output when none is configured.
pub const DEFAULT_GO_PACKAGE: &str = "yoga";

/// A target-language backend.
pub trait Renderer {
    /// Language this renderer emits.
    fn language(&self) -> Language;

    /// Line comment token, used for the provenance header.
    fn line_comment(&self) -> &'static str {
        "//"
    }

    /// Reject tables whose generated declarations would clash in this
    /// language.
    fn check_names(&self, enums: &[ResolvedEnum]) -> Result<(), GenerateError>;

    /// Everything between the header and the first enum (package clause,
    /// imports, shared error type).
    fn file_prelude(&self, out: &mut String, enums: &[ResolvedEnum]) -> fmt::Result;

    /// One enum type: declaration, constants, stringify and parse.
    fn render_enum(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result;
}

/// Target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    Rust,
}

impl Language {
    /// Get the language name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// Build the renderer for this language.
    pub fn renderer(&self, package: Option<&str>) -> Box<dyn Renderer> {
        match self {
            Language::Go => Box::new(GoRenderer::new(package.unwrap_or(DEFAULT_GO_PACKAGE))),
            Language::Rust => Box::new(RustRenderer),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!(
                "unknown language '{}'; expected 'go' or 'rust'",
                s
            )),
        }
    }
}

/// Provenance header settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    /// License lines written above the generated-code marker.
    pub license: Vec<String>,
}

/// Render the whole artifact for `table`.
///
/// Validation happens first; on error nothing is rendered. The output is a
/// pure function of the table, the renderer and the header.
pub fn generate(
    table: &EnumTable,
    renderer: &dyn Renderer,
    header: &Header,
) -> Result<String, GenerateError> {
    let enums = resolve_table(table)?;
    renderer.check_names(&enums)?;

    let mut out = String::new();
    write_header(&mut out, renderer.line_comment(), header)?;
    renderer.file_prelude(&mut out, &enums)?;

    for def in &enums {
        tracing::debug!(
            "rendering {} enum `{}` ({} members)",
            renderer.language(),
            def.name,
            def.count()
        );
        out.push('\n');
        renderer.render_enum(&mut out, def)?;
    }

    Ok(out)
}

fn write_header(out: &mut String, comment: &str, header: &Header) -> fmt::Result {
    for line in &header.license {
        if line.is_empty() {
            writeln!(out, "{}", comment)?;
        } else {
            writeln!(out, "{} {}", comment, line)?;
        }
    }
    if !header.license.is_empty() {
        writeln!(out, "{}", comment)?;
    }
    writeln!(
        out,
        "{} Code generated by {}; DO NOT EDIT.",
        comment, GENERATOR_NAME
    )?;
    writeln!(out, "{} @generated", comment)
}
