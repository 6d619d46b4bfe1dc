//! The declarative enum table.
//!
//! The table is data, not code: adding an enum type or a member is an edit to
//! a TOML document (or to the [`EnumDefinition`] list), never to the emitter.
//!
//! ```toml
//! preserve = ["LogLevel"]
//! bitset = ["Errata"]
//!
//! [enums]
//! Direction = ["Inherit", "LTR", "RTL"]
//! Errata = [["None", 0], ["StretchFlexBasis", 0x1], ["All", 0x7FFFFFFF]]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use miette::Diagnostic as MietteDiagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The canonical Yoga enum table, embedded at build time.
const CANONICAL_TABLE: &str = include_str!("yoga_enums.toml");

/// A single member of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberSpec {
    /// Bare name; the value is implied by position.
    Named(String),
    /// Name with a fixed value.
    Explicit(String, i64),
}

impl MemberSpec {
    /// The member's symbolic name.
    pub fn name(&self) -> &str {
        match self {
            MemberSpec::Named(name) | MemberSpec::Explicit(name, _) => name,
        }
    }
}

/// One enum type in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    /// Type name, unique across the table.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<MemberSpec>,
    /// Bit-flag set with explicit unsigned values.
    pub bitset: bool,
    /// Must not be stripped by downstream dead-code elimination.
    pub preserve: bool,
}

impl EnumDefinition {
    /// A sequential enum numbered by position.
    pub fn sequential(name: impl Into<String>, members: &[&str]) -> Self {
        EnumDefinition {
            name: name.into(),
            members: members
                .iter()
                .map(|m| MemberSpec::Named(m.to_string()))
                .collect(),
            bitset: false,
            preserve: false,
        }
    }

    /// A bit-flag enum with explicit values.
    pub fn bitset(name: impl Into<String>, members: &[(&str, i64)]) -> Self {
        EnumDefinition {
            name: name.into(),
            members: members
                .iter()
                .map(|(m, v)| MemberSpec::Explicit(m.to_string(), *v))
                .collect(),
            bitset: true,
            preserve: false,
        }
    }

    /// Mark this type as preserved.
    pub fn preserved(mut self) -> Self {
        self.preserve = true;
        self
    }

    /// Append a member.
    pub fn with_member(mut self, member: MemberSpec) -> Self {
        self.members.push(member);
        self
    }
}

/// Errors raised while loading an enum table.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum TableError {
    #[error("failed to read enum table `{}`", path.display())]
    #[diagnostic(code(flexgen::table::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse enum table `{origin}`")]
    #[diagnostic(
        code(flexgen::table::parse),
        help("members are either \"Name\" or [\"Name\", value]")
    )]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("`{list}` refers to unknown enum type `{name}`")]
    #[diagnostic(code(flexgen::table::unknown_reference))]
    UnknownReference { list: &'static str, name: String },

    #[error("enum type `{name}` appears more than once in `{list}`")]
    #[diagnostic(code(flexgen::table::duplicate_reference))]
    DuplicateReference { list: &'static str, name: String },
}

/// On-disk shape of a table file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    #[serde(default)]
    preserve: Vec<String>,
    #[serde(default)]
    bitset: Vec<String>,
    enums: BTreeMap<String, Vec<MemberSpec>>,
}

/// An immutable set of enum definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumTable {
    enums: Vec<EnumDefinition>,
}

impl EnumTable {
    /// Create a table from definitions.
    pub fn new(enums: Vec<EnumDefinition>) -> Self {
        EnumTable { enums }
    }

    /// The canonical Yoga table shipped with flexgen.
    pub fn canonical() -> Result<Self, TableError> {
        Self::from_toml_str(CANONICAL_TABLE, "<canonical>")
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    /// Parse a table from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(contents).map_err(|source| TableError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let preserve = check_references("preserve", &file.preserve, &file.enums)?;
        let bitset = check_references("bitset", &file.bitset, &file.enums)?;

        let enums = file
            .enums
            .into_iter()
            .map(|(name, members)| EnumDefinition {
                bitset: bitset.contains(name.as_str()),
                preserve: preserve.contains(name.as_str()),
                name,
                members,
            })
            .collect();

        tracing::debug!("loaded enum table from {}", origin);
        Ok(EnumTable { enums })
    }

    /// Look up a definition by type name.
    pub fn get(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Iterate definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.enums.iter()
    }

    /// Number of enum types.
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    /// Whether the table has no enum types.
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

fn check_references<'a>(
    list: &'static str,
    names: &'a [String],
    enums: &BTreeMap<String, Vec<MemberSpec>>,
) -> Result<HashSet<&'a str>, TableError> {
    let mut seen = HashSet::new();
    for name in names {
        if !enums.contains_key(name) {
            return Err(TableError::UnknownReference {
                list,
                name: name.clone(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(TableError::DuplicateReference {
                list,
                name: name.clone(),
            });
        }
    }
    Ok(seen)
}
