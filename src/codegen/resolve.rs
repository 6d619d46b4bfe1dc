//! Table validation and value assignment.
//!
//! Resolution turns each [`EnumDefinition`] into a [`ResolvedEnum`] whose
//! members carry their final value and both rendered names. Renderers only
//! ever see resolved enums, so every rule about numbering lives here.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::codegen::error::GenerateError;
use crate::core::naming::{to_lower_hyphen, to_upper_snake};
use crate::core::table::{EnumDefinition, EnumTable, MemberSpec};

/// Name returned by stringify for values without a named constant.
pub const UNKNOWN_NAME: &str = "unknown";

/// Underlying numeric representation of a generated enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repr {
    /// Sequential enums.
    I32,
    /// Bitset enums.
    U32,
}

impl Repr {
    pub fn min(&self) -> i64 {
        match self {
            Repr::I32 => i64::from(i32::MIN),
            Repr::U32 => 0,
        }
    }

    pub fn max(&self) -> i64 {
        match self {
            Repr::I32 => i64::from(i32::MAX),
            Repr::U32 => i64::from(u32::MAX),
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min()..=self.max()).contains(&value)
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::I32 => write!(f, "i32"),
            Repr::U32 => write!(f, "u32"),
        }
    }
}

/// A member with its final value and rendered names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMember {
    /// Symbolic name as written in the table (`FlexStart`).
    pub name: String,
    /// Upper snake form (`FLEX_START`).
    pub constant_name: String,
    /// Canonical external name (`flex-start`).
    pub external_name: String,
    pub value: i64,
}

/// A validated enum type, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnum {
    pub name: String,
    pub repr: Repr,
    pub preserve: bool,
    /// Every value was derived from position (no explicit values).
    pub positional: bool,
    pub members: Vec<ResolvedMember>,
}

/// The failure returned by generated parse functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {type_name}: {value}")]
pub struct UnrecognizedEnumValue {
    pub type_name: String,
    pub value: String,
}

impl ResolvedEnum {
    pub fn is_bitset(&self) -> bool {
        self.repr == Repr::U32
    }

    /// Number of named constants.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Look up a member by symbolic name.
    pub fn member(&self, name: &str) -> Option<&ResolvedMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// What the generated stringify function returns for `value`.
    pub fn stringify(&self, value: i64) -> &str {
        self.members
            .iter()
            .find(|m| m.value == value)
            .map(|m| m.external_name.as_str())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// What the generated parse function returns for `input`.
    ///
    /// Matching is exact and case-sensitive against the external name only.
    pub fn parse(&self, input: &str) -> Result<i64, UnrecognizedEnumValue> {
        self.members
            .iter()
            .find(|m| m.external_name == input)
            .map(|m| m.value)
            .ok_or_else(|| UnrecognizedEnumValue {
                type_name: self.name.clone(),
                value: input.to_string(),
            })
    }
}

/// Validate a table and resolve every type, sorted by type name.
pub fn resolve_table(table: &EnumTable) -> Result<Vec<ResolvedEnum>, GenerateError> {
    let mut resolved = Vec::with_capacity(table.len());
    for def in table.iter() {
        if resolved.iter().any(|r: &ResolvedEnum| r.name == def.name) {
            return Err(GenerateError::DuplicateEnum {
                name: def.name.clone(),
            });
        }
        resolved.push(resolve_enum(def)?);
    }

    resolved.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(resolved)
}

/// Validate one definition and assign its values.
pub fn resolve_enum(def: &EnumDefinition) -> Result<ResolvedEnum, GenerateError> {
    check_identifier(&def.name, &def.name)?;

    if def.members.is_empty() {
        return Err(GenerateError::EmptyEnum {
            name: def.name.clone(),
        });
    }

    let repr = if def.bitset { Repr::U32 } else { Repr::I32 };
    let positional = def
        .members
        .iter()
        .all(|m| matches!(m, MemberSpec::Named(_)));

    let mut members = Vec::with_capacity(def.members.len());
    for (index, spec) in def.members.iter().enumerate() {
        check_identifier(&def.name, spec.name())?;

        let value = match spec {
            MemberSpec::Named(name) if def.bitset => {
                return Err(GenerateError::NamedBitsetMember {
                    enum_name: def.name.clone(),
                    member: name.clone(),
                });
            }
            MemberSpec::Named(_) if positional => index as i64,
            MemberSpec::Explicit(_, value) if !positional => *value,
            other => {
                return Err(GenerateError::MixedMembers {
                    enum_name: def.name.clone(),
                    member: other.name().to_string(),
                });
            }
        };

        if !repr.contains(value) {
            return Err(GenerateError::ValueOutOfRange {
                enum_name: def.name.clone(),
                member: spec.name().to_string(),
                value,
                repr,
            });
        }

        members.push(ResolvedMember {
            name: spec.name().to_string(),
            constant_name: to_upper_snake(spec.name()),
            external_name: to_lower_hyphen(spec.name()),
            value,
        });
    }

    check_unique(&def.name, &members)?;

    Ok(ResolvedEnum {
        name: def.name.clone(),
        repr,
        preserve: def.preserve,
        positional,
        members,
    })
}

fn check_identifier(enum_name: &str, name: &str) -> Result<(), GenerateError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(GenerateError::InvalidIdentifier {
            enum_name: enum_name.to_string(),
            name: name.to_string(),
        })
    }
}

fn check_unique(enum_name: &str, members: &[ResolvedMember]) -> Result<(), GenerateError> {
    let mut externals: HashMap<&str, &str> = HashMap::new();
    let mut constants: HashMap<&str, &str> = HashMap::new();
    let mut values: HashMap<i64, &str> = HashMap::new();

    for member in members {
        if let Some(first) = externals.insert(&member.external_name, &member.name) {
            return Err(GenerateError::AmbiguousExternalName {
                enum_name: enum_name.to_string(),
                first: first.to_string(),
                second: member.name.clone(),
                external: member.external_name.clone(),
            });
        }
        if let Some(first) = constants.insert(&member.constant_name, &member.name) {
            return Err(GenerateError::ConstantNameCollision {
                enum_name: enum_name.to_string(),
                first: first.to_string(),
                second: member.name.clone(),
                constant: member.constant_name.clone(),
            });
        }
        if let Some(first) = values.insert(member.value, &member.name) {
            return Err(GenerateError::DuplicateValue {
                enum_name: enum_name.to_string(),
                first: first.to_string(),
                second: member.name.clone(),
                value: member.value,
            });
        }
    }

    Ok(())
}
