//! Generation errors.
//!
//! Every variant is raised before any output is written.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::codegen::resolve::Repr;
use crate::codegen::Language;
use crate::util::diagnostic::Diagnostic;

/// Error raised while validating the enum table or rendering an artifact.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    #[error("enum type `{name}` is defined more than once")]
    #[diagnostic(code(flexgen::generate::duplicate_enum))]
    DuplicateEnum { name: String },

    #[error("enum type `{name}` has no members")]
    #[diagnostic(code(flexgen::generate::empty_enum))]
    EmptyEnum { name: String },

    #[error("`{name}` in `{enum_name}` is not a valid identifier")]
    #[diagnostic(
        code(flexgen::generate::invalid_identifier),
        help("names must start with an ASCII letter and contain only letters, digits and `_`")
    )]
    InvalidIdentifier { enum_name: String, name: String },

    #[error("bitset enum `{enum_name}` has member `{member}` without an explicit value")]
    #[diagnostic(
        code(flexgen::generate::named_bitset_member),
        help("give every bitset member a value, e.g. [\"Flag\", 0x8]")
    )]
    NamedBitsetMember { enum_name: String, member: String },

    #[error("enum `{enum_name}` mixes positional and explicit members (at `{member}`)")]
    #[diagnostic(
        code(flexgen::generate::mixed_members),
        help("use bare names for every member, or give every member an explicit value")
    )]
    MixedMembers { enum_name: String, member: String },

    #[error("value {value} of `{enum_name}.{member}` does not fit in {repr}")]
    #[diagnostic(code(flexgen::generate::value_out_of_range))]
    ValueOutOfRange {
        enum_name: String,
        member: String,
        value: i64,
        repr: Repr,
    },

    #[error("`{enum_name}.{first}` and `{enum_name}.{second}` both render as `{external}`")]
    #[diagnostic(
        code(flexgen::generate::ambiguous_name),
        help("rename one member so the parse table stays unambiguous")
    )]
    AmbiguousExternalName {
        enum_name: String,
        first: String,
        second: String,
        external: String,
    },

    #[error("`{enum_name}.{first}` and `{enum_name}.{second}` both become the constant `{constant}`")]
    #[diagnostic(
        code(flexgen::generate::constant_collision),
        help("rename one member so every constant name is distinct")
    )]
    ConstantNameCollision {
        enum_name: String,
        first: String,
        second: String,
        constant: String,
    },

    #[error("`{identifier}` from {second} clashes with {first} in generated {language} code")]
    #[diagnostic(
        code(flexgen::generate::identifier_collision),
        help("rename the enum type or member so generated names stay distinct")
    )]
    IdentifierCollision {
        language: Language,
        identifier: String,
        first: String,
        second: String,
    },

    #[error("`{enum_name}.{first}` and `{enum_name}.{second}` share the value {value}")]
    #[diagnostic(code(flexgen::generate::duplicate_value))]
    DuplicateValue {
        enum_name: String,
        first: String,
        second: String,
        value: i64,
    },

    #[error("failed to format generated code")]
    Format(#[from] fmt::Error),
}

impl GenerateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        match self {
            GenerateError::NamedBitsetMember { member, .. } => diag
                .with_context("bitset enums are unsigned flag sets; positions are never guessed")
                .with_suggestion(format!("declare it as [\"{}\", <value>]", member)),
            GenerateError::MixedMembers { .. } => diag
                .with_context("the numbering of bare names after an explicit value is undefined")
                .with_suggestion("use bare names for every member")
                .with_suggestion("or give every member an explicit value"),
            GenerateError::ValueOutOfRange { repr, .. } => diag.with_context(format!(
                "{} holds values from {} to {}",
                repr,
                repr.min(),
                repr.max()
            )),
            GenerateError::AmbiguousExternalName { .. } => diag
                .with_context("generated parse functions match on the lower-hyphen name")
                .with_suggestion("rename one of the members"),
            GenerateError::ConstantNameCollision { .. } => diag
                .with_context("constant names are the member name in UPPER_SNAKE form")
                .with_suggestion("rename one of the members"),
            GenerateError::IdentifierCollision { language, .. } => diag
                .with_context(format!(
                    "every type, constant and function in the {} output shares one namespace",
                    language
                ))
                .with_suggestion("rename the enum type or the member"),
            GenerateError::DuplicateValue { .. } => diag
                .with_context("generated stringify functions switch on the value")
                .with_suggestion("give each member a distinct value"),
            GenerateError::InvalidIdentifier { .. } => {
                diag.with_suggestion("use capitalized words, e.g. `FlexStart`")
            }
            GenerateError::DuplicateEnum { .. }
            | GenerateError::EmptyEnum { .. }
            | GenerateError::Format(_) => diag,
        }
    }
}
