//! Go renderer.
//!
//! Emits one `.go` file with a named integer type per enum, a const block,
//! a `String()` method and an `XFromString` parse function. Output is kept
//! gofmt-stable (tabs for indentation, aligned explicit const blocks).

use std::fmt::{self, Write};

use crate::codegen::error::GenerateError;
use crate::codegen::namespace::Namespace;
use crate::codegen::resolve::{Repr, ResolvedEnum, UNKNOWN_NAME};
use crate::codegen::{Language, Renderer};

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Predeclared identifiers the generated file refers to.
const PREDECLARED: &[&str] = &["int", "uint32", "string", "error", "nil"];

/// Renders Go source for a single package.
#[derive(Debug, Clone)]
pub struct GoRenderer {
    package: String,
}

impl GoRenderer {
    pub fn new(package: impl Into<String>) -> Self {
        GoRenderer {
            package: package.into(),
        }
    }

    fn underlying_type(repr: Repr) -> &'static str {
        match repr {
            Repr::I32 => "int",
            Repr::U32 => "uint32",
        }
    }

    fn literal(repr: Repr, value: i64) -> String {
        match repr {
            Repr::I32 => value.to_string(),
            Repr::U32 => format!("0x{:X}", value),
        }
    }

    fn render_constants(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(out, "const (")?;

        if def.positional {
            for (i, member) in def.members.iter().enumerate() {
                if i == 0 {
                    writeln!(out, "\t{}{} {} = iota", name, member.name, name)?;
                } else {
                    writeln!(out, "\t{}{}", name, member.name)?;
                }
            }
        } else {
            let width = def
                .members
                .iter()
                .map(|m| name.len() + m.name.len())
                .max()
                .unwrap_or(0);
            for member in &def.members {
                writeln!(
                    out,
                    "\t{:<width$} {} = {}",
                    format!("{}{}", name, member.name),
                    name,
                    Self::literal(def.repr, member.value),
                    width = width
                )?;
            }
        }

        writeln!(out, ")")
    }

    fn render_string(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(
            out,
            "// String returns the canonical name of e, or \"{}\".",
            UNKNOWN_NAME
        )?;
        writeln!(out, "func (e {}) String() string {{", name)?;
        writeln!(out, "\tswitch e {{")?;
        for member in &def.members {
            writeln!(out, "\tcase {}{}:", name, member.name)?;
            writeln!(out, "\t\treturn \"{}\"", member.external_name)?;
        }
        writeln!(out, "\tdefault:")?;
        writeln!(out, "\t\treturn \"{}\"", UNKNOWN_NAME)?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")
    }

    fn render_parse(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(
            out,
            "// {}FromString parses the canonical name of a {} value.",
            name, name
        )?;
        writeln!(out, "func {}FromString(s string) ({}, error) {{", name, name)?;
        writeln!(out, "\tswitch s {{")?;
        for member in &def.members {
            writeln!(out, "\tcase \"{}\":", member.external_name)?;
            writeln!(out, "\t\treturn {}{}, nil", name, member.name)?;
        }
        writeln!(out, "\tdefault:")?;
        writeln!(
            out,
            "\t\treturn 0, &UnrecognizedEnumValueError{{Type: \"{}\", Value: s}}",
            name
        )?;
        writeln!(out, "\t}}")?;
        writeln!(out, "}}")
    }

    fn render_keep_alive(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(
            out,
            "// Every {} value is referenced so none is stripped from the build.",
            name
        )?;
        writeln!(out, "var _ = [...]{}{{", name)?;
        for member in &def.members {
            writeln!(out, "\t{}{},", name, member.name)?;
        }
        writeln!(out, "}}")
    }
}

impl Renderer for GoRenderer {
    fn language(&self) -> Language {
        Language::Go
    }

    fn check_names(&self, enums: &[ResolvedEnum]) -> Result<(), GenerateError> {
        let mut names = Namespace::new(Language::Go)
            .reserve(KEYWORDS, "a Go keyword")
            .reserve(PREDECLARED, "a predeclared Go identifier")
            .reserve(&["fmt"], "the `fmt` import")
            .reserve(&["UnrecognizedEnumValueError"], "the shared error type");

        for def in enums {
            let name = &def.name;
            names.declare(name.as_str(), format!("enum type `{}`", name))?;
            for member in &def.members {
                names.declare(
                    format!("{}{}", name, member.name),
                    format!("`{}.{}`", name, member.name),
                )?;
            }
            if !def.is_bitset() {
                names.declare(
                    format!("{}Count", name),
                    format!("the count constant of `{}`", name),
                )?;
            }
            names.declare(
                format!("{}FromString", name),
                format!("the parse function of `{}`", name),
            )?;
        }
        Ok(())
    }

    fn file_prelude(&self, out: &mut String, _enums: &[ResolvedEnum]) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "package {}", self.package)?;
        writeln!(out)?;
        writeln!(out, "import \"fmt\"")?;
        writeln!(out)?;
        writeln!(
            out,
            "// UnrecognizedEnumValueError is returned when a string names no member of an enum type."
        )?;
        writeln!(out, "type UnrecognizedEnumValueError struct {{")?;
        writeln!(out, "\tType  string")?;
        writeln!(out, "\tValue string")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "func (e *UnrecognizedEnumValueError) Error() string {{")?;
        writeln!(out, "\treturn fmt.Sprintf(\"unknown %s: %s\", e.Type, e.Value)")?;
        writeln!(out, "}}")
    }

    fn render_enum(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;

        writeln!(out, "// {} is a generated enum type.", name)?;
        writeln!(out, "type {} {}", name, Self::underlying_type(def.repr))?;
        writeln!(out)?;
        self.render_constants(out, def)?;

        if !def.is_bitset() {
            writeln!(out)?;
            writeln!(out, "// {}Count is the number of {} values.", name, name)?;
            writeln!(out, "const {}Count = {}", name, def.count())?;
        }

        writeln!(out)?;
        self.render_string(out, def)?;
        writeln!(out)?;
        self.render_parse(out, def)?;

        if def.preserve {
            writeln!(out)?;
            self.render_keep_alive(out, def)?;
        }

        Ok(())
    }
}
