//! Rust renderer.
//!
//! Every enum becomes a `#[repr(transparent)]` newtype over its underlying
//! integer, with one associated `UPPER_SNAKE` constant per member. A newtype
//! (rather than a Rust `enum`) keeps arbitrary values representable, which
//! bitset combinations and values read back from the native library need.
//! Helper items are lower-case functions so they never collide with member
//! constants.

use std::fmt::{self, Write};

use crate::codegen::error::GenerateError;
use crate::codegen::namespace::Namespace;
use crate::codegen::resolve::{Repr, ResolvedEnum, UNKNOWN_NAME};
use crate::codegen::{Language, Renderer};
use crate::core::naming::to_upper_snake;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Items and bindings the generated module refers to by bare name. A tuple
/// struct with one of these names would shadow it.
const REFERENCED: &[&str] = &[
    "std", "fmt", "FromStr", "String", "Result", "Ok", "Err", "f", "s", "other", "rhs",
];

/// Renders a Rust module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    fn underlying_type(repr: Repr) -> &'static str {
        match repr {
            Repr::I32 => "i32",
            Repr::U32 => "u32",
        }
    }

    fn literal(repr: Repr, value: i64) -> String {
        match repr {
            Repr::I32 => value.to_string(),
            Repr::U32 => format!("0x{:X}", value),
        }
    }

    fn render_inherent(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(out, "impl {} {{", name)?;

        for member in &def.members {
            writeln!(
                out,
                "    pub const {}: {} = {}({});",
                member.constant_name,
                name,
                name,
                Self::literal(def.repr, member.value)
            )?;
        }

        writeln!(out)?;
        writeln!(out, "    /// Every named value, in declaration order.")?;
        writeln!(out, "    pub fn values() -> &'static [{}] {{", name)?;
        writeln!(
            out,
            "        static VALUES: [{}; {}] = [",
            name,
            def.count()
        )?;
        for member in &def.members {
            writeln!(out, "            {}::{},", name, member.constant_name)?;
        }
        writeln!(out, "        ];")?;
        writeln!(out, "        &VALUES")?;
        writeln!(out, "    }}")?;

        if def.is_bitset() {
            writeln!(out)?;
            writeln!(
                out,
                "    /// Whether every flag set in `other` is also set in `self`."
            )?;
            writeln!(
                out,
                "    pub const fn contains(self, other: {}) -> bool {{",
                name
            )?;
            writeln!(out, "        self.0 & other.0 == other.0")?;
            writeln!(out, "    }}")?;
        } else {
            writeln!(out)?;
            writeln!(out, "    /// Number of named values.")?;
            writeln!(out, "    pub const fn count() -> usize {{")?;
            writeln!(out, "        {}", def.count())?;
            writeln!(out, "    }}")?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "    /// Canonical name of this value, or `\"{}\"`.",
            UNKNOWN_NAME
        )?;
        writeln!(out, "    pub fn as_str(self) -> &'static str {{")?;
        writeln!(out, "        match self {{")?;
        for member in &def.members {
            writeln!(
                out,
                "            {}::{} => \"{}\",",
                name, member.constant_name, member.external_name
            )?;
        }
        writeln!(out, "            _ => \"{}\",", UNKNOWN_NAME)?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }

    fn render_display(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        writeln!(out, "impl fmt::Display for {} {{", def.name)?;
        writeln!(
            out,
            "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
        )?;
        writeln!(out, "        f.write_str(self.as_str())")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }

    fn render_from_str(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(out, "impl FromStr for {} {{", name)?;
        writeln!(out, "    type Err = UnrecognizedEnumValue;")?;
        writeln!(out)?;
        writeln!(
            out,
            "    fn from_str(s: &str) -> Result<Self, Self::Err> {{"
        )?;
        writeln!(out, "        match s {{")?;
        for member in &def.members {
            writeln!(
                out,
                "            \"{}\" => Ok({}::{}),",
                member.external_name, name, member.constant_name
            )?;
        }
        writeln!(out, "            _ => Err(UnrecognizedEnumValue {{")?;
        writeln!(out, "                type_name: \"{}\",", name)?;
        writeln!(out, "                value: s.to_string(),")?;
        writeln!(out, "            }}),")?;
        writeln!(out, "        }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")
    }

    fn render_bit_ops(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        for (trait_name, method, op) in [("BitOr", "bitor", "|"), ("BitAnd", "bitand", "&")] {
            writeln!(out)?;
            writeln!(out, "impl std::ops::{} for {} {{", trait_name, name)?;
            writeln!(out, "    type Output = {};", name)?;
            writeln!(out)?;
            writeln!(out, "    fn {}(self, rhs: {}) -> {} {{", method, name, name)?;
            writeln!(out, "        {}(self.0 {} rhs.0)", name, op)?;
            writeln!(out, "    }}")?;
            writeln!(out, "}}")?;
        }
        Ok(())
    }

    fn render_keep_alive(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;
        writeln!(out, "#[used]")?;
        writeln!(
            out,
            "static KEEP_{}: [{}; {}] = [",
            to_upper_snake(name),
            name,
            def.count()
        )?;
        for member in &def.members {
            writeln!(out, "    {}::{},", name, member.constant_name)?;
        }
        writeln!(out, "];")
    }
}

impl Renderer for RustRenderer {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn check_names(&self, enums: &[ResolvedEnum]) -> Result<(), GenerateError> {
        let mut names = Namespace::new(Language::Rust)
            .reserve(KEYWORDS, "a Rust keyword")
            .reserve(REFERENCED, "a name the generated code refers to")
            .reserve(&["UnrecognizedEnumValue"], "the shared error type");

        // Member constants are associated items; only types and statics
        // share the module namespace.
        for def in enums {
            names.declare(def.name.as_str(), format!("enum type `{}`", def.name))?;
            if def.preserve {
                names.declare(
                    format!("KEEP_{}", to_upper_snake(&def.name)),
                    format!("the keep-alive static of `{}`", def.name),
                )?;
            }
        }
        Ok(())
    }

    fn file_prelude(&self, out: &mut String, _enums: &[ResolvedEnum]) -> fmt::Result {
        writeln!(out)?;
        writeln!(out, "use std::fmt;")?;
        writeln!(out, "use std::str::FromStr;")?;
        writeln!(out)?;
        writeln!(
            out,
            "/// Returned when a string names no member of an enum type."
        )?;
        writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq)]")?;
        writeln!(out, "pub struct UnrecognizedEnumValue {{")?;
        writeln!(out, "    pub type_name: &'static str,")?;
        writeln!(out, "    pub value: String,")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "impl fmt::Display for UnrecognizedEnumValue {{")?;
        writeln!(
            out,
            "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{"
        )?;
        writeln!(
            out,
            "        write!(f, \"unknown {{}}: {{}}\", self.type_name, self.value)"
        )?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        writeln!(out, "impl std::error::Error for UnrecognizedEnumValue {{}}")
    }

    fn render_enum(&self, out: &mut String, def: &ResolvedEnum) -> fmt::Result {
        let name = &def.name;

        writeln!(out, "/// Generated `{}` enum type.", name)?;
        writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        writeln!(out, "#[repr(transparent)]")?;
        writeln!(
            out,
            "pub struct {}(pub {});",
            name,
            Self::underlying_type(def.repr)
        )?;
        writeln!(out)?;
        self.render_inherent(out, def)?;
        writeln!(out)?;
        self.render_display(out, def)?;
        writeln!(out)?;
        self.render_from_str(out, def)?;

        if def.is_bitset() {
            self.render_bit_ops(out, def)?;
        }

        if def.preserve {
            writeln!(out)?;
            self.render_keep_alive(out, def)?;
        }

        Ok(())
    }
}
