//! Test fixtures for common test scenarios.
//!
//! Small enum tables and matching TOML/config text, so tests do not depend on
//! the full canonical table unless they mean to.

use crate::core::table::{EnumDefinition, EnumTable, MemberSpec};

/// A valid table covering each member kind.
///
/// - `Direction`: sequential, positional (`Inherit`, `LTR`, `RTL`).
/// - `Flags`: bitset (`None`=0, `Fast`=1, `Safe`=2, `All`=3).
/// - `Level`: sequential, all explicit (`Low`=-1, `High`=10), preserved.
pub fn small_table() -> EnumTable {
    EnumTable::new(vec![
        EnumDefinition::sequential("Direction", &["Inherit", "LTR", "RTL"]),
        EnumDefinition::bitset("Flags", &[("None", 0), ("Fast", 1), ("Safe", 2), ("All", 3)]),
        EnumDefinition::sequential("Level", &[])
            .with_member(MemberSpec::Explicit("Low".to_string(), -1))
            .with_member(MemberSpec::Explicit("High".to_string(), 10))
            .preserved(),
    ])
}

/// A table whose bitset enum has a member without a value.
pub fn named_bitset_table() -> EnumTable {
    EnumTable::new(vec![
        EnumDefinition::sequential("Direction", &["Inherit", "LTR", "RTL"]),
        EnumDefinition::bitset("Flags", &[("None", 0), ("Fast", 1)])
            .with_member(MemberSpec::Named("Safe".to_string())),
    ])
}

/// TOML text equivalent to [`small_table`].
pub fn small_table_toml() -> &'static str {
    r#"preserve = ["Level"]
bitset = ["Flags"]

[enums]
Direction = ["Inherit", "LTR", "RTL"]
Flags = [["None", 0], ["Fast", 0x1], ["Safe", 0x2], ["All", 0x3]]
Level = [["Low", -1], ["High", 10]]
"#
}

/// TOML text for a table that fails validation.
pub fn invalid_table_toml() -> &'static str {
    r#"bitset = ["Flags"]

[enums]
Flags = [["None", 0], "Fast"]
"#
}

/// A `Flexgen.toml` with one output per language and the given table path.
pub fn config_toml(table: &str) -> String {
    format!(
        r#"table = "{table}"

[header]
license = ["Copyright (c) Example Authors.", "Licensed under MIT."]

[[output]]
language = "go"
path = "gen/enums_gen.go"
package = "layout"

[[output]]
language = "rust"
path = "gen/enums.rs"
"#
    )
}
