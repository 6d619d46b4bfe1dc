//! `flexgen table` command

use anyhow::{bail, Result};
use flexgen::codegen::{resolve_table, Repr, ResolvedEnum};
use flexgen::ops::load_table;
use flexgen::util::diagnostic::suggestions;

use crate::cli::TableArgs;
use crate::commands::load_config;

pub fn execute(args: TableArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let table_path = args.table.or(config.table);
    let table = load_table(table_path.as_deref())?;
    let enums = resolve_table(&table)?;

    let selected: Vec<&ResolvedEnum> = match &args.name {
        Some(name) => match enums.iter().find(|e| &e.name == name) {
            Some(def) => vec![def],
            None => bail!(
                "enum type `{}` not found in the table\n{}",
                name,
                suggestions::ENUM_NOT_FOUND
            ),
        },
        None => enums.iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for (i, def) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_enum(def);
    }

    Ok(())
}

fn print_enum(def: &ResolvedEnum) {
    let mut traits = vec![def.repr.to_string()];
    traits.push(if def.is_bitset() { "bitset" } else { "sequential" }.to_string());
    if def.preserve {
        traits.push("preserved".to_string());
    }
    println!("{} ({})", def.name, traits.join(", "));

    let values: Vec<String> = def
        .members
        .iter()
        .map(|m| match def.repr {
            Repr::I32 => m.value.to_string(),
            Repr::U32 => format!("0x{:X}", m.value),
        })
        .collect();
    let name_width = def.members.iter().map(|m| m.name.len()).max().unwrap_or(0);
    let value_width = values.iter().map(|v| v.len()).max().unwrap_or(0);

    for (member, value) in def.members.iter().zip(&values) {
        println!(
            "  {:<name_width$}  {:>value_width$}  {}",
            member.name,
            value,
            member.external_name,
            name_width = name_width,
            value_width = value_width
        );
    }
}
