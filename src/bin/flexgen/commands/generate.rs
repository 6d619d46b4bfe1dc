//! `flexgen generate` command

use std::time::Instant;

use anyhow::{bail, Result};
use flexgen::ops::{generate_outputs, GenerateOptions, OutputSpec, OutputState};
use flexgen::util::diagnostic::suggestions;
use flexgen::util::fs::relative_path;
use flexgen::util::hash::short;
use flexgen::util::shell::format_duration;
use flexgen::util::{Shell, Status};

use crate::cli::GenerateArgs;
use crate::commands::{cwd, load_config};

pub fn execute(args: GenerateArgs, shell: &Shell) -> Result<()> {
    let start = Instant::now();
    let cwd = cwd()?;
    let config = load_config(args.config.as_deref())?;

    let mut opts = GenerateOptions::from_config(&config);
    if let Some(table) = args.table {
        opts.table = Some(table);
    }
    if let (Some(language), Some(out)) = (args.lang, args.out) {
        let mut output = OutputSpec::new(language, out);
        output.package = args.package;
        opts.outputs = vec![output];
    }
    opts.check = args.check;

    if opts.outputs.is_empty() {
        bail!("no outputs configured\n{}", suggestions::NO_OUTPUTS);
    }

    if opts.check {
        shell.status(
            Status::Checking,
            format!("{} generated file(s)", opts.outputs.len()),
        );
    }

    let report = generate_outputs(&opts)?;

    for output in &report.outputs {
        let display = relative_path(&cwd, &output.path);
        shell.json_event(&serde_json::json!({
            "reason": "output",
            "language": output.language,
            "path": output.path,
            "checksum": output.checksum,
            "state": output.state,
        }));

        let status = match output.state {
            OutputState::Written => Status::Generated,
            OutputState::Unchanged | OutputState::Fresh => Status::Fresh,
            OutputState::Stale => Status::Stale,
        };
        shell.status(
            status,
            format!(
                "{} ({}, {})",
                display.display(),
                output.language,
                short(&output.checksum)
            ),
        );
    }

    if !report.is_fresh() {
        let stale: Vec<String> = report
            .stale()
            .map(|o| relative_path(&cwd, &o.path).display().to_string())
            .collect();
        bail!(
            "generated files are out of date: {}\n{}",
            stale.join(", "),
            suggestions::STALE_OUTPUT
        );
    }

    shell.json_event(&serde_json::json!({
        "reason": "generate-finished",
        "enums": report.enums,
        "outputs": report.outputs.len(),
    }));
    shell.status(
        Status::Finished,
        format!(
            "{} enum types into {} file(s) in {}",
            report.enums,
            report.outputs.len(),
            format_duration(start.elapsed())
        ),
    );

    Ok(())
}
