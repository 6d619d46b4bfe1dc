//! `flexgen platforms` command

use anyhow::Result;
use flexgen::core::platform::BuildTarget;
use flexgen::util::fs::relative_path;

use crate::cli::PlatformsArgs;
use crate::commands::{cwd, load_config};

pub fn execute(args: PlatformsArgs) -> Result<()> {
    let cwd = cwd()?;
    let config = load_config(args.config.as_deref())?;
    let root = config.root.clone().unwrap_or_else(|| cwd.clone());
    let layout = config.install_layout(&root);

    let host = match BuildTarget::host() {
        Ok(target) => Some(target),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    let targets = BuildTarget::all();

    if args.json {
        let targets: Vec<_> = targets
            .iter()
            .map(|t| {
                serde_json::json!({
                    "target": t.to_string(),
                    "platform": t.platform,
                    "arch": t.arch,
                    "library": layout.library_path(t),
                    "host": host.as_ref() == Some(t),
                })
            })
            .collect();
        let value = serde_json::json!({
            "host": host.as_ref().map(|t| t.to_string()),
            "targets": targets,
            "headers": layout.header_dir(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let width = targets
        .iter()
        .map(|t| t.to_string().len())
        .max()
        .unwrap_or(0);
    for target in &targets {
        let marker = if host.as_ref() == Some(target) {
            "  (host)"
        } else {
            ""
        };
        println!(
            "{:<width$}  {}{}",
            target.to_string(),
            relative_path(&cwd, &layout.library_path(target)).display(),
            marker,
            width = width
        );
    }
    println!(
        "{:<width$}  {}",
        "headers",
        relative_path(&cwd, &layout.header_dir()).display(),
        width = width
    );

    Ok(())
}
