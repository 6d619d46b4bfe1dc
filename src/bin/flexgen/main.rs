//! flexgen CLI - enum binding generator for the Yoga layout engine

use anyhow::Result;
use clap::Parser;
use flexgen::util::diagnostic::{self, emit};
use flexgen::util::Shell;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("flexgen=debug")
    } else if cli.quiet {
        EnvFilter::new("flexgen=error")
    } else {
        EnvFilter::new("flexgen=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let shell = Shell::from_flags(
        cli.quiet,
        cli.color,
        cli.message_format == MessageFormat::Json,
    );

    if let Err(e) = run(cli.command, &shell) {
        report_error(&shell, &e);
        std::process::exit(1);
    }
}

fn run(command: Commands, shell: &Shell) -> Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::execute(args, shell),
        Commands::Table(args) => commands::table::execute(args),
        Commands::Platforms(args) => commands::platforms::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn report_error(shell: &Shell, e: &anyhow::Error) {
    if shell.is_json() {
        shell.error(format!("{:#}", e));
        return;
    }

    match diagnostic::for_error(e) {
        Some(mut diag) => {
            // The chain already names every cause.
            diag.message = format!("{:#}", e);
            let message = diag.message.clone();
            diag.context.retain(|c| !message.contains(c.as_str()));
            emit(&diag, shell.use_color());
        }
        None => eprintln!("error: {:#}", e),
    }
}
