//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use flexgen::codegen::Language;
use flexgen::util::shell::ColorChoice;

/// flexgen - enum binding generator for the Yoga layout engine
#[derive(Parser)]
#[command(name = "flexgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto", env = "FLEXGEN_COLOR")]
    pub color: ColorChoice,

    /// Output format for status messages
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    /// Status lines on stderr
    Human,
    /// One JSON object per event on stdout
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate enum bindings
    Generate(GenerateArgs),

    /// Show the resolved enum table
    Table(TableArgs),

    /// List supported native build targets
    Platforms(PlatformsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to Flexgen.toml (default: search upward from the current directory)
    #[arg(long, env = "FLEXGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enum table to use instead of the configured or built-in one
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Generate a single output in this language, ignoring configured outputs
    #[arg(long, requires = "out")]
    pub lang: Option<Language>,

    /// Destination file for --lang
    #[arg(long, requires = "lang")]
    pub out: Option<PathBuf>,

    /// Go package name for --lang go
    #[arg(long, requires = "lang")]
    pub package: Option<String>,

    /// Fail if any generated file is out of date instead of writing it
    #[arg(long)]
    pub check: bool,
}

#[derive(Args)]
pub struct TableArgs {
    /// Show only this enum type
    pub name: Option<String>,

    /// Path to Flexgen.toml (default: search upward from the current directory)
    #[arg(long, env = "FLEXGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enum table to use instead of the configured or built-in one
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PlatformsArgs {
    /// Path to Flexgen.toml (default: search upward from the current directory)
    #[arg(long, env = "FLEXGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
