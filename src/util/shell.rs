//! CLI output: status lines for people, JSON events for tools.
//!
//! Status lines go to stderr with the verb right-aligned in a 12-column
//! gutter. Under `--message-format json` they are dropped and every event is
//! one JSON object per line on stdout.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::str::FromStr;
use std::time::Duration;

const STATUS_WIDTH: usize = 12;

/// When to color status verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// The verb at the start of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Checking,
    Generated,
    Fresh,
    Stale,
    Finished,
    Error,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Checking => "Checking",
            Status::Generated => "Generated",
            Status::Fresh => "Fresh",
            Status::Stale => "Stale",
            Status::Finished => "Finished",
            Status::Error => "error",
        }
    }

    fn ansi(self) -> &'static str {
        match self {
            Status::Checking => "\x1b[1;36m",
            Status::Generated | Status::Fresh | Status::Finished => "\x1b[1;32m",
            Status::Stale => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Where the CLI writes what it has to say.
#[derive(Debug)]
pub struct Shell {
    json: bool,
    quiet: bool,
    color: bool,
}

impl Shell {
    /// JSON output wins over `--quiet`.
    pub fn from_flags(quiet: bool, color: ColorChoice, json: bool) -> Self {
        let color = !json
            && match color {
                ColorChoice::Auto => io::stderr().is_terminal(),
                ColorChoice::Always => true,
                ColorChoice::Never => false,
            };
        Shell {
            json,
            quiet: quiet && !json,
            color,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn use_color(&self) -> bool {
        self.color
    }

    /// Print `{status:>12} {msg}` to stderr. Quiet mode keeps errors only.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.json || (self.quiet && status != Status::Error) {
            return;
        }
        eprintln!("{} {}", self.verb(status), msg);
    }

    /// Report a failure as a status line, or as an `error` event in JSON mode.
    pub fn error(&self, msg: impl Display) {
        if self.json {
            self.json_event(&serde_json::json!({
                "reason": "error",
                "message": msg.to_string(),
            }));
        } else {
            self.status(Status::Error, msg);
        }
    }

    /// Print one JSON event to stdout. Ignored outside JSON mode.
    pub fn json_event(&self, event: &serde_json::Value) {
        if !self.json {
            return;
        }
        println!("{}", event);
        let _ = io::stdout().flush();
    }

    fn verb(&self, status: Status) -> String {
        if self.color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.ansi(),
                status.label(),
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", status.label(), width = STATUS_WIDTH)
        }
    }
}

/// Elapsed time for the `Finished` line.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.1}m", secs / 60.0)
    }
}
