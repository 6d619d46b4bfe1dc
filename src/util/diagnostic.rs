//! User-friendly diagnostic messages.
//!
//! Every error the CLI reports names the failing item, the rule it broke and,
//! where one exists, a fix.

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;

use crate::codegen::GenerateError;
use crate::core::platform::PlatformError;
use crate::core::table::TableError;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a checked artifact is out of date.
    pub const STALE_OUTPUT: &str = "help: Run `flexgen generate` to refresh generated files";

    /// Suggestion when nothing is configured to generate.
    pub const NO_OUTPUTS: &str =
        "help: Add an [[output]] section to Flexgen.toml, or pass --lang and --out";

    /// Suggestion when an enum type is not in the table.
    pub const ENUM_NOT_FOUND: &str = "help: Run `flexgen table` to list every enum type";
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Build a diagnostic from any error carrying miette metadata.
    ///
    /// The source chain becomes context lines and the help text becomes the
    /// only suggestion.
    pub fn from_miette(err: &dyn MietteDiagnostic) -> Self {
        let mut diag = Diagnostic::error(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            diag = diag.with_context(cause.to_string());
            source = cause.source();
        }
        if let Some(help) = err.help() {
            diag = diag.with_suggestion(help.to_string());
        }
        diag
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let label = if color {
            "\x1b[1;31merror\x1b[0m"
        } else {
            "error"
        };
        output.push_str(&format!("{}: {}\n", label, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  -> {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Find a library error anywhere in an `anyhow` chain and describe it.
///
/// Returns `None` for errors flexgen has no structured description of; the
/// caller falls back to the plain chain.
pub fn for_error(err: &anyhow::Error) -> Option<Diagnostic> {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<GenerateError>() {
            return Some(e.to_diagnostic());
        }
        if let Some(e) = cause.downcast_ref::<TableError>() {
            let diag = Diagnostic::from_miette(e);
            return Some(match e {
                TableError::Read { path, .. } => diag.with_location(path),
                _ => diag,
            });
        }
        if let Some(e) = cause.downcast_ref::<PlatformError>() {
            return Some(Diagnostic::from_miette(e));
        }
    }
    None
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
