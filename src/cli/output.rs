//! Output formatting for the CLI
//!
//! One formatter instance per invocation, configured from the global
//! `--json` and `--no-color` flags. Handlers never print directly.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output for the terminal
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global output flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("✓ {message}");
        } else {
            println!("{} {message}", "✓".green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.no_color {
            eprintln!("warning: {message}");
        } else {
            eprintln!("{} {message}", "warning:".yellow());
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("error: {message}");
        } else {
            eprintln!("{} {message}", "error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
