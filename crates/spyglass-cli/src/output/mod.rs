//! Terminal rendering shared by every command.
//!
//! One `OutputHandler` per process: plain informational lines, success
//! and warning markers, labeled fields for the details view, and pretty
//! JSON for `--json` mode.

use serde::Serialize;

pub mod colors;
pub mod errors;

/// Shared terminal writer for command output
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Secondary text, dimmed when the terminal supports it
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Headline line with a green check mark
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    /// Warning line with a yellow marker
    pub fn warn(&self, message: &str) {
        println!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Progress line prefixed with a command emoji
    pub fn step(&self, emoji: &str, message: &str) {
        println!("{} {}", emoji, message);
    }

    /// Indented `label: value` line for the details view
    pub fn field(&self, label: &str, value: &str) {
        println!("  {} {}", self.colors.dim(&format!("{}:", label)), value);
    }

    /// Pretty-printed JSON on stdout; rendering failures go to stderr
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(rendered) => println!("{}", rendered),
            Err(error) => eprintln!(
                "{}",
                self.colors
                    .red(&format!("Failed to render JSON output: {}", error))
            ),
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
