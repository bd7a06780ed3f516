//! ANSI color handling for terminal output.
//!
//! Colors are suppressed when NO_COLOR is set or when either output
//! stream is not a terminal, so piped output stays free of escape
//! codes.

use std::env;
use std::io::{self, IsTerminal};

/// Decides whether output gets ANSI colors
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Inspect the environment and output streams to decide on color
    pub fn detect() -> Self {
        let enabled = env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal()
            && io::stderr().is_terminal();
        Self { enabled }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }

    /// Success green
    pub fn green(&self, text: &str) -> String {
        self.paint("32", text)
    }

    /// Warning yellow
    pub fn yellow(&self, text: &str) -> String {
        self.paint("33", text)
    }

    /// Error red
    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    /// Dimmed secondary text
    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }
}
