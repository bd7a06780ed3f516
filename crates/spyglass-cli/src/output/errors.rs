//! Rendering of failures for the terminal.
//!
//! Every error leaving the program goes through one formatter, which
//! prints the message, a remediation hint when the error carries one,
//! and the underlying cause chain.

use std::error::Error;

use spyglass_core::error::ExplorerError;

use super::colors::ColorSupport;

/// Renders errors as `error:` / `help:` / `caused by:` blocks
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Render the error, its suggestion, and its cause chain, separated
    /// by blank lines
    pub fn format_error(&self, error: &ExplorerError) -> String {
        let mut lines = vec![format!("{}: {}", self.colors.red("error"), error)];

        if let Some(suggestion) = error.suggestion() {
            lines.push(String::new());
            lines.push(format!("{}: {}", self.colors.dim("help"), suggestion));
        }

        let mut source = error.source();
        while let Some(cause) = source {
            lines.push(String::new());
            lines.push(format!("{}: {}", self.colors.dim("caused by"), cause));
            source = cause.source();
        }

        lines.join("\n")
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
