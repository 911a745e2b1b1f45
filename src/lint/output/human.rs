//! Human-readable output formatter.
//!
//! Formats diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use console::style;
use std::io::Write;

/// Formats diagnostics for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if !self.use_color {
            return label;
        }
        match severity {
            Severity::Error => style(label).red().bold().force_styling(true).to_string(),
            Severity::Warn => style(label).yellow().bold().force_styling(true).to_string(),
            Severity::Off => label,
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Multi-line messages keep their continuation lines indented.
            let mut lines = diag.message.lines();
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id.0,
                lines.next().unwrap_or_default()
            )?;
            for line in lines {
                writeln!(writer, "   | {}", line)?;
            }

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  --> {}:{}:{}",
                    span.file.display(),
                    span.start_line,
                    span.start_col
                )?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warn)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
