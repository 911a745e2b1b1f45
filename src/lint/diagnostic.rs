//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! findings reported by locally implemented rules.

use serde::Serialize;

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic, qualified with its plugin
    /// namespace once it leaves the plugin.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub span: Option<Span>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
            suggestion: None,
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Replace the rule id with its namespaced form.
    pub fn in_namespace(mut self, namespace: &str) -> Self {
        self.rule_id = RuleId::new(self.rule_id.qualified(namespace));
        self
    }
}

/// Serializable view of a diagnostic used by the JSON formatter.
#[derive(Debug, Serialize)]
pub struct DiagnosticRecord<'a> {
    pub rule: &'a str,
    pub severity: Severity,
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'a str>,
}

impl<'a> From<&'a LintDiagnostic> for DiagnosticRecord<'a> {
    fn from(diag: &'a LintDiagnostic) -> Self {
        Self {
            rule: &diag.rule_id.0,
            severity: diag.severity,
            message: &diag.message,
            file: diag.span.as_ref().map(|s| s.file.display().to_string()),
            line: diag.span.as_ref().map(|s| s.start_line),
            column: diag.span.as_ref().map(|s| s.start_col),
            suggestion: diag.suggestion.as_deref(),
        }
    }
}
