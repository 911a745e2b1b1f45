//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules
//! that plugins expose:
//!
//! - [`LintRule`] - The trait that all locally implemented rules implement
//! - [`RuleId`] - Unique identifier for a lint rule within a plugin
//! - [`Severity`] - Severity level shared by rule settings and diagnostics
//! - [`RuleContext`] - Everything a rule sees while it is evaluated

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::diagnostic::LintDiagnostic;
use crate::installer::Installer;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Qualify this ID with a plugin namespace (`namespace/id`).
    pub fn qualified(&self, namespace: &str) -> String {
        format!("{}/{}", namespace, self.0)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for rule settings and the diagnostics they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Rule disabled.
    Off,
    /// Reported, does not fail the run.
    Warn,
    /// Reported and fails the run.
    Error,
}

impl Severity {
    /// Lowercase name used in rule settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Parse the textual or numeric (`0`/`1`/`2`) form.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                "off" => Some(Severity::Off),
                "warn" | "warning" => Some(Severity::Warn),
                "error" => Some(Severity::Error),
                _ => None,
            },
            Value::Number(n) => match n.as_u64()? {
                0 => Some(Severity::Off),
                1 => Some(Severity::Warn),
                2 => Some(Severity::Error),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether a rule at this severity runs at all.
    pub fn is_enabled(&self) -> bool {
        *self != Severity::Off
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Severity::parse(&value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid severity {}, expected off/warn/error or 0/1/2",
                value
            ))
        })
    }
}

/// Evaluation context handed to a rule by the host run.
///
/// `repair_enabled` mirrors the host engine's fix mode for this run.
pub struct RuleContext<'a> {
    /// File being linted; diagnostics anchor at its start.
    pub filename: &'a Path,
    /// Directory the host run was started in.
    pub cwd: &'a Path,
    /// Options the rule was configured with (everything after the severity).
    pub options: &'a [Value],
    /// Severity the rule was enabled at.
    pub severity: Severity,
    /// Whether the run may repair what it reports.
    pub repair_enabled: bool,
    /// Installer used by rules that repair missing companions.
    pub installer: &'a Installer,
}

/// A lint rule implemented inside this crate.
///
/// Most rules enabled by composed fragments live in the host engine; only
/// synthetic rules (such as the missing-companion diagnostic) implement
/// this trait.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule within its plugin.
    fn id(&self) -> RuleId;

    /// Evaluate the rule and return any diagnostics.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintDiagnostic>;
}
