//! Evaluating locally implemented rules over a composed fragment list.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::diagnostic::LintDiagnostic;
use super::rule::{RuleContext, RuleId};
use crate::fragment::{Fragment, PluginBinding};
use crate::installer::Installer;

/// Settings shared by every rule evaluated in one run.
pub struct RunSettings<'a> {
    pub filename: &'a Path,
    pub cwd: &'a Path,
    pub repair_enabled: bool,
    pub installer: &'a Installer,
}

/// Evaluate every enabled rule whose plugin implements it in this crate.
///
/// Plugins bound by earlier fragments stay visible to later ones, matching
/// how the host engine resolves `namespace/rule` keys. Rules that live in
/// the host engine are skipped.
pub fn run_local_rules(fragments: &[Fragment], settings: &RunSettings<'_>) -> Vec<LintDiagnostic> {
    let mut plugins: BTreeMap<&str, &Arc<dyn PluginBinding>> = BTreeMap::new();
    let mut diagnostics = Vec::new();

    for fragment in fragments {
        for (namespace, plugin) in &fragment.plugins {
            plugins.insert(namespace.as_str(), plugin);
        }

        for (key, setting) in fragment.enabled_rules() {
            let Some((namespace, id)) = key.rsplit_once('/') else {
                continue;
            };
            let Some(rule) = plugins
                .get(namespace)
                .and_then(|plugin| plugin.rule(&RuleId::new(id)))
            else {
                continue;
            };

            debug!(rule = key, fragment = %fragment.name, "Evaluating rule");
            let ctx = RuleContext {
                filename: settings.filename,
                cwd: settings.cwd,
                options: &setting.options,
                severity: setting.severity,
                repair_enabled: settings.repair_enabled,
                installer: settings.installer,
            };
            diagnostics.extend(
                rule.check(&ctx)
                    .into_iter()
                    .map(|diag| diag.in_namespace(namespace)),
            );
        }
    }

    diagnostics
}
