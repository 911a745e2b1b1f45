//! The missing-companion diagnostic rule.

use serde_json::Value;
use tracing::warn;

use crate::error::LintweaveError;
use crate::lint::{LintDiagnostic, LintRule, RuleContext, RuleId, Span};

/// Rule ID of the missing-companion diagnostic inside its plugin.
pub const MISSING_MODULE_RULE: &str = "missing-module";

/// Reports each companion a degraded producer needed, and installs it when
/// the run allows repairs.
///
/// The missing names arrive as the rule's first option, the same list the
/// fallback was built from.
pub struct MissingCompanionRule;

impl MissingCompanionRule {
    /// Companion names from the rule's options.
    pub fn missing_names(options: &[Value]) -> Vec<String> {
        match options.first() {
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::String(name)) => vec![name.clone()],
            _ => Vec::new(),
        }
    }

    fn report(&self, ctx: &RuleContext<'_>, name: &str) -> LintDiagnostic {
        let command = ctx.installer.install_command(name, ctx.cwd);
        let mut message = format!("Missing module for config: {}. Run: `{}`", name, command);

        if ctx.repair_enabled {
            match ctx.installer.install(name, ctx.cwd) {
                Ok(Some(output)) => {
                    message.push('\n');
                    message.push_str(&output);
                }
                Ok(None) => {}
                Err(LintweaveError::NoInstallerDetected { .. }) => {}
                Err(e) => {
                    warn!(companion = name, "Automatic install failed: {}", e);
                    message.push('\n');
                    message.push_str(&e.to_string());
                }
            }
        }

        LintDiagnostic::new(self.id(), ctx.severity, message)
            .with_span(Span::start_of_file(ctx.filename))
            .with_suggestion(format!("Install it with `{}`", command))
    }
}

impl LintRule for MissingCompanionRule {
    fn id(&self) -> RuleId {
        RuleId::new(MISSING_MODULE_RULE)
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<LintDiagnostic> {
        Self::missing_names(ctx.options)
            .iter()
            .map(|name| self.report(ctx, name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::{
        CommandOutcome, CommandRunner, InstallAttemptRegistry, Installer, Invocation,
    };
    use crate::lint::Severity;
    use serde_json::json;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::TempDir;

    struct ScriptedRunner {
        calls: Rc<RefCell<Vec<Invocation>>>,
        exit_code: i32,
        output: Option<String>,
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutcome> {
            self.calls.borrow_mut().push(invocation.clone());
            Ok(CommandOutcome {
                exit_code: Some(self.exit_code),
                output: self.output.clone(),
                duration: Duration::ZERO,
            })
        }
    }

    fn installer(exit_code: i32, output: Option<&str>) -> (Installer, Rc<RefCell<Vec<Invocation>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let runner = ScriptedRunner {
            calls: calls.clone(),
            exit_code,
            output: output.map(str::to_string),
        };
        (
            Installer::with_runner(InstallAttemptRegistry::new(), Box::new(runner)),
            calls,
        )
    }

    fn check(installer: &Installer, cwd: &Path, options: &[Value], repair: bool) -> Vec<LintDiagnostic> {
        let ctx = RuleContext {
            filename: Path::new("src/index.js"),
            cwd,
            options,
            severity: Severity::Error,
            repair_enabled: repair,
            installer,
        };
        MissingCompanionRule.check(&ctx)
    }

    fn yarn_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        temp
    }

    #[test]
    fn one_diagnostic_per_missing_companion() {
        let temp = yarn_project();
        let (installer, calls) = installer(0, None);
        let options = [json!(["eslint-plugin-yml", "yaml-eslint-parser"])];

        let diagnostics = check(&installer, temp.path(), &options, false);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].message,
            "Missing module for config: eslint-plugin-yml. Run: `yarn add -D eslint-plugin-yml`"
        );
        assert_eq!(diagnostics[1].span.as_ref().unwrap().start_line, 1);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn repair_appends_installer_output() {
        let temp = yarn_project();
        let (installer, calls) = installer(0, Some("added 1 package"));
        let options = [json!(["eslint-plugin-toml"])];

        let diagnostics = check(&installer, temp.path(), &options, true);

        assert!(diagnostics[0].message.ends_with("`\nadded 1 package"));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn repair_runs_once_across_evaluations() {
        let temp = yarn_project();
        let (installer, calls) = installer(0, Some("ok"));
        let options = [json!(["eslint-plugin-toml"])];

        check(&installer, temp.path(), &options, true);
        let second = check(&installer, temp.path(), &options, true);

        assert!(!second[0].message.contains('\n'));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn install_failure_is_surfaced_in_message() {
        let temp = yarn_project();
        let (installer, _) = installer(1, None);
        let options = [json!(["eslint-plugin-format"])];

        let diagnostics = check(&installer, temp.path(), &options, true);

        let message = &diagnostics[0].message;
        assert!(message.contains("Failed to install 'eslint-plugin-format'"));
        assert!(message.contains("exited with code 1"));
    }

    #[test]
    fn missing_names_accepts_single_string() {
        assert_eq!(
            MissingCompanionRule::missing_names(&[json!("a")]),
            vec!["a".to_string()]
        );
        assert!(MissingCompanionRule::missing_names(&[]).is_empty());
    }
}
