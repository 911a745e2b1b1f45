//! Assembling built-in and user fragments from options.

use tracing::debug;

use super::options::{ConfigOptions, Feature};
use crate::composer::{Batch, Composer};
use crate::error::Result;
use crate::fragment::Fragment;
use crate::producers::{self, FeatureSettings, ProducerContext};

/// Name of the fragment built from the options' passthrough bag when the
/// options do not name it.
pub const USER_OPTIONS_FRAGMENT: &str = "lintweave/user/options";

/// Built-ins whose enablement can be auto-detected, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Imports,
    Typescript,
    Jsonc,
    Yaml,
    Toml,
    Markdown,
    Formatters,
}

impl Builtin {
    const ALL: [Builtin; 7] = [
        Builtin::Imports,
        Builtin::Typescript,
        Builtin::Jsonc,
        Builtin::Yaml,
        Builtin::Toml,
        Builtin::Markdown,
        Builtin::Formatters,
    ];

    fn name(self) -> &'static str {
        match self {
            Builtin::Imports => "imports",
            Builtin::Typescript => "typescript",
            Builtin::Jsonc => "jsonc",
            Builtin::Yaml => "yaml",
            Builtin::Toml => "toml",
            Builtin::Markdown => "markdown",
            Builtin::Formatters => "formatters",
        }
    }

    /// Package whose presence in the project turns the feature on.
    fn marker(self) -> &'static str {
        match self {
            Builtin::Imports => "eslint-plugin-import-lite",
            Builtin::Typescript => "typescript",
            Builtin::Jsonc => "eslint-plugin-jsonc",
            Builtin::Yaml => "eslint-plugin-yml",
            Builtin::Toml => "eslint-plugin-toml",
            Builtin::Markdown => "@eslint/markdown",
            Builtin::Formatters => "eslint-plugin-format",
        }
    }

    fn option(self, options: &ConfigOptions) -> Option<&Feature> {
        match self {
            Builtin::Imports => options.imports.as_ref(),
            Builtin::Typescript => options.typescript.as_ref(),
            Builtin::Jsonc => options.jsonc.as_ref(),
            Builtin::Yaml => options.yaml.as_ref(),
            Builtin::Toml => options.toml.as_ref(),
            Builtin::Markdown => options.markdown.as_ref(),
            Builtin::Formatters => options.formatters.as_ref(),
        }
    }

    fn batch(self, ctx: ProducerContext, settings: FeatureSettings) -> Batch {
        match self {
            Builtin::Imports => Batch::pending(producers::imports(ctx, settings)),
            Builtin::Typescript => Batch::pending(producers::typescript(ctx, settings)),
            Builtin::Jsonc => Batch::pending(producers::jsonc(ctx, settings)),
            Builtin::Yaml => Batch::pending(producers::yaml(ctx, settings)),
            Builtin::Toml => Batch::pending(producers::toml(ctx, settings)),
            Builtin::Markdown => Batch::pending(producers::markdown(ctx, settings)),
            Builtin::Formatters => Batch::pending(producers::formatters(ctx, settings)),
        }
    }
}

/// Build the composer for `options` without resolving anything.
///
/// Order: ignores, gitignore, javascript, imports, typescript, jsonc, yaml,
/// toml, markdown, formatters, the passthrough fragment, user fragments.
/// Callers may add edits to the returned composer before flattening.
///
/// # Errors
///
/// Returns `InvalidOptions` for options [`ConfigOptions::validate`] rejects,
/// and IO errors from reading `.gitignore`.
pub fn define_config(options: ConfigOptions, ctx: &ProducerContext) -> Result<Composer> {
    options.validate()?;
    let mut composer = Composer::new();

    composer.append([producers::ignores()]);

    let gitignore_on = resolve_feature("gitignore", options.gitignore.as_ref(), || {
        ctx.cwd.join(".gitignore").is_file()
    });
    if gitignore_on.is_some() {
        composer.append([producers::gitignore(&ctx.cwd)?]);
    }

    let javascript = options
        .javascript
        .as_ref()
        .and_then(Feature::settings)
        .unwrap_or_default();
    composer.append([producers::javascript(&javascript)]);

    for builtin in Builtin::ALL {
        let detect = || ctx.probe.resolver().is_resolvable(builtin.marker());
        if let Some(settings) = resolve_feature(builtin.name(), builtin.option(&options), detect) {
            composer.append([builtin.batch(ctx.clone(), settings)]);
        }
    }

    if options.has_passthrough() {
        composer.append([passthrough_fragment(&options)]);
    }

    composer.append(
        options
            .fragments
            .into_iter()
            .enumerate()
            .map(|(index, spec)| spec.into_fragment(index)),
    );

    Ok(composer)
}

/// Assemble and flatten in one step.
pub async fn assemble(options: ConfigOptions, ctx: &ProducerContext) -> Result<Vec<Fragment>> {
    define_config(options, ctx)?.flatten().await
}

/// Explicit setting wins; otherwise `detect` decides.
fn resolve_feature<D>(feature: &str, option: Option<&Feature>, detect: D) -> Option<FeatureSettings>
where
    D: FnOnce() -> bool,
{
    match option {
        Some(explicit) => {
            let settings = explicit.settings();
            debug!(feature, enabled = settings.is_some(), "Feature set explicitly");
            settings
        }
        None => {
            let detected = detect();
            debug!(feature, enabled = detected, "Feature auto-detected");
            detected.then(FeatureSettings::default)
        }
    }
}

fn passthrough_fragment(options: &ConfigOptions) -> Fragment {
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| USER_OPTIONS_FRAGMENT.to_string());
    Fragment::new(name)
        .with_ignores(options.ignores.iter().cloned())
        .with_rules(options.rules.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{PackagePluginLoader, RuleSetting};
    use crate::probe::{CapabilityProbe, KnownCompanions};
    use futures::executor::block_on;
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn context(cwd: &Path, companions: &[&str]) -> ProducerContext {
        let resolver = Arc::new(KnownCompanions::new(companions.iter().copied()));
        ProducerContext::new(
            cwd,
            CapabilityProbe::new(resolver.clone()),
            Arc::new(PackagePluginLoader::new(resolver)),
        )
    }

    fn names(fragments: &[Fragment]) -> Vec<String> {
        fragments.iter().map(|f| f.name.clone()).collect()
    }

    fn options(yaml: &str) -> ConfigOptions {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn bare_project_gets_ignores_and_javascript() {
        let temp = TempDir::new().unwrap();

        let fragments = block_on(assemble(ConfigOptions::default(), &context(temp.path(), &[]))).unwrap();

        assert_eq!(names(&fragments), vec!["lintweave/ignores", "lintweave/javascript/rules"]);
    }

    #[test]
    fn auto_detects_from_companions_and_gitignore() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "coverage/\n").unwrap();
        let ctx = context(temp.path(), &["eslint-plugin-yml", "yaml-eslint-parser"]);

        let fragments = block_on(assemble(ConfigOptions::default(), &ctx)).unwrap();

        assert_eq!(
            names(&fragments),
            vec![
                "lintweave/ignores",
                "lintweave/gitignore",
                "lintweave/javascript/rules",
                "lintweave/yaml/setup",
                "lintweave/yaml/rules",
            ]
        );
    }

    #[test]
    fn explicit_feature_without_companions_degrades() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &[]);

        let fragments = block_on(assemble(options("toml: true\ngitignore: false"), &ctx)).unwrap();

        assert_eq!(
            names(&fragments),
            vec!["lintweave/ignores", "lintweave/javascript/rules", "lintweave/toml/setup"]
        );
        assert_eq!(fragments[2].rules.len(), 1);
    }

    #[test]
    fn explicit_false_beats_detection() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &["@eslint/markdown"]);

        let fragments = block_on(assemble(options("markdown: false"), &ctx)).unwrap();

        assert!(!names(&fragments).iter().any(|n| n.contains("markdown")));
    }

    #[test]
    fn formatters_run_last_among_builtins() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &[]);
        let opts = options(
            "formatters: true\nyaml: true\nrules: { no-console: off }\n\
             fragments:\n  - name: mine\n    rules: { no-var: warn }\n",
        );

        let fragments = block_on(assemble(opts, &ctx)).unwrap();

        assert_eq!(
            names(&fragments),
            vec![
                "lintweave/ignores",
                "lintweave/javascript/rules",
                "lintweave/yaml/setup",
                "lintweave/formatters/setup",
                USER_OPTIONS_FRAGMENT,
                "mine",
            ]
        );
        assert_eq!(fragments[4].rules["no-console"], RuleSetting::off());
    }

    #[test]
    fn composer_accepts_edits_before_flatten() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &[]);

        let mut composer = define_config(options("yaml: true"), &ctx).unwrap();
        composer.insert_after("lintweave/yaml/setup", [Fragment::new("after-yaml")]);
        let fragments = block_on(composer.flatten()).unwrap();

        assert_eq!(names(&fragments).last().map(String::as_str), Some("after-yaml"));
    }

    #[test]
    fn rejects_top_level_files() {
        let temp = TempDir::new().unwrap();

        let err = define_config(options("files: ['**/*.js']"), &context(temp.path(), &[])).err();

        assert!(matches!(err, Some(crate::error::LintweaveError::InvalidOptions { .. })));
    }
}
