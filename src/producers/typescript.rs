//! TypeScript parser and rules.
//!
//! Emits three fragments so callers can target each step by name: the
//! plugin binding, the parser assignment for TypeScript files, and the
//! rule table.

use serde_json::json;

use super::globs::{GLOB_TS, GLOB_TSX};
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const PARSER: &str = "@typescript-eslint/parser";
pub const PLUGIN: &str = "@typescript-eslint/eslint-plugin";
pub const COMPANIONS: &[&str] = &[PARSER, PLUGIN];

pub async fn typescript(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files_or(&[GLOB_TS, GLOB_TSX]);
    let loader = ctx.loader.clone();

    let anchor = setup_anchor("typescript", files.clone())
        .with_language(LanguageBinding::parser(PARSER));

    with_companions(&ctx, COMPANIONS, anchor, move || {
        let plugin = loader.load(PLUGIN)?;
        Ok(vec![
            Fragment::new("lintweave/typescript/setup").with_plugin("ts", plugin),
            Fragment::new("lintweave/typescript/parser")
                .with_files(files.clone())
                .with_language(
                    LanguageBinding::parser(PARSER)
                        .with_option("sourceType", json!("module"))
                        .with_option("extraFileExtensions", json!([])),
                ),
            Fragment::new("lintweave/typescript/rules")
                .with_files(files)
                .with_rules(rules())
                .with_rules(settings.overrides),
        ])
    })
    .await
}

fn rules() -> Vec<(&'static str, RuleSetting)> {
    vec![
        // Checked by the compiler.
        ("no-undef", RuleSetting::off()),
        ("no-redeclare", RuleSetting::off()),
        ("no-unused-vars", RuleSetting::off()),
        (
            "ts/consistent-type-imports",
            RuleSetting::error().with_option(json!({
                "disallowTypeAnnotations": false,
                "fixStyle": "separate-type-imports",
                "prefer": "type-imports"
            })),
        ),
        ("ts/no-explicit-any", RuleSetting::off()),
        ("ts/no-import-type-side-effects", RuleSetting::error()),
        ("ts/no-redeclare", RuleSetting::error().with_option(json!({ "builtinGlobals": false }))),
        ("ts/no-unused-vars", RuleSetting::off()),
        ("ts/no-wrapper-object-types", RuleSetting::error()),
        ("ts/prefer-as-const", RuleSetting::warn()),
    ]
}
