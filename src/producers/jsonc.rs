//! JSON, JSON5 and JSONC files.

use serde_json::json;

use super::globs::{GLOB_JSON, GLOB_JSON5, GLOB_JSONC};
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const COMPANIONS: &[&str] = &["eslint-plugin-jsonc", "jsonc-eslint-parser"];

pub async fn jsonc(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files_or(&[GLOB_JSON, GLOB_JSON5, GLOB_JSONC]);
    let loader = ctx.loader.clone();
    let anchor = setup_anchor("jsonc", files.clone())
        .with_language(LanguageBinding::parser(COMPANIONS[1]));

    with_companions(&ctx, COMPANIONS, anchor, move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![
            Fragment::new("lintweave/jsonc/setup").with_plugin("jsonc", plugin),
            Fragment::new("lintweave/jsonc/rules")
                .with_files(files)
                .with_language(LanguageBinding::parser(COMPANIONS[1]))
                .with_rules([
                    ("jsonc/no-bigint-literals", RuleSetting::error()),
                    ("jsonc/no-dupe-keys", RuleSetting::error()),
                    ("jsonc/no-octal-escape", RuleSetting::error()),
                    ("jsonc/no-useless-escape", RuleSetting::error()),
                    ("jsonc/valid-json-number", RuleSetting::error()),
                    ("jsonc/indent", RuleSetting::error().with_option(json!(2))),
                    (
                        "jsonc/quote-props",
                        RuleSetting::error().with_option(json!("always")),
                    ),
                ])
                .with_rules(settings.overrides),
        ])
    })
    .await
}
