//! TOML files.

use serde_json::json;

use super::globs::GLOB_TOML;
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const COMPANIONS: &[&str] = &["eslint-plugin-toml", "toml-eslint-parser"];

pub async fn toml(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files_or(&[GLOB_TOML]);
    let loader = ctx.loader.clone();
    let anchor = setup_anchor("toml", files.clone())
        .with_language(LanguageBinding::parser(COMPANIONS[1]));

    with_companions(&ctx, COMPANIONS, anchor, move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![
            Fragment::new("lintweave/toml/setup").with_plugin("toml", plugin),
            Fragment::new("lintweave/toml/rules")
                .with_files(files)
                .with_language(LanguageBinding::parser(COMPANIONS[1]))
                .with_rules([
                    ("toml/keys-order", RuleSetting::error()),
                    ("toml/no-space-dots", RuleSetting::error()),
                    ("toml/no-unreadable-number-separator", RuleSetting::error()),
                    ("toml/precision-of-fractional-seconds", RuleSetting::error()),
                    ("toml/precision-of-integer", RuleSetting::error()),
                    ("toml/tables-order", RuleSetting::error()),
                    ("toml/indent", RuleSetting::error().with_option(json!(2))),
                ])
                .with_rules(settings.overrides),
        ])
    })
    .await
}
