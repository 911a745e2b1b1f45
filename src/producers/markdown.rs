//! Markdown files.

use super::globs::GLOB_MARKDOWN;
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const COMPANIONS: &[&str] = &["@eslint/markdown"];

pub async fn markdown(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files_or(&[GLOB_MARKDOWN]);
    let loader = ctx.loader.clone();
    let anchor = setup_anchor("markdown", files.clone())
        .with_language(LanguageBinding::language("markdown/gfm"));

    with_companions(&ctx, COMPANIONS, anchor, move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![
            Fragment::new("lintweave/markdown/setup").with_plugin("markdown", plugin),
            Fragment::new("lintweave/markdown/rules")
                .with_files(files)
                .with_language(LanguageBinding::language("markdown/gfm"))
                .with_rules([
                    ("markdown/fenced-code-language", RuleSetting::error()),
                    ("markdown/heading-increment", RuleSetting::error()),
                    ("markdown/no-duplicate-definitions", RuleSetting::error()),
                    ("markdown/no-empty-links", RuleSetting::error()),
                    ("markdown/no-invalid-label-refs", RuleSetting::error()),
                    ("markdown/no-missing-label-refs", RuleSetting::error()),
                ])
                .with_rules(settings.overrides),
        ])
    })
    .await
}
