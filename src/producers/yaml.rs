//! YAML files.

use serde_json::json;

use super::globs::GLOB_YAML;
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const COMPANIONS: &[&str] = &["eslint-plugin-yml", "yaml-eslint-parser"];

pub async fn yaml(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files_or(&[GLOB_YAML]);
    let loader = ctx.loader.clone();
    let anchor = setup_anchor("yaml", files.clone())
        .with_language(LanguageBinding::parser(COMPANIONS[1]));

    with_companions(&ctx, COMPANIONS, anchor, move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![
            Fragment::new("lintweave/yaml/setup").with_plugin("yaml", plugin),
            Fragment::new("lintweave/yaml/rules")
                .with_files(files)
                .with_language(LanguageBinding::parser(COMPANIONS[1]))
                .with_rules([
                    ("yaml/block-mapping", RuleSetting::error()),
                    ("yaml/block-sequence", RuleSetting::error()),
                    ("yaml/no-empty-key", RuleSetting::error()),
                    ("yaml/no-empty-sequence-entry", RuleSetting::error()),
                    ("yaml/no-irregular-whitespace", RuleSetting::error()),
                    ("yaml/plain-scalar", RuleSetting::error()),
                    ("yaml/indent", RuleSetting::error().with_option(json!(2))),
                    (
                        "yaml/quotes",
                        RuleSetting::error().with_option(json!({ "avoidEscape": true, "prefer": "single" })),
                    ),
                ])
                .with_rules(settings.overrides),
        ])
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producers::test_support::{context, names};
    use futures::executor::block_on;

    #[test]
    fn produces_setup_and_rules() {
        let fragments = block_on(yaml(context(COMPANIONS), FeatureSettings::default())).unwrap();

        assert_eq!(names(&fragments), vec!["lintweave/yaml/setup", "lintweave/yaml/rules"]);
        assert_eq!(
            fragments[1].language.as_ref().and_then(|l| l.parser.as_deref()),
            Some("yaml-eslint-parser")
        );
    }

    #[test]
    fn fallback_lists_every_missing_companion() {
        let fragments = block_on(yaml(context(&[]), FeatureSettings::default())).unwrap();

        let (_, setting) = fragments[0].rules.iter().next().unwrap();
        assert_eq!(setting.options, vec![json!(["eslint-plugin-yml", "yaml-eslint-parser"])]);
        assert_eq!(fragments[0].files, vec![GLOB_YAML]);
    }
}
