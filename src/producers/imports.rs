//! Import hygiene rules.

use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, RuleSetting};
use serde_json::json;

pub const COMPANIONS: &[&str] = &["eslint-plugin-import-lite"];

pub async fn imports(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let files = settings.files.clone().unwrap_or_default();
    let loader = ctx.loader.clone();

    with_companions(&ctx, COMPANIONS, setup_anchor("imports", files.clone()), move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![Fragment::new("lintweave/imports/rules")
            .with_files(files)
            .with_plugin("import", plugin)
            .with_rules([
                ("import/consistent-type-specifier-style", RuleSetting::error().with_option(json!("top-level"))),
                ("import/first", RuleSetting::error()),
                ("import/no-duplicates", RuleSetting::error()),
                ("import/no-mutable-exports", RuleSetting::error()),
                ("import/no-named-default", RuleSetting::error()),
            ])
            .with_rules(settings.overrides)])
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producers::test_support::{context, names};
    use futures::executor::block_on;

    #[test]
    fn produces_rules_when_companion_resolves() {
        let ctx = context(COMPANIONS);

        let fragments = block_on(imports(ctx, FeatureSettings::default())).unwrap();

        assert_eq!(names(&fragments), vec!["lintweave/imports/rules"]);
        assert!(fragments[0].plugins.contains_key("import"));
    }

    #[test]
    fn falls_back_to_setup_anchor() {
        let fragments = block_on(imports(context(&[]), FeatureSettings::default())).unwrap();

        assert_eq!(names(&fragments), vec!["lintweave/imports/setup"]);
    }
}
