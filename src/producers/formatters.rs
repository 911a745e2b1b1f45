//! External formatters for files the host engine cannot parse natively.
//!
//! Runs last among built-ins so formatting rules see every language binding
//! made before them.

use serde_json::json;

use super::globs::{GLOB_CSS, GLOB_HTML, GLOB_LESS, GLOB_POSTCSS, GLOB_SCSS};
use super::{setup_anchor, with_companions, FeatureSettings, ProducerContext};
use crate::error::Result;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};

pub const COMPANIONS: &[&str] = &["eslint-plugin-format"];

const FORMAT_PARSER: &str = "format/parser";

pub async fn formatters(ctx: ProducerContext, settings: FeatureSettings) -> Result<Vec<Fragment>> {
    let css_files = settings.files_or(&[GLOB_CSS, GLOB_POSTCSS, GLOB_LESS, GLOB_SCSS]);
    let loader = ctx.loader.clone();
    let mut anchor_files = css_files.clone();
    anchor_files.push(GLOB_HTML.to_string());

    with_companions(&ctx, COMPANIONS, setup_anchor("formatters", anchor_files), move || {
        let plugin = loader.load(COMPANIONS[0])?;
        Ok(vec![
            Fragment::new("lintweave/formatters/setup").with_plugin("format", plugin),
            Fragment::new("lintweave/formatters/css")
                .with_files(css_files)
                .with_language(LanguageBinding::parser(FORMAT_PARSER))
                .with_rule("format/prettier", prettier("css"))
                .with_rules(settings.overrides.clone()),
            Fragment::new("lintweave/formatters/html")
                .with_files([GLOB_HTML])
                .with_language(LanguageBinding::parser(FORMAT_PARSER))
                .with_rule("format/prettier", prettier("html"))
                .with_rules(settings.overrides),
        ])
    })
    .await
}

fn prettier(parser: &str) -> RuleSetting {
    RuleSetting::error().with_option(json!({
        "parser": parser,
        "printWidth": 120,
        "singleQuote": true,
        "endOfLine": "auto"
    }))
}
