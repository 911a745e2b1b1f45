//! Core JavaScript rules. Needs no companion: the rules ship with the host
//! engine.

use super::FeatureSettings;
use crate::fragment::{Fragment, LanguageBinding, RuleSetting};
use serde_json::json;

/// Rules every JavaScript-family file gets.
pub fn javascript(settings: &FeatureSettings) -> Vec<Fragment> {
    let mut fragment = Fragment::new("lintweave/javascript/rules")
        .with_language(
            LanguageBinding::default()
                .with_option("ecmaVersion", json!("latest"))
                .with_option("sourceType", json!("module")),
        )
        .with_rules(base_rules())
        .with_rules(settings.overrides.clone());
    if let Some(files) = &settings.files {
        fragment.files = files.clone();
    }
    vec![fragment]
}

fn base_rules() -> Vec<(&'static str, RuleSetting)> {
    vec![
        ("eqeqeq", RuleSetting::error().with_option(json!("smart"))),
        ("no-debugger", RuleSetting::error()),
        ("no-dupe-keys", RuleSetting::error()),
        ("no-duplicate-case", RuleSetting::error()),
        ("no-empty-pattern", RuleSetting::error()),
        ("no-undef", RuleSetting::error()),
        ("no-unreachable", RuleSetting::error()),
        (
            "no-unused-vars",
            RuleSetting::error().with_option(json!({
                "args": "none",
                "caughtErrors": "none",
                "ignoreRestSiblings": true,
                "vars": "all"
            })),
        ),
        ("no-var", RuleSetting::error()),
        ("prefer-const", RuleSetting::error()),
        ("no-console", RuleSetting::warn()),
    ]
}
