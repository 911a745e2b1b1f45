//! Fragment override semantics.
//!
//! Overriding a fragment merges a patch fragment into it. Later patches
//! override earlier ones at the point of conflict.
//!
//! # Merge Rules
//!
//! - `name`, `files`, `ignores` are replaced when the patch sets them
//! - `plugins` and `rules` are merged key by key, the patch winning
//! - `language.parser` / `language.language` are replaced when set
//! - `language.options` merge recursively (objects merge, arrays and
//!   scalars are replaced, `null` in the patch deletes the key)

use serde_json::Value;

use super::types::{Fragment, LanguageBinding};

/// Merge `patch` into `base`, returning a new fragment.
pub fn merge_fragment(base: &Fragment, patch: &Fragment) -> Fragment {
    let mut merged = base.clone();

    if !patch.name.is_empty() {
        merged.name = patch.name.clone();
    }
    if !patch.files.is_empty() {
        merged.files = patch.files.clone();
    }
    if !patch.ignores.is_empty() {
        merged.ignores = patch.ignores.clone();
    }

    for (namespace, plugin) in &patch.plugins {
        merged.plugins.insert(namespace.clone(), plugin.clone());
    }

    merged.language = match (&base.language, &patch.language) {
        (Some(base_lang), Some(patch_lang)) => Some(merge_language(base_lang, patch_lang)),
        (None, Some(patch_lang)) => Some(patch_lang.clone()),
        (base_lang, None) => base_lang.clone(),
    };

    for (id, setting) in &patch.rules {
        merged.rules.insert(id.clone(), setting.clone());
    }

    merged
}

/// Merge fragments in order (later overrides earlier).
///
/// Returns `None` for an empty slice.
pub fn merge_fragments(fragments: &[Fragment]) -> Option<Fragment> {
    let (first, rest) = fragments.split_first()?;
    Some(
        rest.iter()
            .fold(first.clone(), |acc, patch| merge_fragment(&acc, patch)),
    )
}

fn merge_language(base: &LanguageBinding, patch: &LanguageBinding) -> LanguageBinding {
    let options = deep_merge(
        &Value::Object(base.options.clone()),
        &Value::Object(patch.options.clone()),
    );
    LanguageBinding {
        parser: patch.parser.clone().or_else(|| base.parser.clone()),
        language: patch.language.clone().or_else(|| base.language.clone()),
        options: match options {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        },
    }
}

/// Deep merge two JSON values.
///
/// Objects are merged recursively, anything else in `overlay` replaces
/// `base`, and `null` in an overlay object deletes the key.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Object(result)
        }
        (_, overlay) => overlay.clone(),
    }
}
