//! The composer: an ordered sequence of fragment batches plus deferred
//! structural edits.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use super::batch::Batch;
use crate::error::{LintweaveError, Result};
use crate::fragment::{merge_fragment, Fragment};

type FragmentMap = Box<dyn FnOnce(Fragment) -> Fragment + Send>;

/// A structural edit queued until flatten time.
enum Edit {
    InsertAfter { anchor: String, batches: Vec<Batch> },
    InsertBefore { anchor: String, batches: Vec<Batch> },
    Override { name: String, patch: Fragment },
    OverrideWith { name: String, map: FragmentMap },
    Remove { name: String },
    Rename { from: String, to: String },
    RemoveRules { ids: Vec<String> },
    RenamePlugins { renames: BTreeMap<String, String> },
}

/// Ordered collection of fragment batches.
///
/// `append` and `prepend` place batches immediately. Every name-keyed edit
/// is queued and applied at [`flatten`](Composer::flatten) time, in call
/// order, after all batches resolved, so anchors defined by pending
/// batches are found.
#[derive(Default)]
pub struct Composer {
    batches: Vec<Batch>,
    edits: Vec<Edit>,
}

impl Composer {
    /// Create an empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add batches to the end of the sequence.
    pub fn append<I, B>(&mut self, batches: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Batch>,
    {
        self.batches.extend(batches.into_iter().map(Into::into));
        self
    }

    /// Add batches to the front of the sequence, keeping their order.
    pub fn prepend<I, B>(&mut self, batches: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Batch>,
    {
        let front: Vec<Batch> = batches.into_iter().map(Into::into).collect();
        self.batches.splice(0..0, front);
        self
    }

    /// Insert batches right after the first batch whose first fragment is
    /// named `anchor`.
    pub fn insert_after<I, B>(&mut self, anchor: impl Into<String>, batches: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Batch>,
    {
        self.edits.push(Edit::InsertAfter {
            anchor: anchor.into(),
            batches: batches.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Insert batches right before the first batch whose first fragment is
    /// named `anchor`.
    pub fn insert_before<I, B>(&mut self, anchor: impl Into<String>, batches: I) -> &mut Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Batch>,
    {
        self.edits.push(Edit::InsertBefore {
            anchor: anchor.into(),
            batches: batches.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Merge `patch` into the fragment named `name`.
    pub fn override_fragment(&mut self, name: impl Into<String>, patch: Fragment) -> &mut Self {
        self.edits.push(Edit::Override {
            name: name.into(),
            patch,
        });
        self
    }

    /// Replace the fragment named `name` with `map(fragment)`.
    pub fn override_with<F>(&mut self, name: impl Into<String>, map: F) -> &mut Self
    where
        F: FnOnce(Fragment) -> Fragment + Send + 'static,
    {
        self.edits.push(Edit::OverrideWith {
            name: name.into(),
            map: Box::new(map),
        });
        self
    }

    /// Drop the fragment named `name`.
    pub fn remove(&mut self, name: impl Into<String>) -> &mut Self {
        self.edits.push(Edit::Remove { name: name.into() });
        self
    }

    /// Rename the fragment named `from`.
    pub fn rename(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edits.push(Edit::Rename {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Delete rule settings from every fragment.
    pub fn remove_rules<I, S>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edits.push(Edit::RemoveRules {
            ids: ids.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Rename plugin namespaces, and the rule prefixes that use them, in
    /// every fragment.
    pub fn rename_plugins<I, K, V>(&mut self, renames: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.edits.push(Edit::RenamePlugins {
            renames: renames
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        });
        self
    }

    /// Number of batches placed so far. Queued inserts and edits are not
    /// batches until [`flatten`](Self::flatten) applies them.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether no batch has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Resolve every batch in sequence order, apply queued edits, and
    /// return the ordered fragment list.
    ///
    /// Pending batches are awaited one after another in their position, so
    /// completion timing never leaks into output order.
    pub async fn flatten(self) -> Result<Vec<Fragment>> {
        let mut resolved = Vec::with_capacity(self.batches.len());
        for batch in self.batches {
            resolved.push(batch.resolve().await?);
        }

        for edit in self.edits {
            apply(edit, &mut resolved).await?;
        }

        let fragments: Vec<Fragment> = resolved.into_iter().flatten().collect();
        warn_duplicate_names(&fragments);
        debug!(count = fragments.len(), "Flattened composed fragments");
        Ok(fragments)
    }
}

async fn apply(edit: Edit, batches: &mut Vec<Vec<Fragment>>) -> Result<()> {
    match edit {
        Edit::InsertAfter { anchor, batches: new } => {
            let index = anchor_index(batches, &anchor, "insert_after")?;
            insert_resolved(batches, index + 1, new).await
        }
        Edit::InsertBefore { anchor, batches: new } => {
            let index = anchor_index(batches, &anchor, "insert_before")?;
            insert_resolved(batches, index, new).await
        }
        Edit::Override { name, patch } => {
            let slot = fragment_mut(batches, &name, "override")?;
            *slot = merge_fragment(slot, &patch);
            Ok(())
        }
        Edit::OverrideWith { name, map } => {
            let slot = fragment_mut(batches, &name, "override_with")?;
            *slot = map(std::mem::take(slot));
            Ok(())
        }
        Edit::Remove { name } => {
            let (batch, position) = fragment_position(batches, &name, "remove")?;
            batches[batch].remove(position);
            Ok(())
        }
        Edit::Rename { from, to } => {
            let slot = fragment_mut(batches, &from, "rename")?;
            *slot = Fragment {
                name: to,
                ..slot.clone()
            };
            Ok(())
        }
        Edit::RemoveRules { ids } => {
            for fragment in batches.iter_mut().flatten() {
                if ids.iter().any(|id| fragment.rules.contains_key(id)) {
                    let mut next = fragment.clone();
                    for id in &ids {
                        next.rules.remove(id);
                    }
                    *fragment = next;
                }
            }
            Ok(())
        }
        Edit::RenamePlugins { renames } => {
            for fragment in batches.iter_mut().flatten() {
                *fragment = rename_plugins(fragment, &renames);
            }
            Ok(())
        }
    }
}

fn anchor_index(batches: &[Vec<Fragment>], anchor: &str, operation: &str) -> Result<usize> {
    batches
        .iter()
        .position(|batch| batch.first().is_some_and(|f| f.name == anchor))
        .ok_or_else(|| LintweaveError::AnchorNotFound {
            name: anchor.to_string(),
            operation: operation.to_string(),
        })
}

async fn insert_resolved(
    batches: &mut Vec<Vec<Fragment>>,
    index: usize,
    new: Vec<Batch>,
) -> Result<()> {
    let mut resolved = Vec::with_capacity(new.len());
    for batch in new {
        resolved.push(batch.resolve().await?);
    }
    batches.splice(index..index, resolved);
    Ok(())
}

fn fragment_position(
    batches: &[Vec<Fragment>],
    name: &str,
    operation: &str,
) -> Result<(usize, usize)> {
    batches
        .iter()
        .enumerate()
        .find_map(|(b, batch)| {
            batch
                .iter()
                .position(|f| f.name == name)
                .map(|position| (b, position))
        })
        .ok_or_else(|| LintweaveError::AnchorNotFound {
            name: name.to_string(),
            operation: operation.to_string(),
        })
}

fn fragment_mut<'a>(
    batches: &'a mut [Vec<Fragment>],
    name: &str,
    operation: &str,
) -> Result<&'a mut Fragment> {
    let (batch, position) = fragment_position(batches, name, operation)?;
    Ok(&mut batches[batch][position])
}

fn rename_plugins(fragment: &Fragment, renames: &BTreeMap<String, String>) -> Fragment {
    let rename_rule = |id: &str| -> String {
        match id.split_once('/') {
            Some((namespace, rest)) => match renames.get(namespace) {
                Some(to) => format!("{}/{}", to, rest),
                None => id.to_string(),
            },
            None => id.to_string(),
        }
    };

    Fragment {
        plugins: fragment
            .plugins
            .iter()
            .map(|(namespace, plugin)| {
                let namespace = renames.get(namespace).unwrap_or(namespace).clone();
                (namespace, plugin.clone())
            })
            .collect(),
        rules: fragment
            .rules
            .iter()
            .map(|(id, setting)| (rename_rule(id), setting.clone()))
            .collect(),
        ..fragment.clone()
    }
}

fn warn_duplicate_names(fragments: &[Fragment]) {
    let mut seen = HashSet::new();
    for fragment in fragments {
        if !fragment.name.is_empty() && !seen.insert(fragment.name.as_str()) {
            warn!(name = %fragment.name, "Fragment name appears more than once");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{ExternalPlugin, RuleSetting};
    use futures::executor::block_on;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn names(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.name.as_str()).collect()
    }

    fn flatten(composer: Composer) -> Result<Vec<Fragment>> {
        block_on(composer.flatten())
    }

    #[test]
    fn append_preserves_order() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a")])
            .append([vec![Fragment::new("b"), Fragment::new("c")]])
            .append([Fragment::new("d")]);

        let fragments = flatten(composer).unwrap();

        assert_eq!(names(&fragments), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn len_and_is_empty_count_placed_batches_only() {
        let mut composer = Composer::new();
        composer.insert_after("a", [Fragment::new("b")]).remove("a");

        assert_eq!(composer.len(), 0);
        assert!(composer.is_empty());

        composer.append([Fragment::new("a")]);

        assert_eq!(composer.len(), 1);
        assert!(!composer.is_empty());
    }

    #[test]
    fn prepend_goes_first() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("b")])
            .prepend([Fragment::new("a0"), Fragment::new("a1")]);

        assert_eq!(names(&flatten(composer).unwrap()), vec!["a0", "a1", "b"]);
    }

    #[test]
    fn insert_after_places_batches_behind_anchor() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a"), Fragment::new("c")])
            .insert_after("a", [Fragment::new("b")]);

        assert_eq!(names(&flatten(composer).unwrap()), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_after_resolves_anchor_appended_later() {
        let mut composer = Composer::new();
        composer
            .insert_after("late", [Fragment::new("x")])
            .append([Fragment::new("early"), Fragment::new("late")]);

        assert_eq!(names(&flatten(composer).unwrap()), vec!["early", "late", "x"]);
    }

    #[test]
    fn insert_after_matches_first_fragment_of_batch_only() {
        let mut composer = Composer::new();
        composer
            .append([vec![Fragment::new("a"), Fragment::new("b")]])
            .insert_after("b", [Fragment::new("x")]);

        let err = flatten(composer).unwrap_err();

        assert!(matches!(err, LintweaveError::AnchorNotFound { ref name, .. } if name == "b"));
    }

    #[test]
    fn duplicate_anchor_uses_first_match() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("dup"), Fragment::new("mid"), Fragment::new("dup")])
            .insert_after("dup", [Fragment::new("x")]);

        assert_eq!(
            names(&flatten(composer).unwrap()),
            vec!["dup", "x", "mid", "dup"]
        );
    }

    #[test]
    fn insert_before_places_batches_ahead_of_anchor() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a"), Fragment::new("c")])
            .insert_before("c", [Fragment::new("b")]);

        assert_eq!(names(&flatten(composer).unwrap()), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_anchor_fails_at_flatten() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a")])
            .insert_after("nope", [Fragment::new("x")]);

        let err = flatten(composer).unwrap_err();

        assert!(err.to_string().contains("nope"));
        assert!(err.to_string().contains("insert_after"));
    }

    #[test]
    fn override_merges_into_named_fragment() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a").with_rule("no-var", RuleSetting::error())])
            .override_fragment("a", Fragment::default().with_rule("eqeqeq", RuleSetting::warn()))
            .override_fragment("a", Fragment::default().with_rule("no-var", RuleSetting::off()));

        let fragments = flatten(composer).unwrap();

        assert_eq!(fragments[0].rules["no-var"], RuleSetting::off());
        assert_eq!(fragments[0].rules["eqeqeq"], RuleSetting::warn());
    }

    #[test]
    fn override_with_maps_fragment() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a")])
            .override_with("a", |fragment| fragment.with_files(["**/*.vue"]));

        let fragments = flatten(composer).unwrap();

        assert_eq!(fragments[0].files, vec!["**/*.vue"]);
    }

    #[test]
    fn override_does_not_touch_other_lists() {
        let shared = Fragment::new("a").with_rule("no-var", RuleSetting::error());
        let mut composer = Composer::new();
        composer
            .append([shared.clone()])
            .override_fragment("a", Fragment::default().with_rule("no-var", RuleSetting::off()));

        let _ = flatten(composer).unwrap();

        assert_eq!(shared.rules["no-var"], RuleSetting::error());
    }

    #[test]
    fn remove_and_rename() {
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("a"), Fragment::new("b"), Fragment::new("c")])
            .remove("b")
            .rename("c", "z");

        assert_eq!(names(&flatten(composer).unwrap()), vec!["a", "z"]);
    }

    #[test]
    fn remove_unknown_fragment_fails() {
        let mut composer = Composer::new();
        composer.append([Fragment::new("a")]).remove("ghost");

        assert!(flatten(composer).is_err());
    }

    #[test]
    fn remove_rules_clears_ids_everywhere() {
        let mut composer = Composer::new();
        composer
            .append([
                Fragment::new("a").with_rule("no-console", RuleSetting::warn()),
                Fragment::new("b")
                    .with_rule("no-console", RuleSetting::error())
                    .with_rule("no-var", RuleSetting::error()),
            ])
            .remove_rules(["no-console"]);

        let fragments = flatten(composer).unwrap();

        assert!(fragments[0].rules.is_empty());
        assert_eq!(fragments[1].rules.len(), 1);
    }

    #[test]
    fn rename_plugins_rewrites_namespaces_and_rules() {
        let plugin = Arc::new(ExternalPlugin {
            package: "@typescript-eslint/eslint-plugin".into(),
            location: PathBuf::from("/x"),
        });
        let mut composer = Composer::new();
        composer
            .append([Fragment::new("ts")
                .with_plugin("@typescript-eslint", plugin)
                .with_rule("@typescript-eslint/no-explicit-any", RuleSetting::warn())
                .with_rule("no-var", RuleSetting::error())])
            .rename_plugins([("@typescript-eslint", "ts")]);

        let fragments = flatten(composer).unwrap();

        assert!(fragments[0].plugins.contains_key("ts"));
        assert!(fragments[0].rules.contains_key("ts/no-explicit-any"));
        assert!(fragments[0].rules.contains_key("no-var"));
    }

    #[test]
    fn producer_error_aborts_flatten() {
        let mut composer = Composer::new();
        composer.append([
            Batch::from(Fragment::new("a")),
            Batch::pending(async {
                Err(LintweaveError::InvalidOptions {
                    message: "broken producer".into(),
                })
            }),
        ]);

        let err = flatten(composer).unwrap_err();

        assert!(err.to_string().contains("broken producer"));
    }
}
