//! Integration tests for the composer public API.

use std::thread;
use std::time::Duration;

use futures::channel::oneshot;
use futures::executor::block_on;
use lintweave::composer::{Batch, Composer};
use lintweave::fragment::{Fragment, RuleSetting};
use lintweave::LintweaveError;

fn names(fragments: &[Fragment]) -> Vec<&str> {
    fragments.iter().map(|f| f.name.as_str()).collect()
}

/// A pending batch completed by a sender fired from another thread.
fn delayed(fragments: Vec<Fragment>, delay: Duration) -> Batch {
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        thread::sleep(delay);
        tx.send(fragments).ok();
    });
    Batch::pending(async move {
        rx.await
            .map_err(|e| LintweaveError::Other(anyhow::anyhow!("sender dropped: {}", e)))
    })
}

#[test]
fn completion_order_never_leaks_into_output_order() {
    let mut composer = Composer::new();
    composer.append([
        delayed(vec![Fragment::new("slow")], Duration::from_millis(80)),
        Batch::from(Fragment::new("resolved")),
        delayed(vec![Fragment::new("fast-a"), Fragment::new("fast-b")], Duration::ZERO),
    ]);

    let fragments = block_on(composer.flatten()).unwrap();

    assert_eq!(names(&fragments), ["slow", "resolved", "fast-a", "fast-b"]);
}

#[test]
fn insert_after_finds_anchor_defined_by_pending_batch() {
    let mut composer = Composer::new();
    composer
        .append([
            delayed(vec![Fragment::new("yaml/setup")], Duration::from_millis(20)),
            Batch::from(Fragment::new("user")),
        ])
        .insert_after("yaml/setup", [Fragment::new("yaml/extra")]);

    let fragments = block_on(composer.flatten()).unwrap();

    assert_eq!(names(&fragments), ["yaml/setup", "yaml/extra", "user"]);
}

#[test]
fn missing_anchor_fails_flatten() {
    let mut composer = Composer::new();
    composer
        .append([Fragment::new("base")])
        .insert_after("nowhere", [Fragment::new("orphan")]);

    let err = block_on(composer.flatten()).unwrap_err();

    assert!(matches!(
        err,
        LintweaveError::AnchorNotFound { ref name, .. } if name == "nowhere"
    ));
}

#[test]
fn pending_failure_propagates() {
    let mut composer = Composer::new();
    composer.append([Batch::pending(async {
        Err::<Vec<Fragment>, _>(LintweaveError::InvalidOptions {
            message: "boom".to_string(),
        })
    })]);

    assert!(block_on(composer.flatten()).is_err());
}

#[test]
fn edits_apply_in_call_order() {
    let mut composer = Composer::new();
    composer
        .append([Fragment::new("base").with_rule("no-var", RuleSetting::error())])
        .rename("base", "core")
        .override_fragment(
            "core",
            Fragment::new("core").with_rule("eqeqeq", RuleSetting::warn()),
        )
        .remove_rules(["no-var"]);

    let fragments = block_on(composer.flatten()).unwrap();

    assert_eq!(names(&fragments), ["core"]);
    assert!(fragments[0].rules.contains_key("eqeqeq"));
    assert!(!fragments[0].rules.contains_key("no-var"));
}
