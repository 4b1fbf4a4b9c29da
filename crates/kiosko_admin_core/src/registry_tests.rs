//! Unit tests for the dependency registry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::Registry;

struct Alpha(&'static str);
struct Beta(&'static str);

#[test]
fn resolving_twice_returns_the_same_instance() {
    let registry = Registry::new();

    let first = registry.resolve(|| Alpha("shared"));
    let second = registry.resolve(|| Alpha("ignored"));

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.0, "shared");
}

#[test]
fn factory_runs_only_once() {
    let registry = Registry::new();
    let runs = AtomicUsize::new(0);

    for _ in 0..3 {
        registry.resolve(|| {
            runs.fetch_add(1, Ordering::SeqCst);
            Alpha("counted")
        });
    }

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn distinct_types_resolve_to_distinct_instances() {
    let registry = Registry::new();

    let alpha = registry.resolve(|| Alpha("a"));
    let beta = registry.resolve(|| Beta("b"));

    assert_eq!(alpha.0, "a");
    assert_eq!(beta.0, "b");
}

#[test]
fn factories_may_resolve_their_own_dependencies() {
    let registry = Registry::new();

    let beta = registry.resolve(|| {
        let alpha = registry.resolve(|| Alpha("inner"));
        Beta(alpha.0)
    });

    assert_eq!(beta.0, "inner");
    // The nested resolution registered Alpha as well.
    let alpha = registry.resolve(|| Alpha("ignored"));
    assert_eq!(alpha.0, "inner");
}

#[test]
fn fresh_registries_are_isolated() {
    let first = Registry::new();
    let second = Registry::new();

    let a = first.resolve(|| Alpha("first"));
    let b = second.resolve(|| Alpha("second"));

    assert_eq!(a.0, "first");
    assert_eq!(b.0, "second");
}
