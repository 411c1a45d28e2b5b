//! Key namespacing tests

use nscache_domain::value_objects::{KeyPrefix, compose, with_prefix};

#[test]
fn test_full_namespace_composition() {
    let cases = [
        ("system", "app", "key"),
        ("kth", "profile", "user:42"),
        ("s", "a", "*"),
    ];

    for (system, app, key) in cases {
        let composite = compose(Some(system), Some(app));
        assert_eq!(
            with_prefix(&composite, key),
            format!("{system}:{app}:{key}"),
            "namespacing {system}/{app}/{key}"
        );
    }
}

#[test]
fn test_missing_segments_are_omitted() {
    assert_eq!(compose(None, Some("app")), "app");
    assert_eq!(compose(Some(""), Some("app")), "app");
    assert_eq!(compose(Some("system"), None), "system");
    assert_eq!(compose(Some("system"), Some("")), "system");
    assert_eq!(compose(None, None), "");
}

#[test]
fn test_empty_composite_leaves_key_unchanged() {
    assert_eq!(with_prefix("", "plain-key"), "plain-key");
}

#[test]
fn test_search_pattern() {
    let prefix = KeyPrefix::new(Some("test-system-key-prefix"), Some("test-key-prefix"));
    assert_eq!(
        prefix.search_pattern(),
        "test-system-key-prefix:test-key-prefix:*"
    );
    assert_eq!(prefix.to_string(), "test-system-key-prefix:test-key-prefix");
}

#[test]
fn test_keys_are_not_escaped() {
    let prefix = KeyPrefix::new(Some("sys"), Some("app"));
    assert_eq!(prefix.key("a*b?[c]"), "sys:app:a*b?[c]");
}
