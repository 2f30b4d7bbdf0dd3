// Boolean helpers: matches and the reusable filter.
use serde_json::json;

use crate::filter::{UrlFilter, create_filter, matches};
use crate::meta::{MetaMap, MetaValue, apply_associations};

fn patterns(value: serde_json::Value) -> MetaMap {
    match MetaValue::from(value) {
        MetaValue::Map(map) => map,
        MetaValue::Scalar(other) => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_matches_node_modules_end_to_end() {
    let patterns = patterns(json!({"file:///**/node_modules/": true}));
    assert!(matches("file:///root/node_modules/pkg/index.js", &patterns).unwrap());
    assert!(!matches("file:///root/src/index.js", &patterns).unwrap());
}

#[test]
fn test_matches_is_the_applicator_under_a_yes_category() {
    let patterns_value = json!({
        "file:///**": false,
        "file:///root/**/*.js": true,
    });
    for url in [
        "file:///root/a.js",
        "file:///root/deep/b.js",
        "file:///root/a.css",
        "file:///elsewhere/a.js",
    ] {
        let mut associations = MetaMap::default();
        associations.insert(
            "yes".to_string(),
            MetaValue::from(patterns_value.clone()),
        );
        let merged = apply_associations(url, &MetaValue::Map(associations)).unwrap();
        let by_hand = merged.get("yes").is_some_and(MetaValue::is_truthy);
        assert_eq!(
            matches(url, &patterns(patterns_value.clone())).unwrap(),
            by_hand,
            "identity broken for {url}"
        );
    }
}

#[test]
fn test_matches_respects_falsy_values() {
    let patterns = patterns(json!({"file:///**": 0}));
    assert!(!matches("file:///a.js", &patterns).unwrap());
}

#[test]
fn test_filter_resolves_relative_patterns_once() {
    let filter = create_filter(
        &patterns(json!({"./**/*.test.js": true})),
        "file:///root/",
    )
    .unwrap();
    assert!(filter.matches("file:///root/unit/a.test.js").unwrap());
    assert!(!filter.matches("file:///root/unit/a.js").unwrap());
    assert!(!filter.matches("file:///elsewhere/a.test.js").unwrap());
}

#[test]
fn test_filter_map_hook_sees_the_merged_value() {
    let filter = create_filter(
        &patterns(json!({"./**": {"chunk": "vendor"}})),
        "file:///root/",
    )
    .unwrap();
    let hit = filter
        .matches_with("file:///root/dep.js", |value| {
            value.and_then(|v| v.get("chunk")) == Some(&MetaValue::from("vendor"))
        })
        .unwrap();
    assert!(hit);

    let miss = filter
        .matches_with("file:///other/dep.js", |value| value.is_some())
        .unwrap();
    assert!(!miss);
}

#[test]
fn test_filter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UrlFilter>();
}
