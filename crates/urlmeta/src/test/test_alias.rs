// Alias rewriting through pattern captures.
use crate::alias::{AliasMap, apply_aliases};
use crate::error::UrlMetaError;

fn aliases(entries: &[(&str, &str)]) -> AliasMap {
    entries
        .iter()
        .map(|(pattern, target)| (pattern.to_string(), target.to_string()))
        .collect()
}

#[test]
fn test_captures_splice_into_the_target_template() {
    let aliases = aliases(&[("file:///root/*/*.js", "file:///out/*-*.js")]);
    assert_eq!(
        apply_aliases("file:///root/a/b.js", &aliases).unwrap(),
        "file:///out/a-b.js"
    );
}

#[test]
fn test_trailing_slash_capture_feeds_the_template() {
    let aliases = aliases(&[("file:///lib/", "file:///vendor/*")]);
    assert_eq!(
        apply_aliases("file:///lib/x/y.js", &aliases).unwrap(),
        "file:///vendor/x/y.js"
    );
}

#[test]
fn test_first_matching_alias_wins() {
    let aliases = aliases(&[
        ("file:///a/*.js", "file:///first/*.js"),
        ("file:///**/*.js", "file:///second/*.js"),
    ]);
    assert_eq!(
        apply_aliases("file:///a/m.js", &aliases).unwrap(),
        "file:///first/m.js"
    );
}

#[test]
fn test_unmatched_url_passes_through() {
    let aliases = aliases(&[("file:///lib/*", "file:///vendor/*")]);
    assert_eq!(
        apply_aliases("file:///src/app.css", &aliases).unwrap(),
        "file:///src/app.css"
    );
}

#[test]
fn test_url_is_validated_first() {
    let aliases = aliases(&[("file:///lib/*", "file:///vendor/*")]);
    let err = apply_aliases("C:/lib/a", &aliases).unwrap_err();
    assert!(matches!(err, UrlMetaError::InvalidUrl { .. }));
}
