// Skip-search edge cases: the rules worth pinning are the segment
// boundary guard on a leading "**/", the final-attempt cut-off after
// crossing the last slash, and the furthest-partial fallback offsets.
use crate::pattern::{Capture, match_pattern};

#[test]
fn test_inner_double_star_slash_cannot_swallow_a_literal_slash() {
    // after "**/" is consumed the url remainder still contains a "/",
    // so no skipping happens and the "b" must match in place
    assert!(!match_pattern("file:///a**/b", "file:///axy/b").matched);
}

#[test]
fn test_inner_double_star_slash_skips_when_no_slash_remains() {
    // remainder "xyb" has no "/", so the scan is allowed and the "/"
    // of the pattern is absorbed by "**"
    assert!(match_pattern("file:///a**/b", "file:///axyb").matched);
}

#[test]
fn test_double_star_slash_with_nothing_after_matches_anything() {
    assert!(match_pattern("a**/", "abc/d").matched);
    assert!(match_pattern("a**/", "abc").matched);
}

#[test]
fn test_position_after_last_slash_is_the_final_attempt() {
    // the scan crosses the last "/" and tries exactly one position
    // after it: "b" sits there, so this matches
    assert!(match_pattern("**b", "a/b").matched);
    // "e" is further inside the last segment; positions past the first
    // one are never tried
    assert!(!match_pattern("**e", "a/cde").matched);
    // without any slash, the scan walks the whole string
    assert!(match_pattern("**e", "abcde").matched);
}

#[test]
fn test_single_star_scan_stops_at_a_slash() {
    assert!(!match_pattern("file:///*.js", "file:///dir/a.js").matched);
}

#[test]
fn test_greedy_star_must_consume_before_the_continuation() {
    let result = match_pattern("file:///*a", "file:///aa");
    assert!(!result.matched);
    assert_eq!(result.captures, vec![Capture::positional("")]);

    assert!(match_pattern("file:///*a", "file:///xa").matched);
}

#[test]
fn test_failed_skip_reports_the_furthest_attempt() {
    // the attempt at "/b/" progresses the pattern furthest before the
    // final "c" diverges; the reported offsets come from that attempt
    let pattern = "file:///a/**/b/c";
    let result = match_pattern(pattern, "file:///a/x/b/X");
    assert!(!result.matched);
    assert_eq!(result.pattern_index, pattern.len() - 1);
    assert_eq!(result.url_index, "file:///a/x/b/X".len());
}

#[test]
fn test_failed_skip_keeps_the_attempt_captures() {
    // the furthest attempt got through "*" before failing, so its
    // captures survive into the failed result
    let result = match_pattern("file:///a/**/*.css", "file:///a/x/y.js");
    assert!(!result.matched);
    assert!(!result.captures.is_empty());
}
