// Backtracking scan resolving where a wildcard's remainder resumes.
//
// Tries the remaining pattern at every position of the url remainder,
// one char at a time, returning on the first success. Failed attempts
// are ranked by how far they progressed into the pattern; when nothing
// ever succeeds the furthest attempt is returned so callers can report
// how far matching got.

use super::capture::{Capture, MatchResult};
use super::engine::match_pattern;

/// Outcome of a skip-search, relative to the url slice it scanned.
pub(crate) struct SkipResult {
    pub(crate) matched: bool,
    /// Pattern byte progress of the (winning or furthest) attempt.
    pub(crate) pattern_index: usize,
    /// Url byte progress: skipped prefix plus the attempt's own progress.
    pub(crate) url_index: usize,
    /// Captures produced by the attempt.
    pub(crate) captures: Vec<Capture>,
    /// The skipped prefix. Consumers matching a single `*` turn this
    /// into the wildcard's capture; `**` consumers discard it.
    pub(crate) skipped: String,
}

/// Scan `url` for the first position where `pattern` matches.
///
/// With `can_skip_slash` false the scan stops dead when it sits on a
/// `/`. With it true slashes may be crossed, but once the scan crosses
/// the last `/` of the remainder, the position just after it is the
/// final attempt, succeed or fail.
pub(crate) fn skip_until_match(pattern: &str, url: &str, can_skip_slash: bool) -> SkipResult {
    let attempt = match_pattern(pattern, url);
    if attempt.matched {
        return success(0, attempt, url);
    }
    let mut best_offset = 0;
    let mut best = attempt;
    let mut index = 0;
    let mut last_attempt = false;
    loop {
        if last_attempt {
            break;
        }
        let remaining = &url[index..];
        let Some(step) = remaining.chars().next() else {
            break;
        };
        if step == '/' {
            if !can_skip_slash {
                break;
            }
            if !remaining[1..].contains('/') {
                last_attempt = true;
            }
        }
        let next = index + step.len_utf8();
        if next >= url.len() {
            break;
        }
        index = next;
        let attempt = match_pattern(pattern, &url[index..]);
        if attempt.matched {
            return success(index, attempt, url);
        }
        if attempt.pattern_index > best.pattern_index {
            best_offset = index;
            best = attempt;
        }
    }
    SkipResult {
        matched: false,
        pattern_index: best.pattern_index,
        url_index: best_offset + best.url_index,
        captures: best.captures,
        skipped: url[..best_offset].to_string(),
    }
}

fn success(skipped_len: usize, attempt: MatchResult, url: &str) -> SkipResult {
    SkipResult {
        matched: true,
        pattern_index: attempt.pattern_index,
        url_index: skipped_len + attempt.url_index,
        captures: attempt.captures,
        skipped: url[..skipped_len].to_string(),
    }
}
