// Core matching engine - direct interpretation, no AST
//
// The pattern string is walked with byte offsets (like C pointers), one
// decision step at a time:
// - MatchCursor holds both offsets and hands out the unconsumed slices
// - match_one evaluates exactly one step rule against the remaining
//   pattern/url and reports Matched, Failed or Inconclusive
// - match_pattern loops: Inconclusive advances one char on both sides,
//   anything else concludes
//
// A failed step normally rewinds the cursor to where the step started,
// so the reported offsets mark the deepest point reached by agreement,
// not partial consumption inside the failing step. Steps that delegated
// to the skip-search keep their consumption instead (restore_offsets is
// cleared), because the skip result already encodes the deepest attempt.

use super::capture::{Capture, MatchResult};
use super::skip::skip_until_match;

/// Explicit pattern/url offsets threaded through the step function.
pub(crate) struct MatchCursor<'a> {
    pattern: &'a str,
    url: &'a str,
    pub(crate) pattern_index: usize,
    pub(crate) url_index: usize,
}

impl<'a> MatchCursor<'a> {
    fn new(pattern: &'a str, url: &'a str) -> Self {
        Self {
            pattern,
            url,
            pattern_index: 0,
            url_index: 0,
        }
    }

    fn remaining_pattern(&self) -> &'a str {
        &self.pattern[self.pattern_index..]
    }

    fn remaining_url(&self) -> &'a str {
        &self.url[self.url_index..]
    }

    fn consume_pattern(&mut self, count: usize) {
        self.pattern_index += count;
    }

    fn consume_url(&mut self, count: usize) {
        self.url_index += count;
    }

    fn consume_rest_of_url(&mut self) {
        self.url_index = self.url.len();
    }

    /// Advance one char on both sides. Only called after an inconclusive
    /// step, where both sides start with the same char.
    fn advance_both(&mut self) {
        if let Some(c) = self.remaining_pattern().chars().next() {
            self.pattern_index += c.len_utf8();
        }
        if let Some(c) = self.remaining_url().chars().next() {
            self.url_index += c.len_utf8();
        }
    }
}

/// Result of one decision step.
enum StepOutcome {
    Matched,
    Failed,
    /// Plain literal agreement; the outer loop advances and re-evaluates.
    Inconclusive,
}

/// Match `pattern` against `url`.
///
/// Total: every input yields a well-formed [`MatchResult`], possibly
/// with `matched = false`. Inputs are not validated here; the
/// association-level operations run the validator first.
///
/// Pattern tokens: `*` matches a run of chars excluding `/`, `**`
/// matches across path segments, a trailing `/` matches a literal `/`
/// and captures everything after it, a `?` starting the unmatched url
/// remainder (a query string) is always accepted. Everything else
/// matches byte for byte.
pub fn match_pattern(pattern: &str, url: &str) -> MatchResult {
    let mut cursor = MatchCursor::new(pattern, url);
    let mut captures = Vec::new();
    let mut restore_offsets = true;
    loop {
        let pattern_mark = cursor.pattern_index;
        let url_mark = cursor.url_index;
        match match_one(&mut cursor, &mut captures, &mut restore_offsets) {
            StepOutcome::Inconclusive => cursor.advance_both(),
            StepOutcome::Matched => {
                return MatchResult {
                    matched: true,
                    pattern_index: cursor.pattern_index,
                    url_index: cursor.url_index,
                    captures,
                };
            }
            StepOutcome::Failed => {
                if restore_offsets {
                    cursor.pattern_index = pattern_mark;
                    cursor.url_index = url_mark;
                }
                return MatchResult {
                    matched: false,
                    pattern_index: cursor.pattern_index,
                    url_index: cursor.url_index,
                    captures,
                };
            }
        }
    }
}

/// One decision step. Rules are evaluated in priority order against the
/// remaining pattern/url; earlier rules shadow later ones.
fn match_one(
    cursor: &mut MatchCursor<'_>,
    captures: &mut Vec<Capture>,
    restore_offsets: &mut bool,
) -> StepOutcome {
    // pattern consumed
    if cursor.remaining_pattern().is_empty() {
        if cursor.remaining_url().is_empty() {
            return StepOutcome::Matched;
        }
        if cursor.remaining_url().starts_with('?') {
            // a query string is always accepted as a match suffix
            cursor.consume_rest_of_url();
            return StepOutcome::Matched;
        }
        return StepOutcome::Failed; // url longer than pattern
    }
    // url consumed, pattern not
    if cursor.remaining_url().is_empty() {
        if cursor.remaining_pattern() == "**" {
            // trailing "**" is optional
            cursor.consume_pattern(2);
            return StepOutcome::Matched;
        }
        if cursor.remaining_pattern() == "*" {
            captures.push(Capture::positional(""));
        }
        return StepOutcome::Failed; // url shorter than pattern
    }
    // trailing slash captures the whole remainder
    if cursor.remaining_pattern() == "/" {
        if cursor.remaining_url().starts_with('/') {
            captures.push(Capture::positional(&cursor.remaining_url()[1..]));
            cursor.consume_pattern(1);
            cursor.consume_rest_of_url();
            return StepOutcome::Matched;
        }
        return StepOutcome::Failed;
    }
    // trailing "**" swallows the rest, no capture
    if cursor.remaining_pattern() == "**" {
        cursor.consume_pattern(2);
        cursor.consume_rest_of_url();
        return StepOutcome::Matched;
    }
    // "/**/" - consume "/**" and search where the "/..." remainder resumes
    if cursor.remaining_pattern().starts_with("/**/") {
        cursor.consume_pattern(3);
        let skip = skip_until_match(cursor.remaining_pattern(), cursor.remaining_url(), true);
        captures.extend(skip.captures);
        cursor.consume_pattern(skip.pattern_index);
        cursor.consume_rest_of_url();
        *restore_offsets = false;
        return if skip.matched {
            StepOutcome::Matched
        } else {
            StepOutcome::Failed
        };
    }
    // leading "**"
    if cursor.remaining_pattern().starts_with("**") {
        cursor.consume_pattern(2);
        let mut skip_allowed = true;
        if cursor.remaining_pattern().starts_with('/') {
            cursor.consume_pattern(1);
            // a "**/" that is not truly at a segment boundary must not
            // swallow a literal slash: when the url remainder still
            // contains one, fall back to regular matching
            if cursor.remaining_url().contains('/') {
                skip_allowed = false;
            }
        }
        if cursor.remaining_pattern().is_empty() {
            cursor.consume_rest_of_url();
            return StepOutcome::Matched;
        }
        if skip_allowed {
            let skip = skip_until_match(cursor.remaining_pattern(), cursor.remaining_url(), true);
            captures.extend(skip.captures);
            cursor.consume_pattern(skip.pattern_index);
            cursor.consume_rest_of_url();
            *restore_offsets = false;
            return if skip.matched {
                StepOutcome::Matched
            } else {
                StepOutcome::Failed
            };
        }
        // fall through to the literal rules without concluding
    }
    // single "*"
    if cursor.remaining_pattern().starts_with('*') {
        cursor.consume_pattern(1);
        if cursor.remaining_pattern().is_empty() {
            // matches everything up to the next "/"
            return match cursor.remaining_url().find('/') {
                None => {
                    captures.push(Capture::positional(cursor.remaining_url()));
                    cursor.consume_rest_of_url();
                    StepOutcome::Matched
                }
                Some(slash) => {
                    captures.push(Capture::positional(&cursor.remaining_url()[..slash]));
                    StepOutcome::Failed // "*" may not cross a path segment
                }
            };
        }
        // greedy "*" must consume at least one char before the literal
        // continuation can match
        if cursor.remaining_pattern().chars().next() == cursor.remaining_url().chars().next() {
            captures.push(Capture::positional(""));
            return StepOutcome::Failed;
        }
        let skip = skip_until_match(cursor.remaining_pattern(), cursor.remaining_url(), false);
        captures.push(Capture::Positional(skip.skipped));
        captures.extend(skip.captures);
        cursor.consume_pattern(skip.pattern_index);
        cursor.consume_url(skip.url_index);
        *restore_offsets = false;
        return if skip.matched {
            StepOutcome::Matched
        } else {
            StepOutcome::Failed
        };
    }
    // literal comparison
    let pattern_char = cursor.remaining_pattern().chars().next();
    let url_char = cursor.remaining_url().chars().next();
    if pattern_char != url_char {
        return StepOutcome::Failed;
    }
    StepOutcome::Inconclusive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        assert!(match_pattern("file:///a.js", "file:///a.js").matched);
        assert!(!match_pattern("file:///a.js", "file:///a.jsx").matched);
        assert!(!match_pattern("file:///a.jsx", "file:///a.js").matched);
    }

    #[test]
    fn test_success_consumes_both_inputs() {
        let result = match_pattern("file:///a/**/b.js", "file:///a/x/y/b.js");
        assert!(result.matched);
        assert_eq!(result.pattern_index, "file:///a/**/b.js".len());
        assert_eq!(result.url_index, "file:///a/x/y/b.js".len());
    }

    #[test]
    fn test_failure_offsets_mark_deepest_agreement() {
        let result = match_pattern("file:///abc", "file:///abX");
        assert!(!result.matched);
        assert_eq!(result.pattern_index, 10);
        assert_eq!(result.url_index, 10);
    }

    #[test]
    fn test_multibyte_literals() {
        let result = match_pattern("file:///héllo/*.js", "file:///héllo/à.js");
        assert!(result.matched);
        assert_eq!(result.captures, vec![Capture::positional("à")]);
    }
}
