// Url pattern matching - a small glob-like language over absolute urls
//
// Tokens: literals (byte-for-byte), `*` (one path segment span), `**`
// (across segments, optionally eating a following `/`), a trailing `/`
// (matches the `/` and captures everything after it). A query string in
// the url is tolerated wherever the pattern ends.
//
// 1. No parse phase - the pattern string is interpreted during matching
// 2. Explicit MatchCursor with byte offsets, no hidden state
// 3. Backtracking skip-search resolves wildcard continuations and keeps
//    the furthest partial attempt for failure reporting
// 4. Worst case is quadratic per wildcard; the tie-break behavior of the
//    scan is part of the observable contract and must stay as is

mod capture;
mod engine;
mod skip;

pub use capture::{Capture, MatchResult};
pub use engine::match_pattern;
