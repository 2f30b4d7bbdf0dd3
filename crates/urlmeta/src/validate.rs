// Url-likeness checks run before any matching work.
//
// A value qualifies when it carries a `scheme:` prefix and is not a
// windows pathname look-alike. Both checks are anchored prefixes, so
// plain byte tests are enough.

use crate::error::{MetaResult, UrlFault, UrlMetaError};

/// Asserts that `value` is url-like. `name` labels the argument in the
/// error message (`"url"`, `"base url"`, ...).
pub fn ensure_url_like(value: &str, name: &'static str) -> MetaResult<()> {
    match url_fault(value) {
        None => Ok(()),
        Some(reason) => Err(UrlMetaError::InvalidUrl {
            name,
            reason,
            value: value.to_string(),
        }),
    }
}

/// Same checks as [`ensure_url_like`], reported as an invalid pattern.
pub(crate) fn ensure_pattern_like(pattern: &str) -> MetaResult<()> {
    match url_fault(pattern) {
        None => Ok(()),
        Some(reason) => Err(UrlMetaError::InvalidPattern {
            reason,
            value: pattern.to_string(),
        }),
    }
}

fn url_fault(value: &str) -> Option<UrlFault> {
    if looks_like_windows_pathname(value) {
        return Some(UrlFault::WindowsPathname);
    }
    if !has_scheme(value) {
        return Some(UrlFault::MissingScheme);
    }
    None
}

/// `X:/` or `X:\` where X is a single ascii letter.
fn looks_like_windows_pathname(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'/' | b'\\')
}

/// At least one ascii letter followed by `:`.
fn has_scheme(value: &str) -> bool {
    let Some(colon) = value.find(':') else {
        return false;
    };
    colon > 0 && value.as_bytes()[..colon].iter().all(u8::is_ascii_alphabetic)
}
