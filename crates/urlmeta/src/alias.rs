// Alias rewriting: substitute a matched pattern's captures into a
// target template.

use ahash::RandomState;
use indexmap::IndexMap;

use crate::error::MetaResult;
use crate::pattern::match_pattern;
use crate::validate::{ensure_pattern_like, ensure_url_like};

/// Alias rules: pattern -> target template, in declaration order. Each
/// `*` in the template is a splice point for the corresponding
/// positional capture of the pattern match.
pub type AliasMap = IndexMap<String, String, RandomState>;

/// Rewrite `url` through the first alias whose pattern fully matches.
///
/// The target template is split on `*` and re-joined with the match's
/// positional captures by index; a splice point with no corresponding
/// capture emits nothing. Returns the url unchanged when no alias
/// matches.
pub fn apply_aliases(url: &str, aliases: &AliasMap) -> MetaResult<String> {
    ensure_url_like(url, "url")?;
    for (pattern, template) in aliases {
        ensure_pattern_like(pattern)?;
        let result = match_pattern(pattern, url);
        if !result.matched {
            continue;
        }
        let captures: Vec<&str> = result.positional_captures().collect();
        let parts: Vec<&str> = template.split('*').collect();
        let mut rewritten = String::with_capacity(template.len());
        for (index, part) in parts.iter().enumerate() {
            rewritten.push_str(part);
            if index + 1 < parts.len()
                && let Some(capture) = captures.get(index)
            {
                rewritten.push_str(capture);
            }
        }
        log::trace!("alias {pattern} rewrote {url} -> {rewritten}");
        return Ok(rewritten);
    }
    Ok(url.to_string())
}
