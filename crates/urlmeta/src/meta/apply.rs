// Applying associations to concrete urls.

use super::associations::flatten_associations;
use super::value::{MetaMap, MetaValue, deep_assign_map};
use crate::error::{MetaResult, UrlMetaError};
use crate::pattern::match_pattern;
use crate::validate::{ensure_pattern_like, ensure_url_like};

/// Collect the metadata applying to `url`.
///
/// Flattened patterns are walked in declaration order; the value of
/// every fully matching pattern is deep-merged into the result, so
/// later-declared patterns win on scalar conflicts. Returns an empty
/// map when nothing matches.
pub fn apply_associations(url: &str, associations: &MetaValue) -> MetaResult<MetaMap> {
    ensure_url_like(url, "url")?;
    let flat = flatten_associations(associations)?;
    let mut merged = MetaMap::default();
    for (pattern, value) in &flat {
        ensure_pattern_like(pattern)?;
        if match_pattern(pattern, url).matched {
            deep_assign_map(&mut merged, value);
        }
    }
    Ok(merged)
}

/// Decide whether descending into the directory `url` could ever
/// satisfy a rule.
///
/// A full match contributes to one merged meta value, exactly as in
/// [`apply_associations`]; a failed match that still consumed the whole
/// directory url is a partial match, meaning the pattern's unconsumed
/// tail could be satisfied by something inside the directory. When any
/// full match exists the predicate judges the merged meta alone;
/// otherwise the directory stays eligible if the predicate accepts at
/// least one partial candidate.
pub fn url_child_may_match<F>(url: &str, associations: &MetaValue, predicate: F) -> MetaResult<bool>
where
    F: Fn(&MetaMap) -> bool,
{
    if !url.ends_with('/') {
        return Err(UrlMetaError::InvalidArgument(format!(
            "url should end with /, got {url}"
        )));
    }
    ensure_url_like(url, "url")?;
    let flat = flatten_associations(associations)?;
    let mut some_full_match = false;
    let mut full_match_meta = MetaMap::default();
    let mut partial_match_metas: Vec<&MetaMap> = Vec::new();
    for (pattern, value) in &flat {
        ensure_pattern_like(pattern)?;
        let result = match_pattern(pattern, url);
        if result.matched {
            some_full_match = true;
            deep_assign_map(&mut full_match_meta, value);
        } else if result.url_index >= url.len() {
            partial_match_metas.push(value);
        }
    }
    if some_full_match {
        return Ok(predicate(&full_match_meta));
    }
    Ok(partial_match_metas.into_iter().any(predicate))
}
