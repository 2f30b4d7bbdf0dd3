// Association resolution and flattening.
//
// Associations are authored category-major: category -> pattern ->
// value. Resolution rewrites every pattern key to an absolute url
// against a base; flattening inverts the nesting to pattern -> category
// -> value so queries can walk patterns in declaration order.

use url::Url;

use super::value::{MetaMap, MetaValue};
use crate::error::{MetaResult, UrlMetaError};
use crate::validate::ensure_url_like;

/// Flattened associations: pattern -> category -> value, one entry per
/// distinct pattern across all categories, in declaration order.
pub type FlatAssociations = indexmap::IndexMap<String, MetaMap, ahash::RandomState>;

/// Resolve every pattern key against `base_url`.
///
/// Pattern keys that are not valid url references relative to the base
/// (`"http://"`, for instance) are kept verbatim; that is not an error.
/// Category values that are not mappings pass through untouched.
pub fn resolve_associations(associations: &MetaValue, base_url: &str) -> MetaResult<MetaValue> {
    ensure_url_like(base_url, "base url")?;
    log::debug!("resolving association patterns against {base_url}");
    let base = Url::parse(base_url).ok();
    Ok(resolve_associations_with(associations, |pattern| {
        base.as_ref()?.join(pattern).ok().map(String::from)
    }))
}

/// Resolve every pattern key with a caller-supplied resolver. `None`
/// keeps the pattern verbatim.
pub fn resolve_associations_with<F>(associations: &MetaValue, mut resolve: F) -> MetaValue
where
    F: FnMut(&str) -> Option<String>,
{
    let MetaValue::Map(categories) = associations else {
        return associations.clone();
    };
    let mut resolved = MetaMap::default();
    for (category, value) in categories {
        let entry = match value {
            MetaValue::Map(patterns) => {
                let mut patterns_resolved = MetaMap::default();
                for (pattern, value) in patterns {
                    let key = resolve(pattern).unwrap_or_else(|| pattern.clone());
                    patterns_resolved.insert(key, value.clone());
                }
                MetaValue::Map(patterns_resolved)
            }
            other => other.clone(),
        };
        resolved.insert(category.clone(), entry);
    }
    MetaValue::Map(resolved)
}

/// Invert associations to pattern-major order.
///
/// Categories are walked in declaration order and their patterns
/// likewise; a pattern recurring across categories keeps the slot of its
/// first appearance and unions the per-category values, later
/// categories winning on a repeated category name. Category values that
/// are not mappings are skipped.
pub fn flatten_associations(associations: &MetaValue) -> MetaResult<FlatAssociations> {
    let MetaValue::Map(categories) = associations else {
        return Err(UrlMetaError::InvalidAssociations {
            found: associations.kind(),
        });
    };
    let mut flat = FlatAssociations::default();
    for (category, value) in categories {
        let MetaValue::Map(patterns) = value else {
            continue;
        };
        for (pattern, value) in patterns {
            flat.entry(pattern.clone())
                .or_default()
                .insert(category.clone(), value.clone());
        }
    }
    Ok(flat)
}
