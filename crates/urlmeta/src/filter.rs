// Boolean convenience wrappers over the applicator.

use crate::error::MetaResult;
use crate::meta::{MetaMap, MetaValue, apply_associations, resolve_associations};

const FILTER_CATEGORY: &str = "yes";

fn filter_associations(patterns: &MetaMap) -> MetaValue {
    let mut categories = MetaMap::default();
    categories.insert(FILTER_CATEGORY.to_string(), MetaValue::Map(patterns.clone()));
    MetaValue::Map(categories)
}

/// True when the merged value of the matching `patterns` is truthy for
/// `url`.
pub fn matches(url: &str, patterns: &MetaMap) -> MetaResult<bool> {
    let merged = apply_associations(url, &filter_associations(patterns))?;
    Ok(merged
        .get(FILTER_CATEGORY)
        .is_some_and(MetaValue::is_truthy))
}

/// A reusable url filter: patterns are resolved against a base url once
/// at construction, then queried read-only. Safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct UrlFilter {
    associations: MetaValue,
}

/// Resolve `patterns` against `base_url` and build a [`UrlFilter`].
pub fn create_filter(patterns: &MetaMap, base_url: &str) -> MetaResult<UrlFilter> {
    let associations = resolve_associations(&filter_associations(patterns), base_url)?;
    Ok(UrlFilter { associations })
}

impl UrlFilter {
    /// Truthiness of the merged value for `url`.
    pub fn matches(&self, url: &str) -> MetaResult<bool> {
        self.matches_with(url, |value| value.is_some_and(MetaValue::is_truthy))
    }

    /// Like [`UrlFilter::matches`] but `map` decides what the merged
    /// value (or its absence) means.
    pub fn matches_with<M>(&self, url: &str, map: M) -> MetaResult<bool>
    where
        M: FnOnce(Option<&MetaValue>) -> bool,
    {
        let merged = apply_associations(url, &self.associations)?;
        Ok(map(merged.get(FILTER_CATEGORY)))
    }
}
