// urlmeta
// Pattern matching and metadata association engine for absolute urls.
//
// Given rule sets of the shape category -> pattern -> value, this crate
// decides which values apply to a concrete url: chunk assignment, cache
// or ignore classification, alias rewriting, directory-traversal
// pruning. Purely computational - no I/O anywhere.

#[cfg(test)]
mod test;

pub mod alias;
pub mod error;
pub mod filter;
pub mod meta;
pub mod pattern;
pub mod validate;

pub use alias::{AliasMap, apply_aliases};
pub use error::{MetaResult, UrlFault, UrlMetaError};
pub use filter::{UrlFilter, create_filter, matches};
pub use meta::{
    FlatAssociations, MetaMap, MetaValue, apply_associations, deep_assign, flatten_associations,
    resolve_associations, resolve_associations_with, url_child_may_match,
};
pub use pattern::{Capture, MatchResult, match_pattern};
pub use validate::ensure_url_like;
