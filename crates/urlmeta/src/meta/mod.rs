// Association metadata: value model, resolution, flattening, application.

mod apply;
mod associations;
mod value;

pub use apply::{apply_associations, url_child_may_match};
pub use associations::{
    FlatAssociations, flatten_associations, resolve_associations, resolve_associations_with,
};
pub use value::{MetaMap, MetaValue, deep_assign};
