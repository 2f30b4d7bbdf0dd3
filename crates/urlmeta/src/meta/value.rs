// Closed value model for association metadata.
//
// Leaves are json scalars, branches are ordered string-keyed maps.
// Nothing here is ever interpreted by the engine beyond merge-ability
// and truthiness.

use ahash::RandomState;
use indexmap::IndexMap;
use serde_json::Value;

/// Ordered map used everywhere metadata is keyed by strings. Iteration
/// follows insertion order, which is what keeps flattening and merging
/// deterministic.
pub type MetaMap = IndexMap<String, MetaValue, RandomState>;

/// An opaque metadata value: a json scalar or a nested ordered map.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Scalar(Value),
    Map(MetaMap),
}

impl MetaValue {
    /// Entry lookup on the `Map` variant.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        match self {
            MetaValue::Map(map) => map.get(key),
            MetaValue::Scalar(_) => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, MetaValue::Map(_))
    }

    /// Truthiness used by the boolean helpers: null, false, zero and the
    /// empty string are false; every other scalar and every map is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            MetaValue::Map(_) => true,
            MetaValue::Scalar(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64() != Some(0.0),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }

    /// Short label for error messages.
    pub(crate) fn kind(&self) -> String {
        match self {
            MetaValue::Map(_) => "a mapping".to_string(),
            MetaValue::Scalar(value) => value.to_string(),
        }
    }
}

/// Deep-merge `from` into `into`: map-into-map merges key by key,
/// anything else is overwritten by the right side.
pub fn deep_assign(into: &mut MetaValue, from: &MetaValue) {
    match (into, from) {
        (MetaValue::Map(into_map), MetaValue::Map(from_map)) => {
            deep_assign_map(into_map, from_map);
        }
        (into, from) => *into = from.clone(),
    }
}

/// [`deep_assign`] over the map variant's entries.
pub(crate) fn deep_assign_map(into: &mut MetaMap, from: &MetaMap) {
    for (key, value) in from {
        match into.get_mut(key) {
            Some(slot) => deep_assign(slot, value),
            None => {
                into.insert(key.clone(), value.clone());
            }
        }
    }
}

impl From<Value> for MetaValue {
    /// Json objects become the `Map` variant recursively, keeping key
    /// order; everything else is a scalar leaf.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(entries) => MetaValue::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, MetaValue::from(value)))
                    .collect(),
            ),
            scalar => MetaValue::Scalar(scalar),
        }
    }
}

impl From<MetaValue> for Value {
    fn from(value: MetaValue) -> Self {
        match value {
            MetaValue::Scalar(scalar) => scalar,
            MetaValue::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Scalar(Value::Bool(value))
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Scalar(Value::from(value))
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Scalar(Value::from(value))
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Scalar(Value::String(value.to_string()))
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Scalar(Value::String(value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MetaValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetaValue::Scalar(value) => value.serialize(serializer),
            MetaValue::Map(map) => serializer.collect_map(map),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MetaValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(MetaValue::from(Value::deserialize(deserializer)?))
    }
}
