// Capture values and the match result record.

/// A substring extracted by a wildcard or trailing-slash token.
///
/// The engine only ever produces the positional variant; `Named` exists
/// for callers that label captures after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Capture {
    Positional(String),
    Named(String, String),
}

impl Capture {
    pub fn positional(value: impl Into<String>) -> Self {
        Capture::Positional(value.into())
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Capture::Named(name.into(), value.into())
    }

    /// The captured text.
    pub fn value(&self) -> &str {
        match self {
            Capture::Positional(value) => value,
            Capture::Named(_, value) => value,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Capture::Positional(_) => None,
            Capture::Named(name, _) => Some(name),
        }
    }
}

/// Outcome of matching one pattern against one url.
///
/// `pattern_index` and `url_index` are byte offsets marking how far
/// matching progressed. On success both always equal the full input
/// lengths; on failure they mark the deepest point reached, which the
/// skip-search uses to pick its longest partial attempt and the
/// traversal pruning uses to detect patterns that consumed a whole
/// directory url.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchResult {
    pub matched: bool,
    pub pattern_index: usize,
    pub url_index: usize,
    pub captures: Vec<Capture>,
}

impl MatchResult {
    /// Positional capture texts, in the order the match produced them.
    pub fn positional_captures(&self) -> impl Iterator<Item = &str> {
        self.captures.iter().filter_map(|capture| match capture {
            Capture::Positional(value) => Some(value.as_str()),
            Capture::Named(..) => None,
        })
    }

    /// Text of the first capture labeled `name`, if any.
    pub fn named_capture(&self, name: &str) -> Option<&str> {
        self.captures
            .iter()
            .find(|capture| capture.name() == Some(name))
            .map(Capture::value)
    }
}
