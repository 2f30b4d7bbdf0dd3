// Error taxonomy for the association engine.
//
// Every error here is a configuration or programmer error detected before
// any matching work happens. Matching itself is total and reports failure
// through `MatchResult`, never through this enum.

use std::fmt;

/// Result alias used by every fallible operation in the crate.
pub type MetaResult<T> = Result<T, UrlMetaError>;

/// Why a string was rejected by the url validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlFault {
    /// Starts like `C:/` or `C:\` - a windows pathname, not a url.
    WindowsPathname,
    /// No `scheme:` prefix.
    MissingScheme,
}

impl fmt::Display for UrlFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlFault::WindowsPathname => write!(f, "looks like a windows pathname"),
            UrlFault::MissingScheme => write!(f, "has no scheme"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlMetaError {
    /// A url argument failed validation.
    #[error("{name} must be a url but {reason}, got {value}")]
    InvalidUrl {
        name: &'static str,
        reason: UrlFault,
        value: String,
    },
    /// A pattern key failed validation.
    #[error("pattern must be a url but {reason}, got {value}")]
    InvalidPattern { reason: UrlFault, value: String },
    /// Associations were not a mapping of categories.
    #[error("associations must be a mapping of categories, got {found}")]
    InvalidAssociations { found: String },
    /// An argument broke an operation-specific requirement.
    #[error("{0}")]
    InvalidArgument(String),
}
