//! Reserved segment values.
//!
//! Sentinels can never appear as literal keys in a settings document. `root` and `up` take
//! part in the key path algebra, `rootObject` and `keyPath` are used to tag objects extracted
//! from a document (see the `document` module) and are opaque to path resolution.

use std::fmt;

/// Marks an absolute path. Only valid as the first segment.
pub const ROOT: &str = "~";
/// Navigates to the parent of the current location.
pub const UP: &str = "..";
/// Key under which a tagged object stores the document it was taken from.
pub const ROOT_OBJECT: &str = "#root";
/// Key under which a tagged object stores its own canonical key path.
pub const KEY_PATH: &str = "#keypath";

/// Sentinels that take part in path resolution.
pub const PATH_RELATED: [Sentinel; 2] = [Sentinel::Root, Sentinel::Up];
/// Sentinels used as tag keys on extracted objects.
pub const OBJECT_RELATED: [Sentinel; 2] = [Sentinel::RootObject, Sentinel::KeyPath];
/// Every reserved sentinel.
pub const ALL: [Sentinel; 4] = [
    Sentinel::Root,
    Sentinel::Up,
    Sentinel::RootObject,
    Sentinel::KeyPath,
];

/// A reserved segment value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentinel {
    /// [ROOT], the document root.
    Root,
    /// [UP], the parent of the current location.
    Up,
    /// [ROOT_OBJECT], the tag holding the document of an extracted object.
    RootObject,
    /// [KEY_PATH], the tag holding the location of an extracted object.
    KeyPath,
}

impl Sentinel {
    /// The reserved spelling of this sentinel.
    pub const fn as_str(self) -> &'static str {
        match self {
            Sentinel::Root => ROOT,
            Sentinel::Up => UP,
            Sentinel::RootObject => ROOT_OBJECT,
            Sentinel::KeyPath => KEY_PATH,
        }
    }

    /// Returns the sentinel spelled by `segment`, if any.
    pub fn from_segment(segment: &str) -> Option<Self> {
        ALL.into_iter().find(|sentinel| sentinel.as_str() == segment)
    }

    /// Whether this is `root` or `up`.
    pub fn is_path_related(self) -> bool {
        matches!(self, Sentinel::Root | Sentinel::Up)
    }

    /// Whether this is `rootObject` or `keyPath`.
    pub fn is_object_related(self) -> bool {
        matches!(self, Sentinel::RootObject | Sentinel::KeyPath)
    }

    /// Whether `segment` spells this sentinel.
    pub fn matches(self, segment: &str) -> bool {
        self.as_str() == segment
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Sentinel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Whether `segment` is one of the sentinels that take part in path resolution (`root`, `up`).
pub fn is_path_related(segment: &str) -> bool {
    Sentinel::from_segment(segment).is_some_and(Sentinel::is_path_related)
}

/// Whether `segment` is any reserved sentinel.
pub fn is_sentinel(segment: &str) -> bool {
    Sentinel::from_segment(segment).is_some()
}
