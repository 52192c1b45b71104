#![deny(warnings)]

//! This module contains all of the logic for key paths.
//!
//! Key paths can be thought of as similar to file paths (in an operating system) pointing
//! to specific files inside of a directory.
//! A settings document is a data structure that can contain recursively nested fields. Key
//! paths allow referring to a specific field inside of a document.
//!
//! # Example
//! Below is a sample document. Different fields can be accessed with key paths.
//! ```json
//! {
//!   "bodies": {
//!       "Earth": { "mass": 5.97e24 }
//!    },
//!    "accelerations": [{ "type": "pointMass" }]
//! }
//! ```
//!
//! | key path                       | value it points to      |
//! |--------------------------------|-------------------------|
//! | `bodies.Earth.mass`            | `5.97e24`
//! | `bodies.Earth`                 | `{ "mass": 5.97e24 }`
//! | `accelerations.0.type`         | `"pointMass"`
//!
//! # Segments
//! A [KeyPath] is an ordered list of string segments, outermost first. A segment is either a
//! literal key, an index (a string of decimal digits) or one of the reserved [Sentinel] values.
//! The segments are only classified by their text; [KeyPath::segment_iter] yields the
//! classified [Segment] view.
//!
//! # Absolute and relative paths
//! A path whose first segment is [Sentinel::Root] is absolute. Every other path, including the
//! empty one, is relative and only gets a meaning once it is resolved against a base path with
//! [KeyPath::canonical_relative_to]. Relative paths may contain [Sentinel::Up] segments to
//! navigate to the parent of the current location.
//!
//! Building and composing paths never fails. All well-formedness checks are deferred to
//! canonicalization, which returns a [PathError] when the path escapes the root or contains a
//! sentinel where it can't be resolved.
//!
//! # Macros
//! [key_path!][crate::key_path] composes its arguments left to right, so literals, indices,
//! sentinels and sub-paths can be mixed freely. <strong>The macro does not parse
//! paths</strong>: `key_path!("a.b")` is a single segment named `a.b`.

use snafu::Snafu;

/// Syntactic sugar for composing a key path.
///
/// Each argument is a single segment (or a whole sub-path) and may be anything that can be
/// composed onto a [KeyPath] with `/`: string literals, `usize` indices, [Sentinel]s or other
/// key paths.
///
/// Example: `key_path!(Sentinel::Root, "accelerations", 0, "type")` is the absolute path
/// printed as `accelerations.0.type`.
#[macro_export]
macro_rules! key_path {
    ($($segment:expr),* $(,)?) => {
        $crate::path::KeyPath::new() $(/ $segment)*
    };
}

pub use borrowed::Segment;
pub use owned::{Iter, KeyPath};
pub use sentinel::{is_path_related, is_sentinel, Sentinel};

mod borrowed;
mod canonical;
mod concat;
mod owned;
pub mod sentinel;

#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
pub enum PathError {
    #[snafu(display(
        "Key path `{}` navigates above the document root at segment {}",
        path,
        position
    ))]
    RootEscape { path: KeyPath, position: usize },

    #[snafu(display(
        "Malformed key path `{}`: unexpected {:?} at segment {}",
        path,
        segment,
        position
    ))]
    MalformedPath {
        path: KeyPath,
        position: usize,
        segment: String,
    },
}

impl PathError {
    /// The combined path (base followed by the resolved path) that failed to resolve.
    pub fn path(&self) -> &KeyPath {
        match self {
            PathError::RootEscape { path, .. } | PathError::MalformedPath { path, .. } => path,
        }
    }

    /// Position of the offending segment inside [PathError::path].
    pub fn position(&self) -> usize {
        match self {
            PathError::RootEscape { position, .. } | PathError::MalformedPath { position, .. } => {
                *position
            }
        }
    }
}
