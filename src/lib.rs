#![deny(warnings)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(unused_allocation)]
#![deny(unused_extern_crates)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![allow(clippy::module_name_repetitions)]

//! Key paths for hierarchical settings documents.
//!
//! A [`KeyPath`] names a location inside a tree of nested maps and arrays. Paths are
//! composed with `/`, and are resolved to an absolute, sentinel free address with
//! [`KeyPath::canonical`] before being used to look anything up.
//!
//! ```
//! use keypath::{key_path, KeyPath, Sentinel};
//!
//! let path = KeyPath::from("bodies") / "Earth" / "gravityField" / Sentinel::Up / "ephemeris";
//! assert_eq!(path.canonical().unwrap(), key_path!(Sentinel::Root, "bodies", "Earth", "ephemeris"));
//! ```

#[cfg(feature = "path")]
#[macro_use]
pub mod path;

#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "keys")]
pub mod keys;

#[cfg(feature = "path")]
pub use path::{is_path_related, is_sentinel, KeyPath, PathError, Segment, Sentinel};
