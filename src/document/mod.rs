//! Navigation of `serde_json` documents by key path.
//!
//! Paths are always canonicalized before use, so lookups accept relative paths (resolved
//! against the document root or a given base) and `up` segments. Objects are entered by key
//! and arrays by index.
//!
//! # Tagged objects
//! Settings are often read from a sub-object that was taken out of the full document. To keep
//! relative paths working on such an object, [extract] tags it with its own canonical path
//! (under [KEY_PATH]) and a copy of the document it came from (under [ROOT_OBJECT]).
//! [value_at_tagged] then resolves paths against that location inside the original
//! document, so `..` can still reach sibling settings. Extracting from a tagged object keeps
//! the original document and composes the paths, so nested and direct extracts are tagged the
//! same way. Tags use sentinel keys, which no canonical path can address.

use serde_json::{Map, Value};
use snafu::Snafu;
use tracing::debug;

use crate::path::sentinel::{KEY_PATH, ROOT_OBJECT};
use crate::path::{KeyPath, PathError, Segment};

#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
pub enum LookupError {
    #[snafu(display("{}", source), context(false))]
    InvalidPath { source: PathError },

    #[snafu(display("Key `{}` not found", path))]
    MissingKey { path: KeyPath },

    #[snafu(display(
        "Index {} at `{}` is out of bounds for an array of length {}",
        index,
        path,
        len
    ))]
    IndexOutOfBounds {
        path: KeyPath,
        index: usize,
        len: usize,
    },

    #[snafu(display("Expected an array index at `{}`, found {:?}", path, segment))]
    InvalidIndex { path: KeyPath, segment: String },

    #[snafu(display("Can't enter `{}`: its parent is neither an object nor an array", path))]
    NotAContainer { path: KeyPath },

    #[snafu(display("Invalid `{}` tag: {}", tag, reason))]
    InvalidTag { tag: String, reason: String },
}

impl LookupError {
    /// Whether the lookup failed only because the addressed value doesn't exist.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            LookupError::MissingKey { .. } | LookupError::IndexOutOfBounds { .. }
        )
    }
}

/// Returns the value at `path`, resolved against the document root.
pub fn value_at<'a>(document: &'a Value, path: &KeyPath) -> Result<&'a Value, LookupError> {
    value_at_relative(document, path, &KeyPath::root())
}

/// Returns the value at `path`, resolved against `base`.
pub fn value_at_relative<'a>(
    document: &'a Value,
    path: &KeyPath,
    base: &KeyPath,
) -> Result<&'a Value, LookupError> {
    let canonical = path.canonical_relative_to(base)?;

    let mut current = document;
    for (position, segment) in canonical.iter().enumerate().skip(1) {
        current = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => Some(element(items, &canonical, position)?),
            _ => None,
        }
        .ok_or_else(|| not_found(current, &canonical, position))?;
    }

    Ok(current)
}

/// Mutable variant of [value_at].
pub fn value_at_mut<'a>(
    document: &'a mut Value,
    path: &KeyPath,
) -> Result<&'a mut Value, LookupError> {
    let canonical = path.canonical()?;

    let mut current = document;
    for (position, segment) in canonical.iter().enumerate().skip(1) {
        current = match current {
            Value::Object(map) => map.get_mut(segment).ok_or_else(|| {
                failed(LookupError::MissingKey {
                    path: prefix(&canonical, position),
                })
            })?,
            Value::Array(items) => {
                let index = index(&canonical, position)?;
                let len = items.len();
                items.get_mut(index).ok_or_else(|| {
                    failed(LookupError::IndexOutOfBounds {
                        path: prefix(&canonical, position),
                        index,
                        len,
                    })
                })?
            }
            _ => {
                return Err(failed(LookupError::NotAContainer {
                    path: prefix(&canonical, position),
                }))
            }
        };
    }

    Ok(current)
}

/// Whether `path` resolves to a value inside `document`.
pub fn contains(document: &Value, path: &KeyPath) -> bool {
    value_at(document, path).is_ok()
}

/// Copies the value at `path` out of `document`.
///
/// Objects are tagged with their canonical path and with the document they were taken from, so
/// that [value_at_tagged] can resolve relative paths from them. If `document` is itself tagged,
/// `path` is resolved from its tagged location and the result keeps the original document.
pub fn extract(document: &Value, path: &KeyPath) -> Result<Value, LookupError> {
    let (root, base) = location(document)?;
    let canonical = path.canonical_relative_to(&base)?;
    let mut value = value_at(root, &canonical)?.clone();

    if value.is_object() {
        tag_key_path(&mut value, &canonical)?;
        tag_root_object(&mut value, root);
    }
    Ok(value)
}

/// Resolves `path` from a tagged object. Values without any tag are treated as a document root.
pub fn value_at_tagged<'a>(object: &'a Value, path: &KeyPath) -> Result<&'a Value, LookupError> {
    let (root, base) = location(object)?;
    value_at_relative(root, path, &base)
}

/// Stores the canonical form of `path` under the [KEY_PATH] key of `object`.
pub fn tag_key_path(object: &mut Value, path: &KeyPath) -> Result<(), LookupError> {
    let canonical = path.canonical()?;
    match object {
        Value::Object(map) => {
            map.insert(KEY_PATH.to_owned(), Value::from(canonical.into_segments()));
            Ok(())
        }
        _ => Err(failed(LookupError::NotAContainer { path: canonical })),
    }
}

/// Reads back the path stored by [tag_key_path], or `None` if `object` has no such tag.
///
/// Fails with [LookupError::InvalidTag] if the tag isn't a canonical key path.
pub fn tagged_key_path(object: &Value) -> Result<Option<KeyPath>, LookupError> {
    let Some(tag) = object.get(KEY_PATH) else {
        return Ok(None);
    };
    let path: KeyPath = serde_json::from_value(tag.clone())
        .map_err(|error| invalid_tag(KEY_PATH, error.to_string()))?;
    if !path.is_canonical() {
        return Err(invalid_tag(KEY_PATH, format!("`{path}` is not a canonical key path")));
    }
    Ok(Some(path))
}

/// Stores a copy of `root` under the [ROOT_OBJECT] key of `object`. Non-objects are left
/// untouched.
pub fn tag_root_object(object: &mut Value, root: &Value) {
    if let Value::Object(map) = object {
        let mut root = root.clone();
        if let Value::Object(root_map) = &mut root {
            strip_map(root_map);
        }
        map.insert(ROOT_OBJECT.to_owned(), root);
    }
}

/// Removes the tags added by [extract].
pub fn strip_tags(object: &mut Value) {
    if let Value::Object(map) = object {
        strip_map(map);
    }
}

fn strip_map(map: &mut Map<String, Value>) {
    map.remove(KEY_PATH);
    map.remove(ROOT_OBJECT);
}

/// The document an object belongs to and the canonical path of the object inside it.
fn location(object: &Value) -> Result<(&Value, KeyPath), LookupError> {
    match (object.get(ROOT_OBJECT), tagged_key_path(object)?) {
        (None, None) => Ok((object, KeyPath::root())),
        (Some(root), Some(path)) => Ok((root, path)),
        (Some(_), None) => Err(invalid_tag(KEY_PATH, "missing".to_owned())),
        (None, Some(_)) => Err(invalid_tag(ROOT_OBJECT, "missing".to_owned())),
    }
}

fn invalid_tag(tag: &str, reason: String) -> LookupError {
    failed(LookupError::InvalidTag {
        tag: tag.to_owned(),
        reason,
    })
}

fn prefix(canonical: &KeyPath, position: usize) -> KeyPath {
    canonical.segments()[..=position].iter().cloned().collect()
}

fn index(canonical: &KeyPath, position: usize) -> Result<usize, LookupError> {
    let segment = &canonical.segments()[position];
    match Segment::classify(segment) {
        Segment::Index(index) => Ok(index),
        _ => Err(failed(LookupError::InvalidIndex {
            path: prefix(canonical, position),
            segment: segment.clone(),
        })),
    }
}

fn element<'a>(
    items: &'a [Value],
    canonical: &KeyPath,
    position: usize,
) -> Result<&'a Value, LookupError> {
    let index = index(canonical, position)?;
    items.get(index).ok_or_else(|| {
        failed(LookupError::IndexOutOfBounds {
            path: prefix(canonical, position),
            index,
            len: items.len(),
        })
    })
}

fn not_found(parent: &Value, canonical: &KeyPath, position: usize) -> LookupError {
    let path = prefix(canonical, position);
    failed(if parent.is_object() {
        LookupError::MissingKey { path }
    } else {
        LookupError::NotAContainer { path }
    })
}

fn failed(error: LookupError) -> LookupError {
    debug!(%error, "Key path lookup failed.");
    error
}
