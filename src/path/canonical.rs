use tracing::{debug, trace};

use super::{KeyPath, PathError, Sentinel};

impl KeyPath {
    /// Resolves this path against the document root.
    ///
    /// See [KeyPath::canonical_relative_to].
    pub fn canonical(&self) -> Result<KeyPath, PathError> {
        self.canonical_relative_to(&KeyPath::root())
    }

    /// Resolves this path to an absolute path without sentinels after the leading root.
    ///
    /// Absolute paths ignore `base`. Relative paths are appended to the canonical form of
    /// `base` (a relative base is itself resolved against the root first). Each `up` segment
    /// then removes the segment before it.
    ///
    /// Fails with [PathError::RootEscape] if an `up` has nothing left to remove, and with
    /// [PathError::MalformedPath] if a `root` shows up after the first segment or if one of the
    /// object sentinels is used as a key.
    pub fn canonical_relative_to(&self, base: &KeyPath) -> Result<KeyPath, PathError> {
        let combined = if self.is_absolute() {
            self.clone()
        } else {
            base.canonical()? / self
        };

        match resolve(&combined) {
            Ok(resolved) => {
                trace!(path = %self, base = %base, resolved = %resolved, "Resolved key path.");
                Ok(resolved)
            }
            Err(error) => {
                debug!(path = %self, base = %base, %error, "Failed to resolve key path.");
                Err(error)
            }
        }
    }
}

/// Runs the `up` cancelling stack machine over an absolute path.
fn resolve(path: &KeyPath) -> Result<KeyPath, PathError> {
    let mut stack: Vec<&str> = Vec::with_capacity(path.len());

    // The leading root only anchors the path.
    for (position, segment) in path.iter().enumerate().skip(1) {
        match Sentinel::from_segment(segment) {
            None => stack.push(segment),
            Some(Sentinel::Up) => {
                if stack.pop().is_none() {
                    return Err(PathError::RootEscape {
                        path: path.clone(),
                        position,
                    });
                }
            }
            Some(Sentinel::Root | Sentinel::RootObject | Sentinel::KeyPath) => {
                return Err(PathError::MalformedPath {
                    path: path.clone(),
                    position,
                    segment: segment.to_owned(),
                });
            }
        }
    }

    Ok(KeyPath::root() / KeyPath::from_iter(stack))
}
