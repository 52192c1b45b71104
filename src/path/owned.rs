use std::fmt::{self, Display, Formatter, Write};

#[cfg(any(test, feature = "proptest"))]
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Segment, Sentinel};

/// A key path into a settings document.
///
/// Immutable once built: composing with `/` always produces a new path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty relative path, pointing at the current location.
    pub fn new() -> Self {
        Self::default()
    }

    /// The absolute path of the document root.
    pub fn root() -> Self {
        Sentinel::Root.into()
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![key.into()],
        }
    }

    pub fn index(index: usize) -> Self {
        Self {
            segments: vec![index.to_string()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.segments.iter())
    }

    /// Iterates over the classified segments.
    pub fn segment_iter(&self) -> impl Iterator<Item = Segment<'_>> + Clone {
        self.iter().map(Segment::classify)
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The path without its last segment, or `None` for the empty path.
    ///
    /// This is purely structural: the parent of `a.b.up` is `a.b`. Canonicalize first to get
    /// the parent of the location a path points at.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Absolute paths are non-empty and start with [Sentinel::Root].
    pub fn is_absolute(&self) -> bool {
        self.first().is_some_and(|first| Sentinel::Root.matches(first))
    }

    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Whether this path is the output of canonicalization: absolute, with no sentinel after
    /// the leading root.
    pub fn is_canonical(&self) -> bool {
        self.is_absolute()
            && self.segments[1..]
                .iter()
                .all(|segment| !super::is_sentinel(segment))
    }

    pub(super) fn append(mut self, other: impl IntoIterator<Item = String>) -> Self {
        self.segments.extend(other);
        self
    }
}

impl Display for KeyPath {
    /// Joins the segments with `.`. The root sentinel is skipped entirely, so absolute and
    /// relative paths with the same keys print the same way.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in self.iter().filter(|segment| !Sentinel::Root.matches(segment)) {
            if !first {
                f.write_char('.')?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.to_string()
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::key(key)
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        Self::key(key)
    }
}

impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        Self::index(index)
    }
}

impl From<Sentinel> for KeyPath {
    fn from(sentinel: Sentinel) -> Self {
        Self::key(sentinel.as_str())
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        segments.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[String]> for KeyPath {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a>(std::slice::Iter<'a, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Mostly literal keys and indices, with the occasional `up` so that resolution has something
/// to cancel. `root` is only generated in leading position.
#[cfg(any(test, feature = "proptest"))]
impl Arbitrary for KeyPath {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let segment = prop_oneof![
            4 => "[a-zA-Z][a-zA-Z0-9_]{0,7}",
            2 => (0usize..32).prop_map(|index| index.to_string()),
            1 => Just(Sentinel::Up.as_str().to_owned()),
        ];
        (any::<bool>(), prop::collection::vec(segment, 0..8))
            .prop_map(|(absolute, segments)| {
                let path = KeyPath::from(segments);
                if absolute {
                    KeyPath::root() / path
                } else {
                    path
                }
            })
            .boxed()
    }
}

#[cfg(any(test, feature = "arbitrary"))]
impl quickcheck::Arbitrary for KeyPath {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = <usize as quickcheck::Arbitrary>::arbitrary(g) % 8;
        (0..len)
            .map(|_| match <u8 as quickcheck::Arbitrary>::arbitrary(g) % 4 {
                0 => (<usize as quickcheck::Arbitrary>::arbitrary(g) % 20).to_string(),
                1 => Sentinel::Up.as_str().to_owned(),
                _ => {
                    let key = <String as quickcheck::Arbitrary>::arbitrary(g);
                    if super::is_sentinel(&key) {
                        format!("_{key}")
                    } else {
                        key
                    }
                }
            })
            .collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(quickcheck::Arbitrary::shrink(&self.segments).map(KeyPath::from))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn key_path_display() {
        let test_cases = [
            (key_path!("bodies", "Earth", "mass"), "bodies.Earth.mass"),
            (key_path!(Sentinel::Root, "bodies"), "bodies"),
            (key_path!("accelerations", 0, "type"), "accelerations.0.type"),
            (KeyPath::root(), ""),
            (KeyPath::new(), ""),
            (key_path!("a.b", "c"), "a.b.c"),
            (key_path!("bodies", Sentinel::Up, "x"), "bodies....x"),
        ];

        for (path, expected) in test_cases {
            assert_eq!(path.to_string(), expected);
        }
    }

    #[test]
    fn construction() {
        assert_eq!(KeyPath::from("mass").segments(), ["mass"]);
        assert_eq!(KeyPath::from(String::from("mass")), KeyPath::key("mass"));
        assert_eq!(KeyPath::from(12usize).segments(), ["12"]);
        assert_eq!(KeyPath::index(0), KeyPath::from("0"));
        assert_eq!(KeyPath::root().segments(), ["~"]);
        assert_eq!(
            KeyPath::from(vec!["a".to_owned(), "~".to_owned()]).segments(),
            ["a", "~"]
        );
        assert_eq!(KeyPath::from(["a", "b"]), key_path!("a", "b"));
        assert_eq!(KeyPath::from(&["a", "b"][..]), key_path!("a", "b"));
        assert!(KeyPath::new().is_empty());
    }

    #[test]
    fn construction_does_not_validate() {
        let path = KeyPath::from(["a", "~", "..", "#root"]);
        assert_eq!(path.len(), 4);
        assert!(path.is_relative());
    }

    #[test]
    fn absoluteness() {
        assert!(KeyPath::root().is_absolute());
        assert!(key_path!(Sentinel::Root, "bodies").is_absolute());
        assert!(!KeyPath::new().is_absolute());
        assert!(!key_path!("bodies").is_absolute());
        assert!(!key_path!("bodies", Sentinel::Root).is_absolute());
        assert!(KeyPath::new().is_relative());
    }

    #[test]
    fn canonical_form() {
        assert!(KeyPath::root().is_canonical());
        assert!(key_path!(Sentinel::Root, "bodies", 0).is_canonical());
        assert!(!key_path!("bodies").is_canonical());
        assert!(!key_path!(Sentinel::Root, "bodies", Sentinel::Up).is_canonical());
        assert!(!key_path!(Sentinel::Root, Sentinel::Root).is_canonical());
    }

    #[test]
    fn accessors() {
        let path = key_path!("bodies", "Earth", 2);
        assert_eq!(path.first(), Some("bodies"));
        assert_eq!(path.last(), Some("2"));
        assert_eq!(path.parent(), Some(key_path!("bodies", "Earth")));
        assert_eq!(KeyPath::new().parent(), None);
        assert_eq!(path.iter().rev().collect::<Vec<_>>(), ["2", "Earth", "bodies"]);
        assert_eq!(
            path.segment_iter().collect::<Vec<_>>(),
            [Segment::Key("bodies"), Segment::Key("Earth"), Segment::Index(2)]
        );
    }

    #[test]
    fn serde_as_segment_list() {
        let path = key_path!(Sentinel::Root, "bodies", 0);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["~","bodies","0"]"#);
        assert_eq!(serde_json::from_str::<KeyPath>(&json).unwrap(), path);
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeyPath>();
        assert_send_sync::<crate::path::PathError>();
    }

    #[test]
    fn into_string() {
        assert_eq!(String::from(key_path!("a", 1)), "a.1");
    }
}
