//! Composition of key paths with `/`.
//!
//! `a / b` is a new path with the segments of `a` followed by the segments of `b`. Literal
//! keys (`&str`, `String`), indices (`usize`) and [Sentinel]s are shorthands for a single
//! segment path and can be used on either side.

use std::ops::Div;

use super::{KeyPath, Sentinel};

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

macro_rules! impl_div {
    ($lhs:ty => $($rhs:ty),+) => {
        $(
            impl Div<$rhs> for $lhs {
                type Output = KeyPath;

                fn div(self, rhs: $rhs) -> KeyPath {
                    KeyPath::from(self).append(KeyPath::from(rhs).into_segments())
                }
            }
        )+
    };
}

impl_div!(KeyPath => KeyPath, &KeyPath, &str, String, usize, Sentinel);
impl_div!(&KeyPath => KeyPath, &KeyPath, &str, String, usize, Sentinel);
impl_div!(&str => KeyPath, &KeyPath);
impl_div!(String => KeyPath, &KeyPath);
impl_div!(usize => KeyPath, &KeyPath);
impl_div!(Sentinel => KeyPath, &KeyPath, &str, String, usize, Sentinel);

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn concat_segments_in_order() {
        let a = KeyPath::from(["bodies", "Earth"]);
        let b = KeyPath::from(["ephemeris", "type"]);
        assert_eq!(
            (&a / &b).segments(),
            ["bodies", "Earth", "ephemeris", "type"]
        );
        assert_eq!(a / b, KeyPath::from(["bodies", "Earth", "ephemeris", "type"]));
    }

    #[test]
    fn shorthands_match_single_segment_paths() {
        let path = KeyPath::from("propagators");

        assert_eq!(&path / "type", &path / KeyPath::from("type"));
        assert_eq!(&path / String::from("type"), &path / KeyPath::from("type"));
        assert_eq!(&path / 0, &path / KeyPath::index(0));
        assert_eq!(&path / Sentinel::Up, &path / KeyPath::from(".."));

        assert_eq!("type" / path.clone(), KeyPath::from("type") / &path);
        assert_eq!(String::from("type") / &path, KeyPath::from("type") / &path);
        assert_eq!(3usize / &path, KeyPath::index(3) / &path);
        assert_eq!(Sentinel::Root / &path, KeyPath::root() / &path);
    }

    #[test]
    fn sentinel_starts_paths() {
        assert_eq!(
            (Sentinel::Root / "bodies" / "Earth").segments(),
            ["~", "bodies", "Earth"]
        );
        assert_eq!((Sentinel::Up / Sentinel::Up / 1).segments(), ["..", "..", "1"]);
    }

    #[test]
    fn operands_are_not_mutated() {
        let base = KeyPath::from("a");
        let _ = &base / "b";
        assert_eq!(base, KeyPath::from("a"));
    }

    proptest! {
        #[test]
        fn associative(a: KeyPath, b: KeyPath, c: KeyPath) {
            prop_assert_eq!((&a / &b) / &c, &a / (&b / &c));
        }

        #[test]
        fn empty_is_identity(a: KeyPath) {
            prop_assert_eq!(&a / KeyPath::new(), a.clone());
            prop_assert_eq!(KeyPath::new() / &a, a);
        }

        #[test]
        fn index_equals_decimal_literal(a: KeyPath, index: usize) {
            prop_assert_eq!(&a / index, &a / index.to_string().as_str());
            prop_assert_eq!(index / &a, index.to_string() / &a);
        }

        #[test]
        fn length_adds_up(a: KeyPath, b: KeyPath) {
            prop_assert_eq!((&a / &b).len(), a.len() + b.len());
        }
    }
}
