use std::fmt;

use super::Sentinel;

/// A classified view of a single key path segment.
///
/// Segments are stored as plain strings, the kind is derived from the text alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    Key(&'a str),
    Index(usize),
    Sentinel(Sentinel),
}

impl<'a> Segment<'a> {
    pub fn classify(segment: &'a str) -> Self {
        if let Some(sentinel) = Sentinel::from_segment(segment) {
            return Segment::Sentinel(sentinel);
        }
        match parse_index(segment) {
            Some(index) => Segment::Index(index),
            None => Segment::Key(segment),
        }
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Segment::Key(_))
    }
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_))
    }
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Segment::Sentinel(_))
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(segment: &'a str) -> Self {
        Segment::classify(segment)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Sentinel(sentinel) => fmt::Display::fmt(sentinel, f),
        }
    }
}

/// Parses an index segment. Only plain ASCII digits are accepted (no sign, no whitespace).
/// Digit strings too large for `usize` can't address an array element and stay keys.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(Segment::classify("bodies"), Segment::Key("bodies"));
        assert_eq!(Segment::classify("0"), Segment::Index(0));
        assert_eq!(Segment::classify("042"), Segment::Index(42));
        assert_eq!(Segment::classify("~"), Segment::Sentinel(Sentinel::Root));
        assert_eq!(Segment::classify(".."), Segment::Sentinel(Sentinel::Up));
        assert_eq!(
            Segment::classify("#keypath"),
            Segment::Sentinel(Sentinel::KeyPath)
        );
    }

    #[test]
    fn signed_and_empty_are_keys() {
        assert_eq!(Segment::classify("-1"), Segment::Key("-1"));
        assert_eq!(Segment::classify("+1"), Segment::Key("+1"));
        assert_eq!(Segment::classify(""), Segment::Key(""));
        assert_eq!(Segment::classify("1e3"), Segment::Key("1e3"));
    }

    #[test]
    fn overflowing_index_is_a_key() {
        let huge = "99999999999999999999999999999";
        assert_eq!(Segment::classify(huge), Segment::Key(huge));
    }

    #[test]
    fn display() {
        assert_eq!(Segment::Index(7).to_string(), "7");
        assert_eq!(Segment::Key("mass").to_string(), "mass");
        assert_eq!(Segment::Sentinel(Sentinel::Up).to_string(), "..");
    }
}
