//! Pattern tokenization and segment classification.
//!
//! Route patterns and request paths go through the same splitter so that the
//! trie walk and parameter extraction always agree on token positions.

use smallvec::SmallVec;

/// Number of path segments kept inline before the token list spills to the heap.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Tokens of a pattern or request path, borrowed from the input string.
pub type Segments<'a> = SmallVec<[&'a str; MAX_INLINE_SEGMENTS]>;

/// Kind of a single path segment.
///
/// The derived ordering is the order children are kept in under a parent:
/// most specific first, so lookups try exact matches before parametric ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentKind {
    /// Literal text, matched exactly.
    Static,
    /// `:name` - matches one path element and binds it to `name`.
    Named,
    /// `*name` - matches every remaining element, joined by `/`.
    Wildcard,
}

impl SegmentKind {
    /// Classify one token.
    ///
    /// A bare `*` is static: a wildcard needs a parameter name.
    #[must_use]
    pub fn classify(token: &str) -> Self {
        if is_wildcard(token) {
            SegmentKind::Wildcard
        } else if token.starts_with(':') {
            SegmentKind::Named
        } else {
            SegmentKind::Static
        }
    }

    /// Whether this kind matches any token text.
    #[inline]
    #[must_use]
    pub fn is_parametric(self) -> bool {
        self != SegmentKind::Static
    }
}

/// Split a pattern (or request path) into its non-empty `/`-separated tokens.
///
/// Empty tokens are dropped, so leading, trailing and repeated slashes are
/// ignored. Splitting stops after the first wildcard token.
///
/// ```
/// use trie_router::router::split_pattern;
///
/// assert_eq!(split_pattern("//user/:name/").as_slice(), ["user", ":name"]);
/// assert_eq!(split_pattern("/static/*file/more").as_slice(), ["static", "*file"]);
/// ```
#[must_use]
pub fn split_pattern(pattern: &str) -> Segments<'_> {
    let mut segments = Segments::new();
    for token in pattern.split('/').filter(|t| !t.is_empty()) {
        segments.push(token);
        if is_wildcard(token) {
            break;
        }
    }
    segments
}

#[inline]
fn is_wildcard(token: &str) -> bool {
    token.len() > 1 && token.starts_with('*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ignores_empty_tokens() {
        assert!(split_pattern("/").is_empty());
        assert!(split_pattern("").is_empty());
        assert_eq!(split_pattern("a//b///c/").as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_stops_after_wildcard() {
        assert_eq!(
            split_pattern("/chen/*static/nihao").as_slice(),
            ["chen", "*static"]
        );
    }

    #[test]
    fn test_bare_star_does_not_stop_split() {
        assert_eq!(split_pattern("/a/*/b").as_slice(), ["a", "*", "b"]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(SegmentKind::classify("users"), SegmentKind::Static);
        assert_eq!(SegmentKind::classify(":id"), SegmentKind::Named);
        assert_eq!(SegmentKind::classify(":"), SegmentKind::Named);
        assert_eq!(SegmentKind::classify("*path"), SegmentKind::Wildcard);
        assert_eq!(SegmentKind::classify("*"), SegmentKind::Static);
        assert_eq!(SegmentKind::classify("a*"), SegmentKind::Static);
    }

    #[test]
    fn test_kind_order_is_most_specific_first() {
        let mut kinds = vec![
            SegmentKind::Wildcard,
            SegmentKind::Static,
            SegmentKind::Named,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![SegmentKind::Static, SegmentKind::Named, SegmentKind::Wildcard]
        );
    }
}
