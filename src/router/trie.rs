//! Segment trie for HTTP route matching
//!
//! Each registered pattern is split into whole `/`-delimited segments and
//! stored as a path of nodes below a per-method root. Lookup walks the same
//! segments, so its cost depends on path depth rather than on the number of
//! registered routes.
//!
//! ## Node layout
//!
//! - Each node holds one segment and its [`SegmentKind`]
//! - Children are kept ordered `Static`, `Named`, `Wildcard`; a new child is
//!   inserted after the last sibling of its own kind, so the order is stable
//! - A node that ends a registered pattern carries a [`Terminal`]; it may still
//!   have children (`/a` and `/a/b` coexist)
//!
//! ## Lookup
//!
//! Search is depth-first with backtracking over siblings. At each level the
//! candidates are the static child whose text equals the token plus every
//! parametric child, tried in stored order. A wildcard node is a sink: once
//! reached it absorbs the rest of the path.
//!
//! ```text
//! /                      GET /chen/12/nihao
//! └── chen
//!     ├── 12             1. static "12" tried first
//!     │   └── nihao  ->  /chen/12/nihao      (match)
//!     ├── :name      ->  /chen/:name
//!     │   └── nihao  ->  /chen/:name/nihao
//!     └── *rest      ->  /chen/*rest
//! ```

use http::Method;
use std::sync::Arc;

use super::core::ParamVec;
use super::error::RouteConflict;
use super::pattern::{split_pattern, SegmentKind};

/// Parameter binding position inside a registered pattern.
#[derive(Debug, Clone)]
struct ParamSlot {
    index: usize,
    name: Arc<str>,
    kind: SegmentKind,
}

/// End of a route: the registered pattern plus the positions of its
/// parameters, taken from the pattern's tokens once at registration.
#[derive(Debug, Clone)]
pub(crate) struct Terminal {
    pattern: Arc<str>,
    params: Arc<[ParamSlot]>,
}

impl Terminal {
    fn new(pattern: &str) -> Self {
        let params = split_pattern(pattern)
            .iter()
            .enumerate()
            .filter_map(|(index, token)| match SegmentKind::classify(token) {
                SegmentKind::Static => None,
                kind => Some(ParamSlot {
                    index,
                    name: Arc::from(&token[1..]),
                    kind,
                }),
            })
            .collect();
        Self {
            pattern: Arc::from(pattern),
            params,
        }
    }

    pub(crate) fn pattern(&self) -> &Arc<str> {
        &self.pattern
    }

    /// Bind this route's parameters against the tokens of a matched path.
    ///
    /// Named parameters take the token at their own index; a wildcard takes
    /// every token from its index on, rejoined with `/`.
    pub(crate) fn extract(&self, segments: &[&str]) -> ParamVec {
        let mut params = ParamVec::new();
        for slot in self.params.iter() {
            match slot.kind {
                SegmentKind::Wildcard => {
                    let rest = segments
                        .get(slot.index..)
                        .map(|tail| tail.join("/"))
                        .unwrap_or_default();
                    params.push((Arc::clone(&slot.name), rest));
                    break;
                }
                _ => {
                    if let Some(value) = segments.get(slot.index) {
                        params.push((Arc::clone(&slot.name), (*value).to_owned()));
                    }
                }
            }
        }
        params
    }
}

/// One segment position in a method's trie.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    segment: Box<str>,
    kind: SegmentKind,
    children: Vec<Node>,
    terminal: Option<Terminal>,
}

impl Node {
    /// Root node for a method's trie.
    pub(crate) fn root() -> Self {
        Self::new("/", SegmentKind::Static)
    }

    fn new(segment: &str, kind: SegmentKind) -> Self {
        Self {
            segment: Box::from(segment),
            kind,
            children: Vec::new(),
            terminal: None,
        }
    }

    /// Insert `pattern`, already split into `segments`, below this node.
    ///
    /// The conflict check runs against the terminal node's siblings before the
    /// pattern is stored, so a rejected pattern never becomes matchable.
    /// Returns the pattern previously stored on the same node, if any.
    pub(crate) fn insert(
        &mut self,
        method: &Method,
        pattern: &str,
        segments: &[&str],
    ) -> Result<Option<Arc<str>>, RouteConflict> {
        let Some((&segment, rest)) = segments.split_first() else {
            // Only reached for patterns without segments; the root has no siblings.
            return Ok(self.replace_terminal(pattern));
        };

        let index = self.child_index(segment);
        if rest.is_empty() {
            self.check_conflict(method, index, pattern)?;
            Ok(self.children[index].replace_terminal(pattern))
        } else {
            self.children[index].insert(method, pattern, rest)
        }
    }

    fn replace_terminal(&mut self, pattern: &str) -> Option<Arc<str>> {
        self.terminal
            .replace(Terminal::new(pattern))
            .map(|previous| previous.pattern)
    }

    /// Find the child whose text equals `segment`, creating it if absent.
    fn child_index(&mut self, segment: &str) -> usize {
        if let Some(index) = self
            .children
            .iter()
            .position(|child| &*child.segment == segment)
        {
            return index;
        }

        let kind = SegmentKind::classify(segment);
        let index = self.children.partition_point(|child| child.kind <= kind);
        self.children.insert(index, Node::new(segment, kind));
        index
    }

    /// Reject a terminal parametric child when a sibling of the same kind
    /// already ends another route.
    fn check_conflict(
        &self,
        method: &Method,
        index: usize,
        pattern: &str,
    ) -> Result<(), RouteConflict> {
        let kind = self.children[index].kind;
        if kind == SegmentKind::Static {
            return Ok(());
        }

        let existing = self
            .children
            .iter()
            .enumerate()
            .filter(|(i, sibling)| *i != index && sibling.kind == kind)
            .find_map(|(_, sibling)| sibling.terminal.as_ref());

        match existing {
            Some(terminal) => Err(RouteConflict {
                method: method.clone(),
                existing: Arc::clone(&terminal.pattern),
                incoming: Arc::from(pattern),
            }),
            None => Ok(()),
        }
    }

    /// Depth-first search for the route ending at `segments`.
    pub(crate) fn search(&self, segments: &[&str]) -> Option<&Terminal> {
        if self.kind == SegmentKind::Wildcard {
            return self.terminal.as_ref();
        }
        let Some((&segment, rest)) = segments.split_first() else {
            return self.terminal.as_ref();
        };

        self.children
            .iter()
            .filter(|child| child.kind.is_parametric() || &*child.segment == segment)
            .find_map(|child| child.search(rest))
    }

    /// Collect every registered pattern below (and including) this node.
    pub(crate) fn collect_patterns(&self, out: &mut Vec<Arc<str>>) {
        if let Some(terminal) = &self.terminal {
            out.push(Arc::clone(&terminal.pattern));
        }
        for child in &self.children {
            child.collect_patterns(out);
        }
    }

    /// Render this node's subtree, one indented line per node.
    pub(crate) fn render(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.segment);
        if let Some(terminal) = &self.terminal {
            out.push_str(" -> ");
            out.push_str(&terminal.pattern);
        }
        out.push('\n');
        for child in &self.children {
            child.render(depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(patterns: &[&str]) -> Node {
        let mut root = Node::root();
        for pattern in patterns {
            root.insert(&Method::GET, pattern, &split_pattern(pattern))
                .expect("no conflict");
        }
        root
    }

    fn lookup<'a>(root: &'a Node, path: &str) -> Option<&'a str> {
        root.search(&split_pattern(path))
            .map(|terminal| terminal.pattern().as_ref())
    }

    fn kinds(node: &Node) -> Vec<SegmentKind> {
        node.children.iter().map(|child| child.kind).collect()
    }

    #[test]
    fn test_children_sorted_most_specific_first() {
        let root = build(&["/a/*rest", "/a/:name", "/a/b", "/a/:id/x", "/a/c"]);
        let a = &root.children[0];
        assert_eq!(
            kinds(a),
            vec![
                SegmentKind::Static,
                SegmentKind::Static,
                SegmentKind::Named,
                SegmentKind::Named,
                SegmentKind::Wildcard,
            ]
        );
        // Insertion order is kept within a kind.
        let segments: Vec<&str> = a.children.iter().map(|c| &*c.segment).collect();
        assert_eq!(segments, vec!["b", "c", ":name", ":id", "*rest"]);
    }

    #[test]
    fn test_child_reused_by_literal_text_only() {
        let root = build(&["/user/:id/posts", "/user/:name/comments"]);
        assert_eq!(root.children[0].children.len(), 2);

        let root = build(&["/user/:id/posts", "/user/:id/comments"]);
        assert_eq!(root.children[0].children.len(), 1);
    }

    #[test]
    fn test_root_pattern() {
        let root = build(&["/", "/index"]);
        assert_eq!(lookup(&root, "/"), Some("/"));
        assert_eq!(lookup(&root, ""), Some("/"));
        assert_eq!(lookup(&root, "/index"), Some("/index"));
    }

    #[test]
    fn test_backtracks_into_later_sibling() {
        // The static branch "12" is tried first and dead-ends on "other".
        let root = build(&["/chen/12/nihao", "/chen/:age/other"]);
        assert_eq!(lookup(&root, "/chen/12/other"), Some("/chen/:age/other"));
        assert_eq!(lookup(&root, "/chen/12/nihao"), Some("/chen/12/nihao"));
    }

    #[test]
    fn test_internal_node_without_pattern_is_not_a_match() {
        let root = build(&["/a/b/c"]);
        assert_eq!(lookup(&root, "/a/b"), None);
        assert_eq!(lookup(&root, "/a/b/c/d"), None);
    }

    #[test]
    fn test_wildcard_needs_at_least_one_segment() {
        let root = build(&["/static/*file"]);
        assert_eq!(lookup(&root, "/static"), None);
        assert_eq!(lookup(&root, "/static/x"), Some("/static/*file"));
    }

    #[test]
    fn test_conflict_leaves_no_terminal() {
        let mut root = build(&["/user/:id"]);
        let err = root
            .insert(&Method::GET, "/user/:name", &split_pattern("/user/:name"))
            .unwrap_err();
        assert_eq!(&*err.existing, "/user/:id");
        assert_eq!(&*err.incoming, "/user/:name");

        let mut patterns = Vec::new();
        root.collect_patterns(&mut patterns);
        assert_eq!(patterns.len(), 1);
        assert_eq!(lookup(&root, "/user/bob"), Some("/user/:id"));
    }

    #[test]
    fn test_reinsert_returns_previous_pattern() {
        let mut root = build(&["/user/:name/"]);
        let previous = root
            .insert(&Method::GET, "/user/:name", &split_pattern("/user/:name"))
            .expect("same node");
        assert_eq!(previous.as_deref(), Some("/user/:name/"));
        assert_eq!(lookup(&root, "/user/bob"), Some("/user/:name"));

        let fresh = root
            .insert(&Method::GET, "/user", &split_pattern("/user"))
            .expect("no conflict");
        assert!(fresh.is_none());
    }

    #[test]
    fn test_wildcard_siblings_conflict_but_not_with_named() {
        let mut root = build(&["/f/:name", "/f/*path"]);
        assert!(root
            .insert(&Method::GET, "/f/*other", &split_pattern("/f/*other"))
            .is_err());
    }

    #[test]
    fn test_extract_named_and_wildcard() {
        let terminal = Terminal::new("/user/:name/*rest");
        let params = terminal.extract(&["user", "admin", "a", "b"]);
        assert_eq!(params.len(), 2);
        assert_eq!(&*params[0].0, "name");
        assert_eq!(params[0].1, "admin");
        assert_eq!(&*params[1].0, "rest");
        assert_eq!(params[1].1, "a/b");
    }

    #[test]
    fn test_render_tree() {
        let root = build(&["/a", "/a/:b"]);
        let mut out = String::new();
        root.render(0, &mut out);
        assert_eq!(out, "/\n  a -> /a\n    :b -> /a/:b\n");
    }
}
