use http::Method;
use std::fmt;
use std::sync::Arc;

/// Route registration error.
///
/// Returned by [`Router::try_add_route`](super::Router::try_add_route) when a
/// pattern would terminate next to a sibling parameter (or wildcard) segment
/// that already ends another route. Both routes would match the same paths
/// under different parameter names, so the route table itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConflict {
    /// Method whose trie holds both routes
    pub method: Method,
    /// Pattern already registered at the ambiguous position
    pub existing: Arc<str>,
    /// Pattern that was rejected
    pub incoming: Arc<str>,
}

impl fmt::Display for RouteConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route conflict({}): {}", self.existing, self.incoming)
    }
}

impl std::error::Error for RouteConflict {}
