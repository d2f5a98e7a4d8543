//! # Router Module
//!
//! Path matching and route resolution. Routes are `(method, pattern)` pairs
//! where a pattern is a `/`-separated list of segments:
//!
//! | Segment | Kind | Matches |
//! |---|---|---|
//! | `users` | static | exactly `users` |
//! | `:name` | named | any single segment, bound to `name` |
//! | `*path` | wildcard | one or more remaining segments, joined by `/`, bound to `path` |
//!
//! A wildcard is always the last segment; anything written after it in a
//! pattern is ignored. A bare `*` is an ordinary static segment.
//!
//! ## Architecture
//!
//! 1. **Registration**: [`Router::add_route`] splits the pattern and walks (or
//!    grows) the method's trie one segment per level. Children are kept sorted
//!    static, named, wildcard. Two parametric routes of the same kind ending
//!    side by side are rejected as a [`RouteConflict`].
//!
//! 2. **Resolution**: [`Router::resolve`] walks the same trie depth-first,
//!    trying the exact static child before parametric ones and backtracking
//!    on dead ends. The matched pattern's parameter positions are then bound
//!    against the request path's segments.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use trie_router::router::Router;
//!
//! let mut router = Router::new();
//! router.add_route(Method::GET, "/chen/:name");
//! router.add_route(Method::GET, "/chen/12/nihao");
//! router.add_route(Method::GET, "/chen/:age/nihao");
//!
//! let m = router.resolve(&Method::GET, "/chen/12/nihao").unwrap();
//! assert_eq!(&*m.pattern, "/chen/12/nihao");
//! assert!(m.path_params.is_empty());
//! ```
//!
//! ## Performance
//!
//! - Lookup is O(depth × branching at ambiguous nodes), independent of the
//!   total number of routes
//! - Resolution never mutates the router, so a built router can be shared
//!   across threads behind an `Arc` (see [`crate::shared::SharedRouter`] for
//!   registration while serving)

mod core;
mod error;
mod pattern;
mod trie;

pub use core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use error::RouteConflict;
pub use pattern::{split_pattern, SegmentKind, Segments, MAX_INLINE_SEGMENTS};
