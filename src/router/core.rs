//! Router core module - hot path for request routing.
//!
//! # Allocation discipline
//!
//! [`Router::resolve`] runs once per request. Path tokens borrow from the
//! request path and parameter storage stays inline for up to
//! [`MAX_INLINE_PARAMS`] parameters; the only per-request allocations are the
//! parameter values themselves.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::unnecessary_to_owned)]

use http::Method;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

use super::error::RouteConflict;
use super::pattern::split_pattern;
use super::trie::Node;
use crate::runtime_config::RuntimeConfig;

/// Maximum number of path parameters before heap allocation.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Extracted path parameters, in pattern order.
///
/// Names are shared with the route tree (`Arc<str>`); values are per request.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Result of resolving a request path to a registered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Method the route was registered under
    pub method: Method,
    /// The registered pattern that matched (e.g. `/user/:name`)
    pub pattern: Arc<str>,
    /// Path parameters bound by the pattern's `:name` and `*name` segments
    pub path_params: ParamVec,
}

impl RouteMatch {
    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics when a pattern repeats a parameter
    /// name (e.g. `/org/:id/user/:id` returns the user id).
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Router that maps `(method, path)` pairs to registered patterns
///
/// Every method owns an independent segment trie whose root is created on the
/// first registration for that method. Route lookup costs are proportional to
/// the depth of the path, not to the number of routes.
///
/// # Example
///
/// ```
/// use http::Method;
/// use trie_router::router::Router;
///
/// let mut router = Router::new();
/// router.add_route(Method::GET, "/user/:name");
/// router.add_route(Method::GET, "/static/*file");
///
/// let m = router.resolve(&Method::GET, "/user/admin").expect("match");
/// assert_eq!(&*m.pattern, "/user/:name");
/// assert_eq!(m.get_path_param("name"), Some("admin"));
///
/// let m = router.resolve(&Method::GET, "/static/a/b/test.jpg").expect("match");
/// assert_eq!(m.get_path_param("file"), Some("a/b/test.jpg"));
///
/// assert!(router.resolve(&Method::POST, "/user/admin").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Router {
    roots: HashMap<Method, Node>,
    config: RuntimeConfig,
}

impl Router {
    /// Create an empty router with default runtime settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty router using `config` (see [`RuntimeConfig::from_env`])
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            roots: HashMap::new(),
            config,
        }
    }

    /// Register `pattern` for `method`
    ///
    /// Patterns that split into the same segments share one trie position, so
    /// `/user/:name/` and `/user/:name` are the same route. Registering such a
    /// pattern again stores the new text and returns the pattern it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`RouteConflict`] when the pattern ends on a `:name` or `*name`
    /// segment next to a sibling of the same kind that already ends another
    /// route (e.g. `/user/:id` then `/user/:name`). Nothing is registered in
    /// that case.
    pub fn try_add_route(
        &mut self,
        method: Method,
        pattern: &str,
    ) -> Result<Option<Arc<str>>, RouteConflict> {
        let segments = split_pattern(pattern);
        let root = self.roots.entry(method.clone()).or_insert_with(Node::root);
        let replaced = root.insert(&method, pattern, &segments)?;

        debug!(
            method = %method,
            pattern = %pattern,
            segments = segments.len(),
            replaced = ?replaced,
            "Route registered"
        );
        Ok(replaced)
    }

    /// Register `pattern` for `method`, treating a conflict as fatal
    ///
    /// Route tables are fixed by the service author, so an ambiguous pair of
    /// routes is a programming error that must stop startup.
    ///
    /// # Panics
    ///
    /// Panics with `route conflict(<existing>): <incoming>` on a conflicting
    /// registration. Use [`Router::try_add_route`] to handle it instead.
    #[allow(clippy::panic)]
    pub fn add_route(&mut self, method: Method, pattern: &str) {
        if let Err(conflict) = self.try_add_route(method, pattern) {
            error!(
                method = %conflict.method,
                existing = %conflict.existing,
                incoming = %conflict.incoming,
                "Route conflict"
            );
            panic!("{conflict}");
        }
    }

    /// Resolve a request to its registered route
    ///
    /// The path is tokenized exactly like a pattern; the search tries static
    /// children before parametric ones and backtracks into later siblings when
    /// a branch dead-ends.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - the matched pattern and its bound parameters
    /// * `None` - no route for this method matches the path (a 404)
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        let match_start = Instant::now();

        let Some(root) = self.roots.get(method) else {
            debug!(method = %method, path = %path, "No routes registered for method");
            return None;
        };

        let segments = split_pattern(path);
        let Some(terminal) = root.search(&segments) else {
            debug!(
                method = %method,
                path = %path,
                duration_us = match_start.elapsed().as_micros(),
                "No route matched"
            );
            return None;
        };

        let path_params = terminal.extract(&segments);
        let match_duration = match_start.elapsed();

        if match_duration > self.config.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                route_pattern = %terminal.pattern(),
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        } else {
            debug!(
                method = %method,
                path = %path,
                route_pattern = %terminal.pattern(),
                path_params = ?path_params,
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
        }

        Some(RouteMatch {
            method: method.clone(),
            pattern: Arc::clone(terminal.pattern()),
            path_params,
        })
    }

    /// All registered `(method, pattern)` pairs
    ///
    /// Methods are sorted by name; patterns within a method follow trie order
    /// (depth-first, most specific sibling first).
    #[must_use]
    pub fn patterns(&self) -> Vec<(Method, Arc<str>)> {
        let mut out = Vec::new();
        for method in self.methods() {
            if let Some(root) = self.roots.get(&method) {
                let mut patterns = Vec::new();
                root.collect_patterns(&mut patterns);
                out.extend(patterns.into_iter().map(|p| (method.clone(), p)));
            }
        }
        out
    }

    /// Methods that have at least one trie root, sorted by name
    #[must_use]
    pub fn methods(&self) -> Vec<Method> {
        let mut methods: Vec<Method> = self.roots.keys().cloned().collect();
        methods.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        methods
    }

    /// Number of registered routes across all methods
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.roots
            .values()
            .map(|root| {
                let mut patterns = Vec::new();
                root.collect_patterns(&mut patterns);
                patterns.len()
            })
            .sum()
    }

    /// Render every method's trie as indented text
    ///
    /// ```text
    /// GET
    /// /
    ///   user
    ///     :name -> /user/:name
    /// ```
    #[must_use]
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        for method in self.methods() {
            if let Some(root) = self.roots.get(&method) {
                out.push_str(method.as_str());
                out.push('\n');
                root.render(0, &mut out);
            }
        }
        out
    }
}
