use http::Method;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::group::{join_paths, RouteGroup};
use crate::router::{RouteConflict, RouteMatch, Router};

/// Route table plus the handler registered for every route
#[derive(Debug, Clone)]
pub struct Dispatcher<H> {
    router: Router,
    handlers: HashMap<Method, HashMap<Arc<str>, H>>,
}

impl<H> Default for Dispatcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Dispatcher<H> {
    /// Create a dispatcher with an empty router
    #[must_use]
    pub fn new() -> Self {
        Self::with_router(Router::new())
    }

    /// Create a dispatcher around a router, typically one built with
    /// [`Router::with_config`]
    ///
    /// Routes already present in `router` have no handler until registered.
    #[must_use]
    pub fn with_router(router: Router) -> Self {
        Dispatcher {
            router,
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `method` and `pattern`
    ///
    /// **IMPORTANT**: registering a route that already has a handler replaces
    /// the old handler. Routes are compared by their segments, so
    /// `/user/:name/` and `/user/:name` are the same route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteConflict`] if the router rejects the pattern; the handler
    /// is dropped in that case.
    pub fn try_register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), RouteConflict> {
        let replaced = self.router.try_add_route(method.clone(), pattern)?;

        let by_pattern = self.handlers.entry(method.clone()).or_default();
        let previous = replaced.and_then(|old| by_pattern.remove(&old));
        by_pattern.insert(Arc::from(pattern), handler);
        if previous.is_some() {
            warn!(
                method = %method,
                pattern = %pattern,
                "Replaced existing handler"
            );
        }

        debug!(
            method = %method,
            pattern = %pattern,
            total_handlers = self.handler_count(),
            "Handler registered"
        );
        Ok(())
    }

    /// Register `handler`, treating a route conflict as fatal
    ///
    /// # Panics
    ///
    /// Panics on a conflicting registration, like [`Router::add_route`].
    #[allow(clippy::panic)]
    pub fn register(&mut self, method: Method, pattern: &str, handler: H) {
        if let Err(conflict) = self.try_register(method, pattern, handler) {
            error!(
                method = %conflict.method,
                existing = %conflict.existing,
                incoming = %conflict.incoming,
                "Route conflict"
            );
            panic!("{conflict}");
        }
    }

    /// Register a `GET` handler
    pub fn get(&mut self, pattern: &str, handler: H) {
        self.register(Method::GET, pattern, handler);
    }

    /// Register a `POST` handler
    pub fn post(&mut self, pattern: &str, handler: H) {
        self.register(Method::POST, pattern, handler);
    }

    /// Register a `PUT` handler
    pub fn put(&mut self, pattern: &str, handler: H) {
        self.register(Method::PUT, pattern, handler);
    }

    /// Register a `DELETE` handler
    pub fn delete(&mut self, pattern: &str, handler: H) {
        self.register(Method::DELETE, pattern, handler);
    }

    /// Register a `PATCH` handler
    pub fn patch(&mut self, pattern: &str, handler: H) {
        self.register(Method::PATCH, pattern, handler);
    }

    /// Register an `OPTIONS` handler
    pub fn options(&mut self, pattern: &str, handler: H) {
        self.register(Method::OPTIONS, pattern, handler);
    }

    /// Register a `HEAD` handler
    pub fn head(&mut self, pattern: &str, handler: H) {
        self.register(Method::HEAD, pattern, handler);
    }

    /// Open a route group whose patterns are registered below `prefix`
    ///
    /// ```rust
    /// use http::Method;
    /// use trie_router::dispatcher::Dispatcher;
    ///
    /// let mut dispatcher = Dispatcher::new();
    /// let mut api = dispatcher.group("/api");
    /// api.group("v1").get("/users/:id", "get_user");
    ///
    /// let (handler, m) = dispatcher.dispatch(&Method::GET, "/api/v1/users/7").unwrap();
    /// assert_eq!(*handler, "get_user");
    /// assert_eq!(&*m.pattern, "/api/v1/users/:id");
    /// ```
    #[must_use]
    pub fn group(&mut self, prefix: &str) -> RouteGroup<'_, H> {
        RouteGroup::new(self, join_paths("", prefix))
    }

    /// Resolve a request and return its handler with the route match
    ///
    /// Returns `None` when no route matches, or when the matched route was
    /// added to the router directly and never given a handler.
    #[must_use]
    pub fn dispatch(&self, method: &Method, path: &str) -> Option<(&H, RouteMatch)> {
        let route_match = self.router.resolve(method, path)?;

        match self.handler(method, &route_match.pattern) {
            Some(handler) => Some((handler, route_match)),
            None => {
                error!(
                    method = %method,
                    path = %path,
                    route_pattern = %route_match.pattern,
                    "Handler not found for matched route"
                );
                None
            }
        }
    }

    /// Handler registered for exactly this method and pattern
    #[must_use]
    pub fn handler(&self, method: &Method, pattern: &str) -> Option<&H> {
        self.handlers.get(method)?.get(pattern)
    }

    /// Number of registered handlers across all methods
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    /// The underlying router
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_returns_handler_and_params() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/user/:name", "get_user");
        dispatcher.post("/user/:name", "update_user");

        let (handler, m) = dispatcher.dispatch(&Method::POST, "/user/bob").unwrap();
        assert_eq!(*handler, "update_user");
        assert_eq!(m.get_path_param("name"), Some("bob"));
    }

    #[test]
    fn test_reregistering_replaces_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/index", 1);
        dispatcher.get("/index", 2);
        assert_eq!(dispatcher.handler_count(), 1);
        assert_eq!(dispatcher.dispatch(&Method::GET, "/index").unwrap().0, &2);
    }

    #[test]
    fn test_equivalent_pattern_replaces_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/user/:name/", "a");
        dispatcher.get("/user/:name", "b");

        assert_eq!(dispatcher.handler_count(), dispatcher.router().route_count());
        assert!(dispatcher.handler(&Method::GET, "/user/:name/").is_none());
        let (handler, m) = dispatcher.dispatch(&Method::GET, "/user/bob").unwrap();
        assert_eq!(*handler, "b");
        assert_eq!(&*m.pattern, "/user/:name");
    }

    #[test]
    fn test_conflict_drops_handler() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/user/:id", "by_id");
        assert!(dispatcher
            .try_register(Method::GET, "/user/:name", "by_name")
            .is_err());
        assert_eq!(dispatcher.handler_count(), 1);
        assert!(dispatcher.handler(&Method::GET, "/user/:name").is_none());
    }

    #[test]
    fn test_route_without_handler_is_not_dispatched() {
        let mut router = Router::new();
        router.add_route(Method::GET, "/bare");
        let dispatcher: Dispatcher<&str> = Dispatcher::with_router(router);
        assert!(dispatcher.router().resolve(&Method::GET, "/bare").is_some());
        assert!(dispatcher.dispatch(&Method::GET, "/bare").is_none());
    }
}
