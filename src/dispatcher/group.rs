use http::Method;

use super::core::Dispatcher;
use crate::router::RouteConflict;

/// Join a group prefix and a pattern into one absolute pattern.
///
/// Empty segments on either side are dropped, so neither doubled nor missing
/// slashes reach the router; a trailing slash is dropped too.
pub(super) fn join_paths(prefix: &str, pattern: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + pattern.len() + 1);
    for segment in prefix
        .split('/')
        .chain(pattern.split('/'))
        .filter(|s| !s.is_empty())
    {
        joined.push('/');
        joined.push_str(segment);
    }
    if joined.is_empty() {
        joined.push('/');
    }
    joined
}

/// Registration handle that places every route below a common prefix
///
/// Created by [`Dispatcher::group`] or [`RouteGroup::group`]; it borrows the
/// dispatcher mutably, so registrations go straight into the shared tables.
#[derive(Debug)]
pub struct RouteGroup<'a, H> {
    dispatcher: &'a mut Dispatcher<H>,
    prefix: String,
}

impl<'a, H> RouteGroup<'a, H> {
    pub(super) fn new(dispatcher: &'a mut Dispatcher<H>, prefix: String) -> Self {
        Self { dispatcher, prefix }
    }

    /// Normalized prefix of this group (`/` for the top level)
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Open a nested group below this group's prefix
    #[must_use]
    pub fn group(&mut self, prefix: &str) -> RouteGroup<'_, H> {
        let prefix = join_paths(&self.prefix, prefix);
        RouteGroup::new(&mut *self.dispatcher, prefix)
    }

    /// Register `handler` for `pattern` below this group's prefix
    ///
    /// # Errors
    ///
    /// Returns [`RouteConflict`] for the joined pattern, see
    /// [`Dispatcher::try_register`].
    pub fn try_register(
        &mut self,
        method: Method,
        pattern: &str,
        handler: H,
    ) -> Result<(), RouteConflict> {
        let pattern = join_paths(&self.prefix, pattern);
        self.dispatcher.try_register(method, &pattern, handler)
    }

    /// Register `handler`, treating a route conflict as fatal
    ///
    /// # Panics
    ///
    /// Panics on a conflicting registration, like [`Dispatcher::register`].
    pub fn register(&mut self, method: Method, pattern: &str, handler: H) {
        let pattern = join_paths(&self.prefix, pattern);
        self.dispatcher.register(method, &pattern, handler);
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
}
