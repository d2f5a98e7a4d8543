//! # Shared Router
//!
//! A [`Router`] that can keep accepting registrations while other threads
//! resolve requests against it.
//!
//! Readers load the current router snapshot from an [`ArcSwap`] without
//! locking. Writers serialize on a mutex, clone the current snapshot, insert
//! into the clone and swap it in, so a reader sees either the old or the new
//! trie and never a child list that is being modified.
//!
//! ```rust
//! use http::Method;
//! use std::sync::Arc;
//! use trie_router::shared::SharedRouter;
//!
//! let shared = Arc::new(SharedRouter::default());
//! shared.add_route(Method::GET, "/health");
//!
//! let reader = Arc::clone(&shared);
//! std::thread::spawn(move || {
//!     assert!(reader.resolve(&Method::GET, "/health").is_some());
//! })
//! .join()
//! .unwrap();
//! ```

use arc_swap::ArcSwap;
use http::Method;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::error;

use crate::router::{RouteConflict, RouteMatch, Router};

/// Router handle safe for concurrent resolution and registration
#[derive(Debug)]
pub struct SharedRouter {
    current: ArcSwap<Router>,
    write_lock: Mutex<()>,
}

impl Default for SharedRouter {
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl SharedRouter {
    /// Wrap an already built router
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            write_lock: Mutex::new(()),
        }
    }

    /// Register a route, publishing a new snapshot on success
    ///
    /// Returns the replaced pattern like [`Router::try_add_route`].
    ///
    /// # Errors
    ///
    /// Returns [`RouteConflict`] under the same rule as
    /// [`Router::try_add_route`]; the published router is left untouched.
    pub fn try_add_route(
        &self,
        method: Method,
        pattern: &str,
    ) -> Result<Option<Arc<str>>, RouteConflict> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut next = Router::clone(&self.current.load());
        let replaced = next.try_add_route(method, pattern)?;
        self.current.store(Arc::new(next));
        Ok(replaced)
    }

    /// Register a route, treating a conflict as fatal
    ///
    /// # Panics
    ///
    /// Panics on a conflicting registration, like [`Router::add_route`].
    #[allow(clippy::panic)]
    pub fn add_route(&self, method: Method, pattern: &str) {
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

    /// Resolve against the current snapshot
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.current.load().resolve(method, path)
    }

    /// The currently published router
    #[must_use]
    pub fn snapshot(&self) -> Arc<Router> {
        self.current.load_full()
    }
}
