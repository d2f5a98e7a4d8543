//! # Dispatcher Module
//!
//! Pairs a [`Router`](crate::router::Router) with the handlers registered for
//! each route. This is the surface an HTTP server consumes: register a handler
//! under `(method, pattern)` at startup, then dispatch every request to the
//! handler of the route it resolves to.
//!
//! ## Handler Registration
//!
//! ```rust
//! use http::Method;
//! use trie_router::dispatcher::Dispatcher;
//! use trie_router::router::RouteMatch;
//!
//! type Handler = fn(&RouteMatch) -> String;
//!
//! let mut dispatcher: Dispatcher<Handler> = Dispatcher::new();
//! dispatcher.get("/user/:name", |m| format!("hello {}", m.get_path_param("name").unwrap_or("")));
//!
//! let (handler, route_match) = dispatcher
//!     .dispatch(&Method::GET, "/user/admin")
//!     .expect("registered route");
//! assert_eq!(handler(&route_match), "hello admin");
//! ```
//!
//! ## Route Groups
//!
//! [`Dispatcher::group`] returns a [`RouteGroup`] that registers every pattern
//! below a prefix. Groups nest, and prefixes are joined segment by segment, so
//! `group("/api/")` followed by `get("/users")` registers `/api/users`.
//!
//! ## Request Flow
//!
//! 1. The router resolves `(method, path)` to a registered pattern
//! 2. The dispatcher looks up the handler stored for that method and pattern
//! 3. The caller invokes the handler with the [`RouteMatch`](crate::router::RouteMatch)
//!
//! An unmatched request yields `None`, which the server turns into a 404.
//! Handlers are opaque to the dispatcher: any `H` works, from plain function
//! pointers to boxed closures or handler names loaded from a route table.

mod core;
mod group;

pub use core::Dispatcher;
pub use group::RouteGroup;
