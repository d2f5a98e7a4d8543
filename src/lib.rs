//! # trie-router
//!
//! **trie-router** is an embeddable HTTP request router. Given a set of
//! registered `(method, pattern)` routes it maps an incoming `(method, path)`
//! to the single matching route and extracts its path parameters, in time
//! proportional to the depth of the path rather than the number of routes.
//!
//! ## Overview
//!
//! Patterns are `/`-separated segments of three kinds:
//!
//! - `users` - static text, matched exactly
//! - `:name` - one path segment, bound to the parameter `name`
//! - `*path` - every remaining segment (at least one), joined by `/`, bound to `path`
//!
//! Each HTTP method gets its own segment trie. Children are ordered most
//! specific first, so `/chen/12/nihao` wins over `/chen/:age/nihao` for the
//! path `/chen/12/nihao`, while the search still backtracks into parametric
//! siblings when a static branch dead-ends.
//!
//! ## Architecture
//!
//! - **[`router`]** - pattern parsing, the per-method tries, conflict detection and resolution
//! - **[`dispatcher`]** - handler table keyed by the matched pattern
//! - **[`shared`]** - lock-free reads with registration while serving
//! - **[`table`]** - route tables loaded from YAML, JSON or TOML files
//! - **[`runtime_config`]** - environment-driven runtime settings
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `trie-router` command-line tool
//!
//! ### Request Resolution Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Server as HTTP server
//!     participant Dispatcher
//!     participant Router
//!     participant Trie as Method trie
//!
//!     Server->>Dispatcher: dispatch(GET, "/user/admin")
//!     Dispatcher->>Router: resolve(GET, "/user/admin")
//!     Router->>Router: split_pattern → ["user", "admin"]
//!     Router->>Trie: depth-first search<br/>(static before named before wildcard)
//!     alt No route
//!         Trie-->>Router: None
//!         Router-->>Dispatcher: None
//!         Dispatcher-->>Server: None (404)
//!     end
//!     Trie-->>Router: terminal "/user/:name"
//!     Router->>Router: bind params {name: "admin"}
//!     Router-->>Dispatcher: RouteMatch
//!     Dispatcher-->>Server: (handler, RouteMatch)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use trie_router::router::Router;
//!
//! let mut router = Router::new();
//! router.add_route(Method::GET, "/index");
//! router.add_route(Method::GET, "/user/:name");
//! router.add_route(Method::GET, "/static/*file");
//!
//! let m = router.resolve(&Method::GET, "/user/admin").unwrap();
//! assert_eq!(&*m.pattern, "/user/:name");
//! assert_eq!(m.get_path_param("name"), Some("admin"));
//!
//! assert!(router.resolve(&Method::GET, "/missing").is_none());
//! ```
//!
//! ## Errors
//!
//! Registration fails only on a route conflict: two `:param` (or two
//! `*param`) segments ending routes side by side under the same parent, such
//! as `/user/:id` and `/user/:name`. [`Router::add_route`](router::Router::add_route)
//! panics on it, since it is a bug in the route table; use
//! [`Router::try_add_route`](router::Router::try_add_route) to receive a
//! [`RouteConflict`] instead. A path with no route is an ordinary `None`.
//!
//! ## Concurrency
//!
//! A built [`Router`] is read-only during resolution and can be shared across
//! threads. For registration after serving has started, use
//! [`SharedRouter`], which swaps in a new trie snapshot on each insert.

pub mod cli;
pub mod dispatcher;
pub mod logging;
pub mod router;
pub mod runtime_config;
pub mod shared;
pub mod table;

pub use dispatcher::Dispatcher;
pub use router::{RouteConflict, RouteMatch, Router};
pub use shared::SharedRouter;
pub use table::{load_route_table, RouteTable};
