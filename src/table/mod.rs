//! # Route Table Module
//!
//! Declarative route tables loaded from YAML, JSON or TOML files, so a route
//! set can be checked and inspected without compiling a service.
//!
//! ```yaml
//! routes:
//!   - method: GET
//!     path: /user/:name
//!     handler: get_user
//!   - method: GET
//!     path: /static/*file
//!     handler: serve_static
//! ```
//!
//! The same table in TOML:
//!
//! ```toml
//! [[routes]]
//! method = "GET"
//! path = "/user/:name"
//! handler = "get_user"
//! ```
//!
//! Entries are registered in file order, so a conflicting pair is reported
//! against the entry that appears first.

mod load;
mod types;

pub use load::{load_route_table, parse_route_table, TableFormat};
pub use types::{RouteEntry, RouteTable};
