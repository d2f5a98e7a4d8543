//! # CLI Module
//!
//! Command-line tooling for route tables (see [`crate::table`]).
//!
//! ## Commands
//!
//! ### `check`
//!
//! Load a route table and build its tries; exits non-zero on a route conflict:
//!
//! ```bash
//! trie-router check --routes routes.yaml
//! ```
//!
//! ### `resolve`
//!
//! Resolve one request against a route table and print the match as JSON:
//!
//! ```bash
//! trie-router resolve --routes routes.yaml --method GET /user/admin
//! ```
//!
//! ### `tree`
//!
//! Print every method's trie:
//!
//! ```bash
//! trie-router tree --routes routes.yaml
//! ```
//!
//! Logging goes through [`crate::logging`]; the CLI defaults to `warn` unless
//! `TRIE_ROUTER_LOG_LEVEL` or `--verbose` says otherwise.

mod commands;


pub use commands::{run_cli, run_command, Cli, Commands};
