//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the router's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `TRIE_ROUTER_SLOW_MATCH_US`
//!
//! Resolutions that take longer than this many microseconds are logged at
//! `WARN` with the matched pattern and duration. Accepts decimal values.
//!
//! Default: `1000` (1 ms)
//!
//! ## Usage
//!
//! ```rust
//! use trie_router::router::Router;
//! use trie_router::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! let router = Router::with_config(config);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! # Flag anything slower than 200µs
//! export TRIE_ROUTER_SLOW_MATCH_US=200
//! ```

use std::env;
use std::time::Duration;

/// Environment variable holding the slow-match threshold in microseconds
pub const SLOW_MATCH_ENV: &str = "TRIE_ROUTER_SLOW_MATCH_US";

const DEFAULT_SLOW_MATCH_US: u64 = 1_000;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`] and pass it to
/// [`Router::with_config`](crate::router::Router::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Resolutions slower than this are logged as slow (default: 1 ms)
    pub slow_match_threshold: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let slow_match_us = lookup(SLOW_MATCH_ENV)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SLOW_MATCH_US);

        RuntimeConfig {
            slow_match_threshold: Duration::from_micros(slow_match_us),
        }
    }
}
