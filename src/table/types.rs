use anyhow::Context;
use http::Method;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::dispatcher::Dispatcher;
use crate::router::Router;
use crate::runtime_config::RuntimeConfig;

/// One route declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// HTTP method; matched case-insensitively against standard methods
    pub method: String,
    /// Route pattern (e.g. `/user/:name`)
    pub path: String,
    /// Handler name; defaults to the pattern itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

impl RouteEntry {
    /// Parse the declared method
    ///
    /// # Errors
    ///
    /// Returns an error if the method is not a valid HTTP method token.
    pub fn parse_method(&self) -> anyhow::Result<Method> {
        Method::from_str(&self.method.to_ascii_uppercase())
            .with_context(|| format!("invalid HTTP method '{}' for {}", self.method, self.path))
    }

    /// Handler name for this entry
    #[must_use]
    pub fn handler_name(&self) -> &str {
        self.handler.as_deref().unwrap_or(&self.path)
    }
}

/// A full set of route declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Declarations in registration order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a router with default runtime settings
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid method or a route conflict.
    pub fn build_router(&self) -> anyhow::Result<Router> {
        self.build_router_with_config(RuntimeConfig::default())
    }

    /// Build a router using `config`
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid method or a route conflict.
    pub fn build_router_with_config(&self, config: RuntimeConfig) -> anyhow::Result<Router> {
        let mut router = Router::with_config(config);
        for entry in &self.routes {
            let method = entry.parse_method()?;
            router.try_add_route(method, &entry.path)?;
        }

        info!(
            routes_count = router.route_count(),
            methods = ?router.methods(),
            "Routing table loaded"
        );
        Ok(router)
    }

    /// Build a dispatcher whose handlers are the declared handler names
    ///
    /// # Errors
    ///
    /// Returns an error on an invalid method or a route conflict.
    pub fn build_dispatcher(&self, config: RuntimeConfig) -> anyhow::Result<Dispatcher<Arc<str>>> {
        let mut dispatcher = Dispatcher::with_router(Router::with_config(config));
        for entry in &self.routes {
            let method = entry.parse_method()?;
            dispatcher.try_register(method, &entry.path, Arc::from(entry.handler_name()))?;
        }

        info!(
            routes_count = dispatcher.router().route_count(),
            handlers = dispatcher.handler_count(),
            "Dispatch table loaded"
        );
        Ok(dispatcher)
    }
}
