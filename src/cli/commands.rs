use anyhow::Context;
use clap::{Parser, Subcommand};
use http::Method;
use std::collections::BTreeMap;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::logging::{init_logging_with_config, LogConfig};
use crate::runtime_config::RuntimeConfig;
use crate::table::load_route_table;

/// Command-line interface for route tables
#[derive(Parser)]
#[command(name = "trie-router")]
#[command(about = "Check, inspect and query HTTP route tables", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build the route table and report conflicts
    Check {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,
    },
    /// Resolve a request path against the route table
    Resolve {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,

        /// HTTP method of the request
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request path (e.g. /user/admin)
        path: String,
    },
    /// Print the route trie for every method
    Tree {
        /// Route table file (.yaml, .yml, .json or .toml)
        #[arg(short, long)]
        routes: PathBuf,
    },
}

/// Parse arguments, initialize logging and run the selected command
///
/// # Errors
///
/// Returns an error if the route table cannot be loaded, contains a conflict
/// or an invalid method, or if logging cannot be installed.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config.log_level = "debug".to_string();
    } else if env::var_os("TRIE_ROUTER_LOG_LEVEL").is_none() {
        log_config.log_level = "warn".to_string();
    }
    let _guard = init_logging_with_config(&log_config)?;

    let stdout = std::io::stdout();
    run_command(&cli.command, &mut stdout.lock())
}

/// Run one command, writing its report to `out`
///
/// # Errors
///
/// See [`run_cli`].
pub fn run_command<W: Write>(command: &Commands, out: &mut W) -> anyhow::Result<()> {
    let config = RuntimeConfig::from_env();

    match command {
        Commands::Check { routes } => {
            let table = load_route_table(routes)?;
            let router = table
                .build_router_with_config(config)
                .with_context(|| format!("route table {} is invalid", routes.display()))?;
            writeln!(
                out,
                "ok: {} routes across {} methods",
                router.route_count(),
                router.methods().len()
            )?;
            Ok(())
        }
        Commands::Resolve {
            routes,
            method,
            path,
        } => {
            let method = Method::from_str(&method.to_ascii_uppercase())
                .with_context(|| format!("invalid HTTP method '{method}'"))?;
            let dispatcher = load_route_table(routes)?.build_dispatcher(config)?;

            match dispatcher.dispatch(&method, path) {
                Some((handler, route_match)) => {
                    let params: BTreeMap<String, String> =
                        route_match.path_params_map().into_iter().collect();
                    let report = serde_json::json!({
                        "method": route_match.method.as_str(),
                        "pattern": &*route_match.pattern,
                        "handler": &**handler,
                        "params": params,
                    });
                    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                }
                None => writeln!(out, "404 Not Found: {path}")?,
            }
            Ok(())
        }
        Commands::Tree { routes } => {
            let router = load_route_table(routes)?.build_router_with_config(config)?;
            write!(out, "{}", router.dump_tree())?;
            Ok(())
        }
    }
}
