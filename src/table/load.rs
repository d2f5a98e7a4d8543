use anyhow::{bail, Context};
use std::path::Path;

use super::types::RouteTable;

/// Serialization format of a route table file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Yaml,
    Json,
    Toml,
}

impl TableFormat {
    /// Pick the format from a file extension (`yaml`, `yml`, `json`, `toml`)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(TableFormat::Yaml),
            "json" => Some(TableFormat::Json),
            "toml" => Some(TableFormat::Toml),
            _ => None,
        }
    }
}

/// Parse a route table from a string
///
/// # Errors
///
/// Returns an error if the content does not deserialize into a [`RouteTable`].
pub fn parse_route_table(content: &str, format: TableFormat) -> anyhow::Result<RouteTable> {
    let table = match format {
        TableFormat::Yaml => serde_yaml::from_str(content)?,
        TableFormat::Json => serde_json::from_str(content)?,
        TableFormat::Toml => toml::from_str(content)?,
    };
    Ok(table)
}

/// Load a route table file, choosing the format by extension
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension, or
/// does not parse.
pub fn load_route_table<P: AsRef<Path>>(path: P) -> anyhow::Result<RouteTable> {
    let path = path.as_ref();
    let Some(format) = TableFormat::from_path(path) else {
        bail!(
            "unsupported route table extension: {} (expected .yaml, .yml, .json or .toml)",
            path.display()
        );
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route table {}", path.display()))?;
    parse_route_table(&content, format)
        .with_context(|| format!("failed to parse route table {}", path.display()))
}
