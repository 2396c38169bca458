//! Graph JSON (`{"nodes": [...], "links": [...]}`) reading and writing.

use std::path::Path;

use crate::error::AppError;
use crate::models::Graph;

/// Parse and validate a graph from JSON text.
pub fn parse(content: &str) -> Result<Graph, AppError> {
    let graph: Graph = serde_json::from_str(content)?;
    graph.validate()?;
    Ok(graph)
}

/// Pretty-printed JSON for a graph.
pub fn to_string(graph: &Graph) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Write a graph as pretty-printed JSON.
pub fn save(graph: &Graph, path: &Path) -> Result<(), AppError> {
    std::fs::write(path, to_string(graph)?)?;
    Ok(())
}
