//! Graph loading from disk.
//!
//! Files ending in `.graphml` or `.xml` are read as GraphML; anything else
//! is read as graph JSON.

pub mod graphml;
pub mod json;

use std::path::Path;

use crate::error::AppError;
use crate::models::Graph;

/// Input format of a graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    GraphMl,
}

impl GraphFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("graphml") | Some("xml") => GraphFormat::GraphMl,
            _ => GraphFormat::Json,
        }
    }
}

/// Load and validate a graph file.
pub fn load_graph(path: &Path) -> Result<Graph, AppError> {
    let content = std::fs::read_to_string(path)?;
    let format = GraphFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "Loading graph");
    match format {
        GraphFormat::Json => json::parse(&content),
        GraphFormat::GraphMl => graphml::parse(&content),
    }
}
