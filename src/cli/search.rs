//! Search and network subcommands.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use serde::Serialize;

use crate::loader::load_graph;
use crate::services::{direct_network, display_name, find_researchers};

use super::{OutputFormat, Response};

/// Find researchers whose name contains a query (case-insensitive).
#[derive(Parser)]
pub struct SearchCommand {
    /// Path to a graph file (JSON or GraphML).
    pub graph: PathBuf,

    /// Text to look for in researcher names.
    pub query: String,

    /// Maximum number of results.
    #[arg(long, default_value = "10")]
    pub limit: usize,
}

/// One search hit.
#[derive(Debug, Serialize)]
struct SearchHit {
    id: String,
    name: String,
}

impl SearchCommand {
    /// Run the search command.
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let graph = load_graph(&self.graph)?;
        let hits: Vec<SearchHit> = find_researchers(&graph, &self.query)
            .into_iter()
            .take(self.limit)
            .map(|n| SearchHit {
                id: n.id.clone(),
                name: display_name(n),
            })
            .collect();

        if hits.is_empty() {
            tracing::warn!(query = %self.query, "No researcher found with that name");
        }
        Response(hits, format).print()?;
        Ok(())
    }
}

/// Print the direct (1-hop) network of a researcher.
#[derive(Parser)]
pub struct NetworkCommand {
    /// Path to a graph file (JSON or GraphML).
    pub graph: PathBuf,

    /// Text contained in the researcher's id (e.g. an ORCID) or label.
    pub query: String,
}

impl NetworkCommand {
    /// Run the network command.
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let graph = load_graph(&self.graph)?;
        let network = direct_network(&graph, &self.query)?;
        tracing::info!(
            "Direct network: {} nodes, {} links",
            network.nodes.len(),
            network.links.len()
        );
        Response(network, format).print()?;
        Ok(())
    }
}
