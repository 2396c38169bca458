//! Neighborhood subcommand - print the extracted subgraph.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use crate::config::Config;
use crate::loader::load_graph;
use crate::services::NeighborhoodService;

use super::{OutputFormat, Response};

/// Print the bounded neighborhood of a node.
#[derive(Parser)]
pub struct NeighborhoodCommand {
    /// Path to a graph file (JSON or GraphML).
    pub graph: PathBuf,

    /// ID of the selected node.
    pub id: String,
}

impl NeighborhoodCommand {
    /// Run the neighborhood command.
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let config = Config::load()?;
        let graph = load_graph(&self.graph)?;

        let subgraph = NeighborhoodService::from_config(&config.extraction).extract(&graph, &self.id);
        if subgraph.is_empty() {
            tracing::warn!(id = %self.id, "Node not found, neighborhood is empty");
        }
        tracing::info!(
            "Neighborhood of {}: {} nodes, {} links",
            self.id,
            subgraph.nodes.len(),
            subgraph.links.len()
        );

        Response(subgraph, format).print()?;
        Ok(())
    }
}
