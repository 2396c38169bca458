//! Layout subcommand - extract a neighborhood and position it.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::config::Config;
use crate::loader::load_graph;
use crate::models::Graph;
use crate::services::{default_selection, find_researchers, GraphService};

use super::{OutputFormat, Response};

/// Compute a 2-D layout for the neighborhood of a node.
#[derive(Parser)]
pub struct LayoutCommand {
    /// Path to a graph file (JSON or GraphML).
    pub graph: PathBuf,

    /// ID of the selected node. Defaults to the first researcher.
    #[arg(long, conflicts_with = "name")]
    pub id: Option<String>,

    /// Select the first researcher whose name contains this text.
    #[arg(long)]
    pub name: Option<String>,

    /// Canvas width.
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    pub height: Option<f64>,

    /// Number of simulation ticks.
    #[arg(long)]
    pub iterations: Option<usize>,
}

impl LayoutCommand {
    /// Run the layout command.
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(width) = self.width {
            config.layout.width = width;
        }
        if let Some(height) = self.height {
            config.layout.height = height;
        }
        if let Some(iterations) = self.iterations {
            config.layout.iterations = iterations;
        }

        let graph = load_graph(&self.graph)?;
        let selected = self.resolve_selection(&graph)?;
        tracing::info!("Laying out neighborhood of {}", selected);

        let scene = GraphService::from_config(&config).explore(&graph, &selected)?;
        tracing::info!(
            "Positioned {} nodes and {} links on {}x{}",
            scene.nodes.len(),
            scene.links.len(),
            scene.width,
            scene.height
        );

        Response(scene, format).print()?;
        Ok(())
    }

    /// Pick the selected node: explicit id, then name search, then the first researcher.
    fn resolve_selection(&self, graph: &Graph) -> Result<String> {
        if let Some(id) = &self.id {
            return Ok(id.clone());
        }
        if let Some(name) = &self.name {
            return find_researchers(graph, name)
                .first()
                .map(|n| n.id.clone())
                .ok_or_else(|| eyre!("No researcher found with name matching '{}'", name));
        }
        default_selection(graph)
            .map(|n| n.id.clone())
            .ok_or_else(|| eyre!("Graph {} has no researchers", self.graph.display()))
    }
}
