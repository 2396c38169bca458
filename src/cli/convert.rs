//! Convert subcommand - GraphML to graph JSON.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use crate::loader::{graphml, json};

/// Convert a GraphML file to graph JSON.
#[derive(Parser)]
pub struct ConvertCommand {
    /// Path to the GraphML file.
    pub input: PathBuf,

    /// Output path. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConvertCommand {
    /// Run the convert command.
    pub fn run(self) -> Result<()> {
        let content = std::fs::read_to_string(&self.input)?;
        let graph = graphml::parse(&content)?;

        match &self.output {
            Some(path) => {
                json::save(&graph, path)?;
                tracing::info!(
                    "Parsed graph saved to {} ({} nodes, {} links)",
                    path.display(),
                    graph.nodes.len(),
                    graph.links.len()
                );
            }
            None => println!("{}", json::to_string(&graph)?),
        }
        Ok(())
    }
}
