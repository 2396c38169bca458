//! CLI module for coauthor-graph.
//!
//! Subcommands:
//! - `neighborhood`: Print the bounded neighborhood of a node
//! - `layout`: Extract a neighborhood and compute its 2-D layout
//! - `search`: Find researchers by name
//! - `network`: Print a researcher's direct (1-hop) network
//! - `convert`: Convert GraphML to graph JSON

mod convert;
mod layout;
mod neighborhood;
mod output;
mod search;

use clap::{Parser, Subcommand};

pub use convert::ConvertCommand;
pub use layout::LayoutCommand;
pub use neighborhood::NeighborhoodCommand;
pub use output::{OutputFormat, Response};
pub use search::{NetworkCommand, SearchCommand};

/// coauthor-graph - Co-authorship graph explorer
#[derive(Parser)]
#[command(name = "coauthor-graph")]
#[command(about = "Explore and lay out co-authorship neighborhoods")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the 2-hop neighborhood of a node
    Neighborhood(NeighborhoodCommand),

    /// Extract a neighborhood and compute node positions
    Layout(LayoutCommand),

    /// Find researchers whose name contains a query
    Search(SearchCommand),

    /// Print the direct network of a researcher
    Network(NetworkCommand),

    /// Convert a GraphML file to graph JSON
    Convert(ConvertCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        let format = self.format;
        match self.command {
            Command::Neighborhood(cmd) => cmd.run(format),
            Command::Layout(cmd) => cmd.run(format),
            Command::Search(cmd) => cmd.run(format),
            Command::Network(cmd) => cmd.run(format),
            Command::Convert(cmd) => cmd.run(),
        }
    }
}
