//! Business logic over an in-memory graph snapshot.

pub mod details;
mod graph;
pub mod neighborhood;
pub mod search;

pub use details::{describe_link, display_name, node_details, LinkDetails};
pub use graph::GraphService;
pub use neighborhood::{extract, one_hop_neighbors, NeighborhoodService};
pub use search::{default_selection, direct_network, find_researchers};
