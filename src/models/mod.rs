//! Domain models for the co-authorship graph.

mod edge;
mod entity_type;
mod graph;
mod node;

pub use edge::Edge;
pub use entity_type::EntityType;
pub use graph::{Graph, Subgraph};
pub use node::{Node, NodeDetails};
