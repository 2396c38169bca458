//! 2-D Graph Layout Module
//!
//! Computes positions for an extracted neighborhood so a renderer can draw
//! nodes, edges, and labels.
//!
//! ## Module Structure
//!
//! - `graph` - Force-directed layout algorithm
//! - `scene` - Positioned nodes and links for renderers
//! - `constants` - Canvas size and physics defaults

pub mod constants;
mod graph;
mod scene;

pub use graph::{layout, GraphLayout, LayoutEdge, LayoutNode};
pub use scene::{PositionedLink, PositionedNode, Scene};
