//! Graph snapshot and extracted subgraph models.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Edge, Node};
use crate::error::AppError;

/// An immutable snapshot of all nodes and edges.
///
/// Edges whose endpoints are missing from `nodes` are tolerated; lookups
/// through them simply find nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in stored order.
    pub nodes: Vec<Node>,
    /// Edges in stored order.
    #[serde(alias = "edges")]
    pub links: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, links: Vec<Edge>) -> Self {
        Self { nodes, links }
    }

    /// Find a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Index nodes by ID. The first occurrence wins for duplicate IDs.
    pub fn node_index(&self) -> HashMap<&str, &Node> {
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            index.entry(node.id.as_str()).or_insert(node);
        }
        index
    }

    /// Check structural well-formedness.
    ///
    /// Rejects empty node IDs, duplicate node IDs and edges with an empty
    /// endpoint. Dangling endpoints are allowed.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if node.id.is_empty() {
                return Err(AppError::Validation(format!("node #{} has an empty id", i)));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate node id: {}",
                    node.id
                )));
            }
        }
        for (i, edge) in self.links.iter().enumerate() {
            if edge.source.is_empty() || edge.target.is_empty() {
                return Err(AppError::Validation(format!(
                    "link #{} has an empty endpoint",
                    i
                )));
            }
        }
        Ok(())
    }
}

/// Result of a neighborhood extraction.
///
/// Nodes and links are clones taken from the source graph, kept in the
/// graph's stored order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Edge>,
}

impl Subgraph {
    /// The empty subgraph, returned for unknown or empty selections.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Node IDs in order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}
