//! Bounded neighborhood extraction around a selected node.

use std::collections::HashSet;

use crate::config::ExtractionConfig;
use crate::models::{Edge, Graph, Subgraph};

/// Extracts the 2-hop neighborhood of a node, keeping anchor-typed nodes.
///
/// Anchors are the selected node (whatever its type) plus every node of
/// `anchor_type` within two hops. The result holds every edge with at least
/// one anchor endpoint, every node on those edges, and all anchors.
#[derive(Debug, Clone)]
pub struct NeighborhoodService {
    anchor_type: String,
}

impl Default for NeighborhoodService {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }
}

impl NeighborhoodService {
    pub fn new(anchor_type: impl Into<String>) -> Self {
        Self {
            anchor_type: anchor_type.into(),
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(config.anchor_type.clone())
    }

    pub fn anchor_type(&self) -> &str {
        &self.anchor_type
    }

    /// Extract the neighborhood of `selected_id`.
    ///
    /// An empty or unknown id yields the empty subgraph. Output nodes and
    /// links keep the graph's stored order, so repeated calls are identical.
    pub fn extract(&self, graph: &Graph, selected_id: &str) -> Subgraph {
        if selected_id.is_empty() {
            return Subgraph::empty();
        }
        let index = graph.node_index();
        if !index.contains_key(selected_id) {
            tracing::debug!(selected = %selected_id, "Selected node not in graph");
            return Subgraph::empty();
        }

        let one_hop = one_hop_neighbors(graph, selected_id);

        // Every endpoint of every edge touching the 1-hop ring
        let two_hop: HashSet<&str> = graph
            .links
            .iter()
            .filter(|e| one_hop.contains(e.source.as_str()) || one_hop.contains(e.target.as_str()))
            .flat_map(Edge::endpoints)
            .filter(|id| *id != selected_id)
            .collect();

        let mut anchors: HashSet<&str> = one_hop
            .iter()
            .chain(two_hop.iter())
            .copied()
            .filter(|id| {
                index
                    .get(id)
                    .is_some_and(|node| node.entity_type.is(&self.anchor_type))
            })
            .collect();
        anchors.insert(selected_id);

        let links: Vec<Edge> = graph
            .links
            .iter()
            .filter(|e| anchors.contains(e.source.as_str()) || anchors.contains(e.target.as_str()))
            .cloned()
            .collect();

        let mut keep: HashSet<&str> = anchors.clone();
        keep.extend(links.iter().flat_map(Edge::endpoints));

        let nodes = graph
            .nodes
            .iter()
            .filter(|n| keep.contains(n.id.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        tracing::debug!(
            selected = %selected_id,
            one_hop = one_hop.len(),
            two_hop = two_hop.len(),
            anchors = anchors.len(),
            nodes = nodes.len(),
            links = links.len(),
            "Extracted neighborhood"
        );

        Subgraph { nodes, links }
    }
}

/// Extract with the default policy (Researcher anchors).
pub fn extract(graph: &Graph, selected_id: &str) -> Subgraph {
    NeighborhoodService::default().extract(graph, selected_id)
}

/// IDs adjacent to `id` through any edge, in either direction, excluding `id`.
///
/// Dangling endpoints are included; they simply resolve to no node later.
pub fn one_hop_neighbors<'a>(graph: &'a Graph, id: &str) -> HashSet<&'a str> {
    graph
        .links
        .iter()
        .filter_map(|e| e.other_endpoint(id))
        .filter(|other| *other != id)
        .collect()
}
