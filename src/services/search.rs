//! Researcher lookup: name search, default selection, direct network.

use std::collections::HashSet;

use crate::error::AppError;
use crate::models::{Graph, Node, Subgraph};

/// Researchers whose name contains `query`, case-insensitively, in stored order.
///
/// Researchers without a name never match.
pub fn find_researchers<'a>(graph: &'a Graph, query: &str) -> Vec<&'a Node> {
    let needle = query.to_lowercase();
    graph
        .nodes
        .iter()
        .filter(|n| n.is_researcher())
        .filter(|n| {
            n.name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The node selected when nothing else is: the first researcher in stored order.
pub fn default_selection(graph: &Graph) -> Option<&Node> {
    graph.nodes.iter().find(|n| n.is_researcher())
}

/// The direct (1-hop) network of the first researcher whose id or label
/// contains `query`.
///
/// Keeps the researcher, every node on one of its incident links, and every
/// link between two kept nodes.
pub fn direct_network(graph: &Graph, query: &str) -> Result<Subgraph, AppError> {
    let researcher = graph
        .nodes
        .iter()
        .find(|n| n.is_researcher() && (n.id.contains(query) || n.label.contains(query)))
        .ok_or_else(|| AppError::NodeNotFound(format!("no researcher matching '{}'", query)))?;

    let mut connected: HashSet<&str> = HashSet::new();
    connected.insert(researcher.id.as_str());
    for link in graph.links.iter().filter(|l| l.touches(&researcher.id)) {
        connected.insert(&link.source);
        connected.insert(&link.target);
    }

    let nodes = graph
        .nodes
        .iter()
        .filter(|n| connected.contains(n.id.as_str()))
        .cloned()
        .collect();
    let links = graph
        .links
        .iter()
        .filter(|l| connected.contains(l.source.as_str()) && connected.contains(l.target.as_str()))
        .cloned()
        .collect();

    tracing::debug!(researcher = %researcher.id, nodes = connected.len(), "Direct network");
    Ok(Subgraph { nodes, links })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Edge, EntityType};

    fn graph() -> Graph {
        Graph::new(
            vec![
                Node::new("('Publication', 'Touch')", EntityType::Publication),
                Node::new("('Researcher', '0000-0001')", EntityType::Researcher)
                    .with_name("Emily Carter"),
                Node::new("('Researcher', '0000-0002')", EntityType::Researcher)
                    .with_name("John Smith"),
                Node::new("('Researcher', '0000-0003')", EntityType::Researcher),
                Node::new("('Organization', 'NHOG')", EntityType::Organization)
                    .with_name("Carter Institute"),
            ],
            vec![
                Edge::new("('Researcher', '0000-0001')", "('Publication', 'Touch')", "AUTHORED"),
                Edge::new("('Researcher', '0000-0002')", "('Publication', 'Touch')", "AUTHORED"),
                Edge::new(
                    "('Researcher', '0000-0001')",
                    "('Organization', 'NHOG')",
                    "AFFILIATED_WITH",
                ),
            ],
        )
    }

    #[test]
    fn test_find_researchers_case_insensitive() {
        let graph = graph();
        let found = find_researchers(&graph, "CARTER");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("Emily Carter"));
    }

    #[test]
    fn test_find_researchers_skips_unnamed_and_other_types() {
        let graph = graph();
        let found = find_researchers(&graph, "");
        let names: Vec<_> = found.iter().filter_map(|n| n.name.as_deref()).collect();
        assert_eq!(names, vec!["Emily Carter", "John Smith"]);
        assert!(find_researchers(&graph, "nobody").is_empty());
    }

    #[test]
    fn test_default_selection_is_first_researcher() {
        let graph = graph();
        assert_eq!(
            default_selection(&graph).map(|n| n.id.as_str()),
            Some("('Researcher', '0000-0001')")
        );
        assert!(default_selection(&Graph::default()).is_none());
    }

    #[test]
    fn test_direct_network_is_one_hop() {
        let graph = graph();
        let sub = direct_network(&graph, "0000-0001").unwrap();
        assert_eq!(
            sub.node_ids(),
            vec![
                "('Publication', 'Touch')",
                "('Researcher', '0000-0001')",
                "('Organization', 'NHOG')",
            ]
        );
        // The co-author's link leaves the 1-hop set and is dropped.
        assert_eq!(sub.links.len(), 2);
    }

    #[test]
    fn test_direct_network_unknown_researcher() {
        let graph = graph();
        let err = direct_network(&graph, "9999").unwrap_err();
        assert!(matches!(err, AppError::NodeNotFound(_)));
    }
}
