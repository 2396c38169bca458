//! Display text and link details for renderers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::models::{Edge, Graph, Node};

/// Matches single-quoted segments of an encoded id like `('Researcher', '0000-0001')`.
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^']+)'").expect("valid regex"));

/// Summary shown for co-authorship links.
pub const AUTHORED_SUMMARY: &str = "Co-authored publication";

/// Text drawn under a node.
///
/// Researchers show their name. Otherwise the natural key encoded in the id
/// (its second quoted segment) is used, then the label, type, and id.
pub fn display_name(node: &Node) -> String {
    if node.is_researcher() {
        if let Some(name) = node.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_string();
        }
    }
    if let Some(key) = natural_key(&node.id) {
        return key.to_string();
    }
    [node.label.as_str(), node.entity_type.as_str(), node.id.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// The natural key of an encoded id: `('Researcher', '0000-0001')` → `0000-0001`.
pub fn natural_key(id: &str) -> Option<&str> {
    QUOTED
        .captures_iter(id)
        .nth(1)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Short name for link endpoints: name, then label, then id.
fn short_name(node: &Node) -> &str {
    [node.name.as_deref().unwrap_or_default(), node.label.as_str()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(&node.id)
}

/// Endpoint names and a one-line summary for a link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDetails {
    pub source: String,
    pub target: String,
    pub label: String,
    pub summary: String,
}

/// Describe a link for a tooltip or detail panel.
///
/// Endpoints missing from `graph` fall back to their raw ids.
pub fn describe_link(graph: &Graph, link: &Edge) -> LinkDetails {
    let name_of = |id: &str| {
        graph
            .node(id)
            .map(|n| short_name(n).to_string())
            .unwrap_or_else(|| id.to_string())
    };
    LinkDetails {
        source: name_of(&link.source),
        target: name_of(&link.target),
        label: link.label.clone(),
        summary: connection_summary(&link.label),
    }
}

/// One-line summary of a relationship label.
pub fn connection_summary(label: &str) -> String {
    match label {
        "AUTHORED" => AUTHORED_SUMMARY.to_string(),
        other => other.to_string(),
    }
}

/// Profile lists of a node, empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileDetails<'a> {
    pub education: &'a [JsonValue],
    pub work: &'a [JsonValue],
    pub publications: &'a [JsonValue],
}

pub fn node_details(node: &Node) -> ProfileDetails<'_> {
    ProfileDetails {
        education: node.details.education.as_deref().unwrap_or_default(),
        work: node.details.work.as_deref().unwrap_or_default(),
        publications: node.details.publications.as_deref().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_researcher_name() {
        let node = Node::new("('Researcher', '0000-0001')", EntityType::Researcher)
            .with_name("Emily Carter");
        assert_eq!(display_name(&node), "Emily Carter");
    }

    #[test]
    fn test_display_name_uses_natural_key() {
        let node = Node::new("('Researcher', '0000-0001')", EntityType::Researcher);
        assert_eq!(display_name(&node), "0000-0001");

        // Only researchers show their name
        let node = Node::new(
            "('BookPublication', 'The Molecular Basis of Touch')",
            EntityType::Other("BookPublication".into()),
        )
        .with_name("ignored");
        assert_eq!(display_name(&node), "The Molecular Basis of Touch");
    }

    #[test]
    fn test_display_name_fallbacks() {
        let node = Node::new("p1", EntityType::Publication).with_label("A Paper");
        assert_eq!(display_name(&node), "A Paper");

        let node = Node::new("p1", EntityType::Publication);
        assert_eq!(display_name(&node), "Publication");

        let node = Node::new("p1", EntityType::Other(String::new()));
        assert_eq!(display_name(&node), "p1");
    }

    #[test]
    fn test_natural_key_needs_two_segments() {
        assert_eq!(natural_key("('Researcher', 'x')"), Some("x"));
        assert_eq!(natural_key("('Researcher')"), None);
        assert_eq!(natural_key("plain"), None);
    }

    #[test]
    fn test_describe_link() {
        let graph = Graph::new(
            vec![
                Node::new("r1", EntityType::Researcher).with_name("Emily Carter"),
                Node::new("p1", EntityType::Publication).with_label("Touch"),
            ],
            vec![],
        );
        let details = describe_link(&graph, &Edge::new("r1", "p1", "AUTHORED"));
        assert_eq!(details.source, "Emily Carter");
        assert_eq!(details.target, "Touch");
        assert_eq!(details.summary, AUTHORED_SUMMARY);

        let details = describe_link(&graph, &Edge::new("r1", "ghost", "AFFILIATED_WITH"));
        assert_eq!(details.target, "ghost");
        assert_eq!(details.summary, "AFFILIATED_WITH");
    }

    #[test]
    fn test_node_details_default_empty() {
        let node: Node = serde_json::from_value(json!({
            "id": "r1",
            "type": "Researcher",
            "work": [{"organization": "NHOG"}]
        }))
        .unwrap();
        let details = node_details(&node);
        assert!(details.education.is_empty());
        assert_eq!(details.work.len(), 1);
        assert!(details.publications.is_empty());
    }
}
