//! Positioned output handed to a renderer.

use serde::Serialize;

use super::graph::GraphLayout;
use crate::models::{Edge, EntityType, Node};
use crate::services::display_name;

/// A node with its final position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    /// Text drawn under the node.
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub x: f64,
    pub y: f64,
    /// Whether this is the selected node.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

/// A link with endpoint coordinates and its label anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedLink {
    pub source: String,
    pub target: String,
    pub label: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Midpoint of the two endpoints.
    pub label_x: f64,
    pub label_y: f64,
}

/// Everything a renderer needs to draw one neighborhood.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<PositionedNode>,
    pub links: Vec<PositionedLink>,
}

impl Scene {
    /// Build a scene from a finished layout.
    ///
    /// `nodes` and `links` must be the inputs the layout was built from.
    /// Nodes appear once per distinct id; links with an unknown endpoint are
    /// left out.
    pub fn from_layout(
        layout: &GraphLayout,
        nodes: &[Node],
        links: &[Edge],
        selected_id: Option<&str>,
    ) -> Self {
        let positioned_nodes = layout
            .nodes
            .iter()
            .filter_map(|ln| {
                let node = nodes.iter().find(|n| n.id == ln.id)?;
                Some(PositionedNode {
                    id: ln.id.clone(),
                    name: display_name(node),
                    entity_type: node.entity_type.clone(),
                    x: ln.x,
                    y: ln.y,
                    selected: selected_id == Some(ln.id.as_str()),
                })
            })
            .collect();

        let positioned_links = layout
            .edges
            .iter()
            .map(|edge| {
                let link = &links[edge.link_idx];
                let (from, to) = (&layout.nodes[edge.from_idx], &layout.nodes[edge.to_idx]);
                PositionedLink {
                    source: link.source.clone(),
                    target: link.target.clone(),
                    label: link.label.clone(),
                    x1: from.x,
                    y1: from.y,
                    x2: to.x,
                    y2: to.y,
                    label_x: (from.x + to.x) / 2.0,
                    label_y: (from.y + to.y) / 2.0,
                }
            })
            .collect();

        Self {
            width: layout.config().width,
            height: layout.config().height,
            nodes: positioned_nodes,
            links: positioned_links,
        }
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::visualization::layout;

    #[test]
    fn test_scene_label_midpoints() {
        let nodes = vec![
            Node::new("r1", EntityType::Researcher).with_name("Emily Carter"),
            Node::new("p1", EntityType::Publication).with_label("Touch"),
        ];
        let links = vec![
            Edge::new("r1", "p1", "AUTHORED"),
            Edge::new("r1", "ghost", "AUTHORED"),
        ];
        let layout = layout(&nodes, &links, &LayoutConfig::default()).unwrap();
        let scene = Scene::from_layout(&layout, &nodes, &links, Some("r1"));

        assert_eq!(scene.nodes.len(), 2);
        assert_eq!(scene.links.len(), 1);
        assert!(scene.node("r1").unwrap().selected);
        assert!(!scene.node("p1").unwrap().selected);
        assert_eq!(scene.node("r1").unwrap().name, "Emily Carter");

        let link = &scene.links[0];
        let (r1, p1) = (scene.node("r1").unwrap(), scene.node("p1").unwrap());
        assert_eq!((link.x1, link.y1), (r1.x, r1.y));
        assert_eq!((link.x2, link.y2), (p1.x, p1.y));
        assert_eq!(link.label_x, (r1.x + p1.x) / 2.0);
        assert_eq!(link.label_y, (r1.y + p1.y) / 2.0);
    }

    #[test]
    fn test_scene_serialization_omits_unselected_flag() {
        let nodes = vec![Node::new("r1", EntityType::Researcher)];
        let layout = layout(&nodes, &[], &LayoutConfig::default()).unwrap();
        let scene = Scene::from_layout(&layout, &nodes, &[], None);
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"type\":\"Researcher\""));
        assert!(!json.contains("selected"));
    }
}
