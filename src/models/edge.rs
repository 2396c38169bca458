//! Edge model representing typed relationships between nodes.

use serde::{Deserialize, Serialize};

/// A labeled relationship between two nodes.
///
/// Direction is part of the edge's identity, but traversal treats the edge
/// as undirected. Parallel edges with different labels are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID.
    pub source: String,
    /// Target node ID.
    pub target: String,
    /// Relationship type (AUTHORED, AFFILIATED_WITH, ...).
    #[serde(default)]
    pub label: String,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// Whether `id` is either endpoint.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The endpoint opposite `id`, if the edge touches `id`.
    ///
    /// A self-loop returns `id` itself.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Both endpoints, source first.
    pub fn endpoints(&self) -> [&str; 2] {
        [&self.source, &self.target]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_endpoint_is_undirected() {
        let edge = Edge::new("r1", "p1", "AUTHORED");
        assert_eq!(edge.other_endpoint("r1"), Some("p1"));
        assert_eq!(edge.other_endpoint("p1"), Some("r1"));
        assert_eq!(edge.other_endpoint("r2"), None);
    }

    #[test]
    fn test_self_loop_touches_once() {
        let edge = Edge::new("r1", "r1", "SELF");
        assert!(edge.touches("r1"));
        assert_eq!(edge.other_endpoint("r1"), Some("r1"));
    }
}
