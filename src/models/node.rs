//! Node model representing entities in the co-authorship graph.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::EntityType;

/// An entity in the graph: a researcher, publication, or organization.
///
/// The id encodes `(type, natural key)`, e.g.
/// `('Researcher', '0000-0003-0427-0369')`. Only `id` and `entity_type` are
/// inspected by extraction and layout; everything else is carried through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Globally unique identifier.
    pub id: String,
    /// Entity type.
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Display label.
    #[serde(default)]
    pub label: String,
    /// Person name (researchers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profile details passed through unchanged.
    #[serde(flatten)]
    pub details: NodeDetails,
}

/// Optional profile fields attached to some nodes.
///
/// Entries are kept as raw JSON; their shape is owned by whoever produced
/// the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<JsonValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<JsonValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<Vec<JsonValue>>,
}

impl Node {
    /// Creates a node with an empty label and no details.
    pub fn new(id: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            id: id.into(),
            entity_type,
            label: String::new(),
            name: None,
            details: NodeDetails::default(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the person name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_researcher(&self) -> bool {
        self.entity_type == EntityType::Researcher
    }
}
