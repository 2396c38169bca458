//! Entity type of a graph node.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of entity a node represents.
///
/// Known kinds get their own variant; anything else (for example
/// `BookPublication` or an empty type from an untyped GraphML id) is kept
/// verbatim in `Other` so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Researcher,
    Publication,
    Organization,
    Other(String),
}

impl EntityType {
    /// Returns the type name as stored in graph data.
    pub fn as_str(&self) -> &str {
        match self {
            EntityType::Researcher => "Researcher",
            EntityType::Publication => "Publication",
            EntityType::Organization => "Organization",
            EntityType::Other(name) => name,
        }
    }

    /// Whether this type's stored name equals `name`.
    pub fn is(&self, name: &str) -> bool {
        self.as_str() == name
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Researcher" => EntityType::Researcher,
            "Publication" => EntityType::Publication,
            "Organization" => EntityType::Organization,
            other => EntityType::Other(other.to_string()),
        })
    }
}

impl From<String> for EntityType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Researcher" => EntityType::Researcher,
            "Publication" => EntityType::Publication,
            "Organization" => EntityType::Organization,
            _ => EntityType::Other(s),
        }
    }
}

impl From<EntityType> for String {
    fn from(t: EntityType) -> Self {
        match t {
            EntityType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}
