//! Graph service: extraction followed by layout.

use crate::config::{Config, LayoutConfig};
use crate::error::AppError;
use crate::models::{Graph, Subgraph};
use crate::services::NeighborhoodService;
use crate::visualization::{layout, Scene};

/// Service for turning a selection into a positioned scene.
///
/// Stateless between calls: every call extracts and lays out from scratch.
#[derive(Debug, Clone, Default)]
pub struct GraphService {
    neighborhood: NeighborhoodService,
    layout: LayoutConfig,
}

impl GraphService {
    pub fn new(neighborhood: NeighborhoodService, layout: LayoutConfig) -> Self {
        Self {
            neighborhood,
            layout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            NeighborhoodService::from_config(&config.extraction),
            config.layout.clone(),
        )
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Neighborhood of `selected_id`; empty for an unknown or empty id.
    pub fn neighborhood(&self, graph: &Graph, selected_id: &str) -> Subgraph {
        self.neighborhood.extract(graph, selected_id)
    }

    /// Extract the neighborhood of `selected_id` and lay it out.
    ///
    /// An unknown selection gives an empty scene of the configured size.
    pub fn explore(&self, graph: &Graph, selected_id: &str) -> Result<Scene, AppError> {
        let subgraph = self.neighborhood(graph, selected_id);
        self.render(&subgraph, Some(selected_id))
    }

    /// Lay out an already extracted subgraph.
    pub fn render(&self, subgraph: &Subgraph, selected_id: Option<&str>) -> Result<Scene, AppError> {
        let positioned = layout(&subgraph.nodes, &subgraph.links, &self.layout)?;
        Ok(Scene::from_layout(
            &positioned,
            &subgraph.nodes,
            &subgraph.links,
            selected_id,
        ))
    }
}
