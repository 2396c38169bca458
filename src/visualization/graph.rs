//! Force-directed graph layout algorithm.
//!
//! A fixed-budget simulation: the engine runs exactly `iterations` ticks and
//! returns whatever state that produces. It never tests for convergence.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::{ALPHA_DECAY_TICKS, INITIAL_RADIUS, JITTER};
use crate::config::LayoutConfig;
use crate::error::AppError;
use crate::models::{Edge, Node};

/// A node in the layout with position and velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Node ID.
    pub id: String,
    /// Current position.
    pub x: f64,
    pub y: f64,
    /// Current velocity.
    pub vx: f64,
    pub vy: f64,
}

/// An edge in the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    /// Index of the input link this edge came from.
    pub link_idx: usize,
    /// Source node index.
    pub from_idx: usize,
    /// Target node index.
    pub to_idx: usize,
    /// Spring strength, `1 / min(degree(from), degree(to))`.
    pub strength: f64,
    /// Share of the correction applied to the target, by relative degree.
    pub bias: f64,
}

impl LayoutEdge {
    /// Self-loops are positioned but exert no force.
    pub fn is_loop(&self) -> bool {
        self.from_idx == self.to_idx
    }
}

/// Working state of one layout computation.
///
/// Owns its own copy of positions and velocities; caller nodes are never
/// touched.
#[derive(Debug, Clone)]
pub struct GraphLayout {
    /// Nodes with positions, one per distinct input id.
    pub nodes: Vec<LayoutNode>,
    /// Edges whose endpoints both resolved.
    pub edges: Vec<LayoutEdge>,
    config: LayoutConfig,
    id_to_idx: HashMap<String, usize>,
    alpha: f64,
    alpha_decay: f64,
    rng: StdRng,
}

impl GraphLayout {
    /// Create a layout from nodes and links.
    ///
    /// Duplicate node ids collapse onto the first occurrence. Links with an
    /// endpoint outside `nodes` are dropped.
    pub fn new(nodes: &[Node], links: &[Edge], config: &LayoutConfig) -> Result<Self, AppError> {
        config.validate()?;

        let mut id_to_idx = HashMap::with_capacity(nodes.len());
        let mut layout_nodes = Vec::with_capacity(nodes.len());
        let (cx, cy) = (config.width / 2.0, config.height / 2.0);

        for node in nodes {
            if id_to_idx.contains_key(&node.id) {
                tracing::debug!(id = %node.id, "Duplicate layout node ignored");
                continue;
            }
            let (x, y) = initial_position(layout_nodes.len());
            id_to_idx.insert(node.id.clone(), layout_nodes.len());
            layout_nodes.push(LayoutNode {
                id: node.id.clone(),
                x: cx + x,
                y: cy + y,
                vx: 0.0,
                vy: 0.0,
            });
        }

        let mut edges = Vec::with_capacity(links.len());
        for (link_idx, link) in links.iter().enumerate() {
            if let (Some(&from_idx), Some(&to_idx)) =
                (id_to_idx.get(&link.source), id_to_idx.get(&link.target))
            {
                edges.push(LayoutEdge {
                    link_idx,
                    from_idx,
                    to_idx,
                    strength: 0.0,
                    bias: 0.0,
                });
            } else {
                tracing::trace!(from = %link.source, to = %link.target, "Dangling link ignored");
            }
        }
        distribute_strength(layout_nodes.len(), &mut edges);

        let seed = seed_from_input(nodes, links);
        let alpha_decay = 1.0 - config.alpha_min.powf(1.0 / ALPHA_DECAY_TICKS);

        Ok(Self {
            nodes: layout_nodes,
            edges,
            config: config.clone(),
            id_to_idx,
            alpha: 1.0,
            alpha_decay,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Current cooling factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Position of a node by id.
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.id_to_idx
            .get(id)
            .map(|&i| (self.nodes[i].x, self.nodes[i].y))
    }

    /// Run one tick of the simulation.
    ///
    /// - Cooling: alpha decays toward zero
    /// - Attraction: links spring toward `link_distance`
    /// - Repulsion: inverse-distance many-body force between all pairs
    /// - Centering: pure translation of the centroid onto the canvas center
    /// - Integration: velocity decay, then position += velocity
    pub fn update_physics(&mut self) {
        if self.nodes.is_empty() {
            return;
        }

        self.alpha += (0.0 - self.alpha) * self.alpha_decay;

        self.apply_links();
        self.apply_charge();
        self.apply_center();

        let retain = 1.0 - self.config.velocity_decay;
        for node in &mut self.nodes {
            node.vx *= retain;
            node.vy *= retain;
            node.x += node.vx;
            node.y += node.vy;
        }
    }

    /// Run the layout for a number of ticks.
    pub fn stabilize(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.update_physics();
        }
    }

    /// Run the configured tick budget.
    pub fn run(&mut self) {
        self.stabilize(self.config.iterations);
    }

    /// Axis-aligned bounds `(min_x, min_y, max_x, max_y)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        Some(self.nodes.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), n| {
                (min_x.min(n.x), min_y.min(n.y), max_x.max(n.x), max_y.max(n.y))
            },
        ))
    }

    // --- Attraction: springs toward link_distance ---
    // Uses the positions each endpoint will have after this tick's velocity,
    // and splits the correction by relative degree so hubs move less.
    fn apply_links(&mut self) {
        let distance = self.config.link_distance;
        for i in 0..self.edges.len() {
            let edge = &self.edges[i];
            if edge.is_loop() {
                continue;
            }
            let (s, t, strength, bias) = (edge.from_idx, edge.to_idx, edge.strength, edge.bias);

            let mut dx = self.nodes[t].x + self.nodes[t].vx - self.nodes[s].x - self.nodes[s].vx;
            let mut dy = self.nodes[t].y + self.nodes[t].vy - self.nodes[s].y - self.nodes[s].vy;
            if dx == 0.0 {
                dx = self.jiggle();
            }
            if dy == 0.0 {
                dy = self.jiggle();
            }
            let len = (dx * dx + dy * dy).sqrt();
            let k = (len - distance) / len * self.alpha * strength;
            dx *= k;
            dy *= k;

            self.nodes[t].vx -= dx * bias;
            self.nodes[t].vy -= dy * bias;
            self.nodes[s].vx += dx * (1.0 - bias);
            self.nodes[s].vy += dy * (1.0 - bias);
        }
    }

    // --- Repulsion: exact all-pairs many-body force ---
    // F = strength * alpha / d, along the pair's delta. Zero deltas are
    // jittered and distances below distance_min are floored.
    fn apply_charge(&mut self) {
        let n = self.nodes.len();
        let strength = self.config.charge_strength;
        let min2 = self.config.distance_min * self.config.distance_min;

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let mut dx = self.nodes[j].x - self.nodes[i].x;
                let mut dy = self.nodes[j].y - self.nodes[i].y;
                let mut l = dx * dx + dy * dy;
                if dx == 0.0 {
                    dx = self.jiggle();
                    l += dx * dx;
                }
                if dy == 0.0 {
                    dy = self.jiggle();
                    l += dy * dy;
                }
                if l < min2 {
                    l = (min2 * l).sqrt();
                }
                let w = strength * self.alpha / l;
                self.nodes[i].vx += dx * w;
                self.nodes[i].vy += dy * w;
            }
        }
    }

    // --- Centering: pure translation (no force) ---
    fn apply_center(&mut self) {
        let n = self.nodes.len() as f64;
        let (cx, cy) = (self.config.width / 2.0, self.config.height / 2.0);
        let sx = self.nodes.iter().map(|node| node.x).sum::<f64>() / n - cx;
        let sy = self.nodes.iter().map(|node| node.y).sum::<f64>() / n - cy;
        for node in &mut self.nodes {
            node.x -= sx;
            node.y -= sy;
        }
    }

    /// A tiny non-zero nudge for degenerate geometry.
    fn jiggle(&mut self) -> f64 {
        let j = (self.rng.gen::<f64>() - 0.5) * JITTER;
        if j == 0.0 {
            JITTER / 2.0
        } else {
            j
        }
    }
}

/// Compute a layout for the given nodes and links with the configured budget.
pub fn layout(nodes: &[Node], links: &[Edge], config: &LayoutConfig) -> Result<GraphLayout, AppError> {
    let mut layout = GraphLayout::new(nodes, links, config)?;
    layout.run();
    tracing::debug!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        iterations = config.iterations,
        alpha = layout.alpha(),
        "Layout computed"
    );
    Ok(layout)
}

/// Spring strength and bias from endpoint degrees.
///
/// Self-loops are not counted.
fn distribute_strength(node_count: usize, edges: &mut [LayoutEdge]) {
    let mut degree = vec![0usize; node_count];
    for edge in edges.iter().filter(|e| !e.is_loop()) {
        degree[edge.from_idx] += 1;
        degree[edge.to_idx] += 1;
    }
    for edge in edges.iter_mut().filter(|e| !e.is_loop()) {
        let (ds, dt) = (degree[edge.from_idx] as f64, degree[edge.to_idx] as f64);
        edge.strength = 1.0 / ds.min(dt);
        edge.bias = ds / (ds + dt);
    }
}

/// Phyllotaxis spiral offset for the `i`-th node.
///
/// Evenly fills a disc without coincident points, the same for every run.
fn initial_position(i: usize) -> (f64, f64) {
    let angle_step = PI * (3.0 - 5.0_f64.sqrt());
    let radius = INITIAL_RADIUS * (0.5 + i as f64).sqrt();
    let angle = i as f64 * angle_step;
    (radius * angle.cos(), radius * angle.sin())
}

/// Seed for the jitter RNG, derived from the input ids so identical input
/// always jitters identically.
fn seed_from_input(nodes: &[Node], links: &[Edge]) -> u64 {
    let mut hasher = DefaultHasher::new();
    nodes.len().hash(&mut hasher);
    for node in nodes {
        node.id.hash(&mut hasher);
    }
    links.len().hash(&mut hasher);
    for link in links {
        link.source.hash(&mut hasher);
        link.target.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter()
            .map(|id| Node::new(*id, EntityType::Researcher))
            .collect()
    }

    fn distance(layout: &GraphLayout, a: &str, b: &str) -> f64 {
        let (ax, ay) = layout.position(a).unwrap();
        let (bx, by) = layout.position(b).unwrap();
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }

    fn assert_finite(layout: &GraphLayout) {
        for node in &layout.nodes {
            assert!(node.x.is_finite() && node.y.is_finite(), "{:?}", node);
            assert!(node.vx.is_finite() && node.vy.is_finite(), "{:?}", node);
        }
    }

    #[test]
    fn test_empty_layout() {
        let layout = layout(&[], &[], &LayoutConfig::default()).unwrap();
        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
        assert!(layout.bounds().is_none());
    }

    #[test]
    fn test_two_linked_nodes_settle_near_link_distance() {
        let layout = layout(
            &nodes(&["a", "b"]),
            &[Edge::new("a", "b", "AUTHORED")],
            &LayoutConfig::default(),
        )
        .unwrap();

        let d = distance(&layout, "a", "b");
        assert!((d - 140.0).abs() < 20.0, "separation {}", d);

        // Centered on the canvas
        let (ax, ay) = layout.position("a").unwrap();
        let (bx, by) = layout.position("b").unwrap();
        assert!(((ax + bx) / 2.0 - 500.0).abs() < 1.0);
        assert!(((ay + by) / 2.0 - 300.0).abs() < 1.0);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let ns = nodes(&["a", "b", "c", "d"]);
        let ls = vec![
            Edge::new("a", "b", "AUTHORED"),
            Edge::new("b", "c", "AUTHORED"),
            Edge::new("c", "a", "AUTHORED"),
        ];
        let first = layout(&ns, &ls, &LayoutConfig::default()).unwrap();
        let second = layout(&ns, &ls, &LayoutConfig::default()).unwrap();
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_unlinked_nodes_repel() {
        let layout = layout(&nodes(&["a", "b"]), &[], &LayoutConfig::default()).unwrap();
        // Initial spiral spacing is under 20 units
        assert!(distance(&layout, "a", "b") > 50.0);
    }

    #[test]
    fn test_dangling_links_ignored() {
        let layout = layout(
            &nodes(&["a"]),
            &[Edge::new("a", "ghost", "AUTHORED")],
            &LayoutConfig::default(),
        )
        .unwrap();
        assert!(layout.edges.is_empty());
        assert_eq!(layout.position("a"), Some((500.0, 300.0)));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let layout = layout(
            &nodes(&["a", "a", "b"]),
            &[Edge::new("a", "b", "AUTHORED")],
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(layout.nodes.len(), 2);
        assert_finite(&layout);
    }

    #[test]
    fn test_coincident_nodes_stay_finite() {
        let mut layout = GraphLayout::new(
            &nodes(&["a", "b", "c"]),
            &[Edge::new("a", "b", "AUTHORED"), Edge::new("c", "c", "SELF")],
            &LayoutConfig::default(),
        )
        .unwrap();
        for node in &mut layout.nodes {
            node.x = 10.0;
            node.y = 10.0;
        }
        layout.run();
        assert_finite(&layout);
        assert!(distance(&layout, "a", "b") > 1.0);
    }

    #[test]
    fn test_alpha_cools_over_budget() {
        let mut layout =
            GraphLayout::new(&nodes(&["a"]), &[], &LayoutConfig::default()).unwrap();
        assert_eq!(layout.alpha(), 1.0);
        layout.run();
        // (1 - decay)^100 with decay = 1 - 0.001^(1/300)
        let expected = 0.001_f64.powf(100.0 / 300.0);
        assert!((layout.alpha() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_strength_uses_degree() {
        let layout = GraphLayout::new(
            &nodes(&["hub", "a", "b"]),
            &[Edge::new("hub", "a", "AUTHORED"), Edge::new("hub", "b", "AUTHORED")],
            &LayoutConfig::default(),
        )
        .unwrap();
        let edge = &layout.edges[0];
        assert_eq!(edge.strength, 1.0);
        assert!((edge.bias - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LayoutConfig {
            width: -1.0,
            ..LayoutConfig::default()
        };
        let err = GraphLayout::new(&nodes(&["a"]), &[], &config).unwrap_err();
        assert_eq!(err.code(), "INVALID_LAYOUT");
    }
}
