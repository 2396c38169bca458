//! Canvas and physics constants for the force-directed layout.

// =============================================================================
// Canvas
// =============================================================================

/// Default canvas width.
pub const CANVAS_WIDTH: f64 = 1000.0;
/// Default canvas height.
pub const CANVAS_HEIGHT: f64 = 600.0;

// =============================================================================
// Simulation budget
// =============================================================================

/// Ticks run per layout.
pub const ITERATIONS: usize = 100;
/// Cooling reaches `ALPHA_MIN` after this many ticks.
pub const ALPHA_DECAY_TICKS: f64 = 300.0;
/// Alpha value reached after `ALPHA_DECAY_TICKS` ticks.
pub const ALPHA_MIN: f64 = 0.001;

// =============================================================================
// Forces
// =============================================================================

/// Target separation of linked nodes.
pub const LINK_DISTANCE: f64 = 140.0;
/// Many-body strength (negative repels).
pub const CHARGE_STRENGTH: f64 = -350.0;
/// Fraction of velocity lost each tick.
pub const VELOCITY_DECAY: f64 = 0.4;
/// Repulsion distance floor.
pub const DISTANCE_MIN: f64 = 1.0;
/// Scale of the random nudge applied to zero-length deltas.
pub const JITTER: f64 = 1e-6;

// =============================================================================
// Initial placement
// =============================================================================

/// Radius unit of the phyllotaxis spiral.
pub const INITIAL_RADIUS: f64 = 10.0;
