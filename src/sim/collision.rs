//! Collision geometry for circular bodies on a bounded board
//!
//! All tests are discrete per-step proximity checks; there is no swept
//! detection. Resolution (impulse application, event emission) happens in
//! the controller.

use glam::Vec2;

/// Outcome of a boundary overlap test for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeContact {
    /// Position clamped back inside the board
    pub clamped: Vec2,
    /// True if the body crossed the left or right edge
    pub hit_x: bool,
    /// True if the body crossed the top or bottom edge
    pub hit_y: bool,
}

impl EdgeContact {
    pub fn any(&self) -> bool {
        self.hit_x || self.hit_y
    }
}

/// Test a circular body against all four board edges.
///
/// The legal band on each axis is `radius ..= extent - radius`; a body
/// outside it gets its position clamped and the crossed axis reported.
pub fn edge_contact(pos: Vec2, radius: f32, board: Vec2) -> EdgeContact {
    let clamped = Vec2::new(
        pos.x.clamp(radius, board.x - radius),
        pos.y.clamp(radius, board.y - radius),
    );
    EdgeContact {
        clamped,
        hit_x: clamped.x != pos.x,
        hit_y: clamped.y != pos.y,
    }
}

/// True if two circle centers are closer than `threshold`.
///
/// Used for hole capture, where the threshold is a fixed "magnetic"
/// distance independent of either radius.
pub fn within_threshold(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance_squared(b) < threshold * threshold
}

/// True if two circles overlap (distance below the sum of radii).
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    within_threshold(a, b, ra + rb)
}

/// Unit vector from `from` toward `to`, or `Vec2::X` when the centers
/// coincide so a repulsion impulse always has a direction.
pub fn away_from(from: Vec2, to: Vec2) -> Vec2 {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO { Vec2::X } else { dir }
}
