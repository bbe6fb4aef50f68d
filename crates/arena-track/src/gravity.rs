//! Anti-gravity points for movement planning.
//!
//! Each tracked robot projects a repulsion source at its last-seen position,
//! weighted by its threat strength.  Movement states sum the forces from
//! every source (plus any synthetic sources such as walls) and head down the
//! gradient.  Points are derived values — recomputed from the tracks on
//! demand, never stored.

use arena_core::Point2;

/// A weighted repulsion source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GravityPoint {
    pub position: Point2,
    pub strength: f64,
}

impl GravityPoint {
    #[inline]
    pub fn new(position: Point2, strength: f64) -> Self {
        Self { position, strength }
    }

    /// Repulsion force this point exerts at `at`, as an `(x, y)` vector.
    ///
    /// Inverse-square falloff: `strength / d²` along the unit vector from
    /// the source to `at`.  Returns zero at the source itself rather than a
    /// singular force.
    pub fn force_at(&self, at: Point2) -> (f64, f64) {
        let dx = at.x - self.position.x;
        let dy = at.y - self.position.y;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq < 1e-9 {
            return (0.0, 0.0);
        }
        let dist = dist_sq.sqrt();
        let magnitude = self.strength / dist_sq;
        (dx / dist * magnitude, dy / dist * magnitude)
    }
}

/// Net repulsion at `at` from a set of sources.
pub fn net_force(points: impl IntoIterator<Item = GravityPoint>, at: Point2) -> (f64, f64) {
    let mut fx = 0.0;
    let mut fy = 0.0;
    for p in points {
        let (x, y) = p.force_at(at);
        fx += x;
        fy += y;
    }
    (fx, fy)
}
