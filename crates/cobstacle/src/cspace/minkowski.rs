//! Minkowski sum of two convex polygons (the C-obstacle).
//!
//! For convex A and B, A ⊕ B equals the convex hull of all pairwise vertex
//! sums, so we generate the `|A|·|B|` candidates and re-hull them.
//!
//! Cost is O(nm log nm). The rotating-edge merge (sort both edge sequences by
//! angle and walk them once) would be O(n + m); vertex counts here are small,
//! so the candidate cloud is kept for simplicity.

use tracing::debug;

use super::reflect::ReflectedRobot;
use crate::error::GeomError;
use crate::geom2::{convex_hull_indices, GeomCfg, Polygon, Pt2};

/// Convex hull of `{p + q : p ∈ a, q ∈ b}` over the vertices of `a` and `b`.
pub fn minkowski_sum(a: &Polygon, b: &Polygon, cfg: &GeomCfg) -> Result<Polygon, GeomError> {
    if a.is_empty() || b.is_empty() {
        return Err(GeomError::invalid_polygon(format!(
            "Minkowski sum of polygons with {} and {} vertices",
            a.len(),
            b.len()
        )));
    }
    let mut cloud: Vec<Pt2> = Vec::with_capacity(a.len() * b.len());
    for p in a.vertices() {
        for q in b.vertices() {
            cloud.push(p + q);
        }
    }
    let idx = convex_hull_indices(&cloud, cfg)?;
    debug!(candidates = cloud.len(), hull = idx.len(), "minkowski sum");
    Ok(Polygon::from_vertices(idx.into_iter().map(|i| cloud[i]).collect()))
}

/// Configuration-space obstacle: obstacle ⊕ reflected robot.
pub fn c_obstacle(
    robot: &ReflectedRobot,
    obstacle: &Polygon,
    cfg: &GeomCfg,
) -> Result<Polygon, GeomError> {
    minkowski_sum(robot.polygon(), obstacle, cfg)
}
