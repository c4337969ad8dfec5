//! Flat, stage-by-stage surface for callers that drive the pipeline by hand
//! (e.g. a planner that only needs the C-obstacle, or a renderer replaying
//! the walk). `pipeline::run` is the usual entry point.

// 2D primitives
pub use crate::geom2::rand::{draw_point_cloud, RadialCfg, ReplayToken, VertexCount};
pub use crate::geom2::{convex_hull, convex_hull_indices, Extents, GeomCfg, Polygon, Pt2};
// C-obstacle stages
pub use crate::cspace::{
    c_obstacle, interpolate, locate_extremes, minkowski_sum, normalize, partition, place_robot,
    reflect, BoundaryChain, ChainOrder, DisplacementSequence, ExtremePoints, ExtremeScan,
    ReflectedRobot, SeparatingLine, ViewBounds,
};

use crate::error::GeomError;

/// C-obstacle straight from raw point sets: hull both, reflect the robot,
/// grow the obstacle by it.
pub fn c_obstacle_from_points(
    robot: &[Pt2],
    obstacle: &[Pt2],
    cfg: &GeomCfg,
) -> Result<Polygon, GeomError> {
    let robot = normalize(robot, cfg)?;
    let obstacle = normalize(obstacle, cfg)?;
    c_obstacle(&reflect(&robot)?, &obstacle, cfg)
}

/// True when the robot, with its reference vertex at `at`, overlaps the obstacle.
pub fn collides(c_obstacle: &Polygon, at: Pt2, cfg: &GeomCfg) -> bool {
    c_obstacle.contains_eps(at, cfg.eps_side)
}
