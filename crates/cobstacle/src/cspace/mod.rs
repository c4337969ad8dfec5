//! Translational configuration-space obstacle for a convex robot and a convex
//! obstacle, and the clockwise boundary walk around it.
//!
//! Stages (each a pure function producing new, owned data):
//! 1. `normalize`: raw points → convex `Polygon`.
//! 2. `reflect`: robot → reference vertex at origin, mirrored through it.
//! 3. `minkowski_sum` / `c_obstacle`: obstacle ⊕ reflected robot.
//! 4. `locate_extremes`: left/right/top/bottom vertices.
//! 5. `partition`: upper/lower chains w.r.t. the left–right line.
//! 6. `interpolate`: chain walk → `DisplacementSequence`.
//!
//! Motion of the robot's reference point around the C-obstacle boundary is
//! exactly the motion of the robot sliding along the obstacle boundary.
//!
//! Code cross-refs: `crate::pipeline::run`, `crate::geom2::convex_hull_indices`

mod extremes;
mod minkowski;
mod normalize;
mod partition;
mod path;
mod placement;
mod reflect;

pub use extremes::{locate_extremes, ExtremePoints, ExtremeScan};
pub use minkowski::{c_obstacle, minkowski_sum};
pub use normalize::normalize;
pub use partition::{partition, BoundaryChain, ChainOrder, SeparatingLine};
pub use path::{interpolate, DisplacementSequence};
pub use placement::{place_robot, ViewBounds};
pub use reflect::{reflect, ReflectedRobot};
