//! Translational configuration-space obstacles for convex polygonal robots.
//!
//! Reduces "convex robot vs convex obstacle" to "point vs convex polygon":
//! the C-obstacle is the obstacle grown by the robot mirrored through its
//! reference vertex, and the robot collides exactly when its reference point
//! lies inside it. The crate also derives a clockwise walk around that
//! boundary as small displacement steps, ready for animation or for a
//! visibility-graph planner.
//!
//! Layout
//! - `geom2`: points, polygons, convex hull, random point clouds.
//! - `cspace`: the pipeline stages (normalize, reflect, Minkowski sum,
//!   extremes, partition, interpolate, placement).
//! - `scenario` / `pipeline`: configuration object and end-to-end run.

pub mod api;
pub mod cspace;
pub mod error;
pub mod geom2;
pub mod pipeline;
pub mod scenario;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{GeomCfg, Polygon, Pt2};
pub use pipeline::{run, run_with, PipelineOpts, Solution};
pub use scenario::{Scenario, TraversalFrame};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cspace::{
        BoundaryChain, ChainOrder, DisplacementSequence, ExtremePoints, ExtremeScan,
        ReflectedRobot, ViewBounds,
    };
    pub use crate::geom2::rand::ReplayToken;
    pub use crate::geom2::{Extents, GeomCfg, Polygon, Pt2};
    pub use crate::pipeline::{run, run_with, PipelineOpts, Solution};
    pub use crate::scenario::{Scenario, TraversalFrame};
    pub use crate::GeomError;
}
