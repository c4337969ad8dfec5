//! Plain 2D geometry: points, convex polygons, convex hull.
//!
//! Purpose
//! - Provide the vertex-list `Polygon` and the hull routine every C-obstacle
//!   stage builds on.
//! - Keep the API minimal and numerically explicit (eps-aware via `GeomCfg`).
//!
//! Code cross-refs: `Polygon`, `convex_hull_indices`, `GeomCfg`, `crate::cspace`

pub mod hull;
pub mod rand;
mod types;
mod util;

pub use hull::{convex_hull, convex_hull_indices};
pub use types::{Extents, GeomCfg, Polygon, Pt2};
pub use util::{cross, lex_cmp, signed_area, to_pt, vertex_centroid};
