use tracing::debug;

use crate::error::GeomError;
use crate::geom2::{convex_hull_indices, GeomCfg, Polygon, Pt2};

/// Force a raw point set to be convex: the hull vertices of `raw`, in hull
/// order, copied from the original coordinates.
///
/// Pure; fails with `DegenerateGeometry` exactly when the hull does.
pub fn normalize(raw: &[Pt2], cfg: &GeomCfg) -> Result<Polygon, GeomError> {
    let idx = convex_hull_indices(raw, cfg)?;
    debug!(raw = raw.len(), hull = idx.len(), "normalized point set");
    Ok(Polygon::from_vertices(idx.into_iter().map(|i| raw[i]).collect()))
}
