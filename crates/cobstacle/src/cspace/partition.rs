//! Upper/lower hull decomposition for a clockwise boundary walk.
//!
//! The separating line runs through the left and right extreme vertices.
//! The two extremes always open and close the upper chain; every other vertex
//! is upper iff `y >= line(x)`, with no tolerance.
//! Walking the upper chain, then the lower chain, then back to the first
//! upper vertex visits every vertex once.
//!
//! `ChainOrder::Sorted` orders each chain lexicographically (lower reversed).
//! That matches boundary order except where several vertices of one chain
//! share an x-coordinate (e.g. a vertical edge at either end).
//! `ChainOrder::Angular` orders by clockwise angle around the vertex centroid
//! starting from the left extreme, which is exact for convex input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeomError;
use crate::geom2::{lex_cmp, vertex_centroid, GeomCfg, Polygon, Pt2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainOrder {
    #[default]
    Sorted,
    Angular,
}

/// Line `y = slope * x + intercept` through the left and right extremes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeparatingLine {
    pub slope: f64,
    pub intercept: f64,
}

impl SeparatingLine {
    pub fn through(left: Pt2, right: Pt2, cfg: &GeomCfg) -> Result<Self, GeomError> {
        let dx = right.x - left.x;
        if dx.abs() <= cfg.eps_dup {
            return Err(GeomError::degenerate(format!(
                "vertical separating line: left ({}, {}) and right ({}, {}) share x",
                left.x, left.y, right.x, right.y
            )));
        }
        let slope = (right.y - left.y) / dx;
        Ok(Self {
            slope,
            intercept: left.y - slope * left.x,
        })
    }

    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        x * self.slope + self.intercept
    }

    /// On or above the line. Exact; rounding in `y_at` can misplace the
    /// defining vertices, so `partition` assigns those by identity.
    #[inline]
    pub fn is_upper(&self, p: Pt2) -> bool {
        p.y >= self.y_at(p.x)
    }
}

/// Boundary vertices split into two chains, both stored in walk order:
/// upper left-to-right, lower right-to-left.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundaryChain {
    pub upper: Vec<Pt2>,
    pub lower: Vec<Pt2>,
}

impl BoundaryChain {
    /// First vertex of the walk.
    #[inline]
    pub fn start(&self) -> Option<Pt2> {
        self.upper.first().copied()
    }

    /// Vertices in walk order, closing back on the start.
    pub fn walk(&self) -> impl Iterator<Item = Pt2> + '_ {
        self.upper
            .iter()
            .chain(self.lower.iter())
            .chain(self.upper.first())
            .copied()
    }

    /// Number of edges in the closed walk.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.upper.is_empty() {
            0
        } else {
            self.upper.len() + self.lower.len()
        }
    }
}

pub fn partition(
    poly: &Polygon,
    left: Pt2,
    right: Pt2,
    order: ChainOrder,
    cfg: &GeomCfg,
) -> Result<BoundaryChain, GeomError> {
    if poly.is_empty() {
        return Err(GeomError::invalid_polygon("cannot partition an empty polygon"));
    }
    let line = SeparatingLine::through(left, right, cfg)?;
    let mut verts = poly.vertices().to_vec();
    if order == ChainOrder::Angular {
        let c = vertex_centroid(&verts).unwrap_or(left);
        let a0 = (left.y - c.y).atan2(left.x - c.x);
        let cw = |p: &Pt2| (a0 - (p.y - c.y).atan2(p.x - c.x)).rem_euclid(std::f64::consts::TAU);
        verts.sort_by(|a, b| cw(a).partial_cmp(&cw(b)).unwrap_or(std::cmp::Ordering::Equal));
    }
    let (mut upper, mut lower): (Vec<Pt2>, Vec<Pt2>) = verts
        .into_iter()
        .partition(|p| *p == left || *p == right || line.is_upper(*p));
    if order == ChainOrder::Sorted {
        upper.sort_by(lex_cmp);
        lower.sort_by(lex_cmp);
        lower.reverse();
    }
    if upper.is_empty() {
        return Err(GeomError::invalid_polygon(format!(
            "no vertex lies on or above the line y = {} x + {}",
            line.slope, line.intercept
        )));
    }
    debug!(upper = upper.len(), lower = lower.len(), ?order, "partitioned boundary");
    Ok(BoundaryChain { upper, lower })
}
