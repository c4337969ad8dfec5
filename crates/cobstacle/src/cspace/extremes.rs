//! Leftmost / rightmost / topmost / bottommost vertices of a polygon.
//!
//! Single pass, seeded with the first vertex, strict comparisons: on ties the
//! first-seen vertex wins. The separating line of `partition` is built from
//! the chosen left/right vertices, so the tie-break is part of the contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeomError;
use crate::geom2::{Polygon, Pt2};

/// How the scan updates the four extremes per vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremeScan {
    /// A vertex updates at most one of {left, right} and at most one of
    /// {top, bottom} (`else if` chains).
    #[default]
    Chained,
    /// All four extremes are tested independently.
    Independent,
}

/// The four extreme vertices of one polygon.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExtremePoints {
    pub leftmost: Pt2,
    pub rightmost: Pt2,
    pub topmost: Pt2,
    pub bottommost: Pt2,
}

impl ExtremePoints {
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.leftmost.x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.rightmost.x
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.topmost.y
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.bottommost.y
    }
}

pub fn locate_extremes(poly: &Polygon, scan: ExtremeScan) -> Result<ExtremePoints, GeomError> {
    let first = poly
        .first()
        .ok_or_else(|| GeomError::invalid_polygon("cannot locate extremes of an empty polygon"))?;
    let mut ex = ExtremePoints {
        leftmost: first,
        rightmost: first,
        topmost: first,
        bottommost: first,
    };
    for &p in poly.vertices() {
        match scan {
            ExtremeScan::Chained => {
                if p.x < ex.leftmost.x {
                    ex.leftmost = p;
                } else if p.x > ex.rightmost.x {
                    ex.rightmost = p;
                }
                if p.y > ex.topmost.y {
                    ex.topmost = p;
                } else if p.y < ex.bottommost.y {
                    ex.bottommost = p;
                }
            }
            ExtremeScan::Independent => {
                if p.x < ex.leftmost.x {
                    ex.leftmost = p;
                }
                if p.x > ex.rightmost.x {
                    ex.rightmost = p;
                }
                if p.y > ex.topmost.y {
                    ex.topmost = p;
                }
                if p.y < ex.bottommost.y {
                    ex.bottommost = p;
                }
            }
        }
    }
    debug!(
        left = ?(ex.leftmost.x, ex.leftmost.y),
        right = ?(ex.rightmost.x, ex.rightmost.y),
        top = ex.topmost.y,
        bottom = ex.bottommost.y,
        "extreme points"
    );
    Ok(ex)
}
