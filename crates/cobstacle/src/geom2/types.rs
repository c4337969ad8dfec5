//! Basic 2D types and tolerances used by the C-obstacle pipeline.
//!
//! - `Pt2`: a point (or displacement) in the plane, `nalgebra::Vector2<f64>`.
//! - `GeomCfg`: centralizes epsilons for duplicate, turn, and side checks.
//! - `Polygon`: vertex list in hull order (no re-sorting after construction).
//! - `Extents`: axis-aligned min/max box.
//!
//! Code cross-refs: `hull::convex_hull_indices`, `cspace::*`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::util::signed_area;

/// Point or displacement in R².
pub type Pt2 = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeomCfg {
    /// Two points closer than this are the same point.
    pub eps_dup: f64,
    /// Orientation values `<= eps_turn` count as "not a left turn".
    pub eps_turn: f64,
    /// Boundary slack for point-in-polygon queries (`contains_eps`).
    pub eps_side: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dup: 1e-12,
            eps_turn: 1e-12,
            eps_side: 1e-9,
        }
    }
}

/// Convex polygon as an ordered vertex list.
///
/// Invariants (when produced by `convex_hull` or a pipeline stage):
/// - no two consecutive vertices coincide;
/// - every vertex is an extreme point of the generating set.
///
/// The order is whatever the producing stage emits; it is never re-sorted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    verts: Vec<Pt2>,
}

impl Polygon {
    /// Wrap a vertex list as-is (no hull, no checks).
    #[inline]
    pub fn from_vertices(verts: Vec<Pt2>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn vertices(&self) -> &[Pt2] {
        &self.verts
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Pt2> {
        self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// First vertex in stored order (the robot reference vertex).
    #[inline]
    pub fn first(&self) -> Option<Pt2> {
        self.verts.first().copied()
    }

    /// Unsigned shoelace area.
    pub fn area(&self) -> f64 {
        signed_area(&self.verts).abs()
    }

    /// Copy translated by `d`.
    pub fn translated(&self, d: Pt2) -> Polygon {
        Polygon {
            verts: self.verts.iter().map(|p| p + d).collect(),
        }
    }

    /// Membership test for a convex polygon in either orientation.
    pub fn contains_eps(&self, p: Pt2, eps: f64) -> bool {
        let n = self.verts.len();
        if n < 3 {
            return false;
        }
        let sign = signed_area(&self.verts).signum();
        (0..n).all(|k| {
            let a = self.verts[k];
            let b = self.verts[(k + 1) % n];
            let e = b - a;
            let w = p - a;
            sign * (e.x * w.y - e.y * w.x) >= -eps
        })
    }

    /// Axis-aligned extents of the vertex list, `None` if empty.
    pub fn extents(&self) -> Option<Extents> {
        let first = self.first()?;
        let mut ext = Extents::at(first);
        for p in &self.verts[1..] {
            ext.include(*p);
        }
        Some(ext)
    }
}

/// Axis-aligned bounding extents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extents {
    /// Degenerate box containing only `p`.
    #[inline]
    pub fn at(p: Pt2) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    #[inline]
    pub fn include(&mut self, p: Pt2) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }
}
