//! Convex hull of a finite planar point set.
//!
//! Andrew's monotone chain over point *indices*, so callers can map hull
//! vertices back to their own records. Emission order is counter-clockwise,
//! starting at the lexicographically smallest point (min x, then min y).
//!
//! Degeneracy policy
//! - Duplicate points (within `eps_dup`) are merged; the earliest input index wins.
//! - Fewer than 3 distinct points, or all points collinear, is an error.
//! - Points lying on a hull edge are not hull vertices.

use std::cmp::Ordering;

use super::types::{GeomCfg, Pt2};
use super::util::{cross, lex_cmp};
use crate::error::GeomError;

/// Hull vertex indices into `points`, CCW, each index at most once.
pub fn convex_hull_indices(points: &[Pt2], cfg: &GeomCfg) -> Result<Vec<usize>, GeomError> {
    if let Some(k) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(GeomError::degenerate(format!(
            "point #{k} has a non-finite coordinate ({}, {})",
            points[k].x, points[k].y
        )));
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    // Stable: among equal points the smaller input index comes first.
    order.sort_by(|&a, &b| match lex_cmp(&points[a], &points[b]) {
        Ordering::Equal => a.cmp(&b),
        o => o,
    });
    order.dedup_by(|b, a| (points[*a] - points[*b]).norm() <= cfg.eps_dup);
    if order.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "convex hull needs at least 3 distinct points, got {} of {}",
            order.len(),
            points.len()
        )));
    }

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2
            && cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            ) <= cfg.eps_turn
        {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            ) <= cfg.eps_turn
        {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "all {} distinct points are collinear",
            order.len()
        )));
    }
    Ok(hull)
}

/// Hull vertices themselves (same order as `convex_hull_indices`).
pub fn convex_hull(points: &[Pt2], cfg: &GeomCfg) -> Result<Vec<Pt2>, GeomError> {
    let idx = convex_hull_indices(points, cfg)?;
    Ok(idx.into_iter().map(|i| points[i]).collect())
}
