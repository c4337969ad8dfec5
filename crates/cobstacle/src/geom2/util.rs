use std::cmp::Ordering;

use super::types::Pt2;

/// Orientation of `(a, b, c)`: positive for a left turn (CCW).
#[inline]
pub fn cross(a: Pt2, b: Pt2, c: Pt2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Natural point order: x first, then y. NaN compares equal.
#[inline]
pub fn lex_cmp(a: &Pt2, b: &Pt2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Shoelace signed area (positive for CCW order).
pub fn signed_area(verts: &[Pt2]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// Arithmetic mean of the vertices, `None` if empty.
pub fn vertex_centroid(verts: &[Pt2]) -> Option<Pt2> {
    if verts.is_empty() {
        return None;
    }
    let sum = verts.iter().fold(Pt2::zeros(), |acc, p| acc + p);
    Some(sum / verts.len() as f64)
}

#[inline]
pub fn to_pt(p: [f64; 2]) -> Pt2 {
    Pt2::new(p[0], p[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn cross_sign_matches_turn() {
        let a = vector![0.0, 0.0];
        let b = vector![1.0, 0.0];
        assert!(cross(a, b, vector![1.0, 1.0]) > 0.0);
        assert!(cross(a, b, vector![1.0, -1.0]) < 0.0);
        assert_eq!(cross(a, b, vector![2.0, 0.0]), 0.0);
    }

    #[test]
    fn lex_order_x_then_y() {
        let mut pts = vec![vector![1.0, 0.0], vector![0.0, 2.0], vector![0.0, 1.0]];
        pts.sort_by(lex_cmp);
        assert_eq!(pts, vec![vector![0.0, 1.0], vector![0.0, 2.0], vector![1.0, 0.0]]);
    }

    #[test]
    fn unit_square_area_and_centroid() {
        let sq = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!((signed_area(&rev) + 1.0).abs() < 1e-12);
        let c = vertex_centroid(&sq).unwrap();
        assert!((c - vector![0.5, 0.5]).norm() < 1e-12);
        assert!(vertex_centroid(&[]).is_none());
    }
}
