//! Boundary walk → per-step displacement vectors.

use serde::Serialize;
use tracing::debug;

use super::partition::BoundaryChain;
use crate::error::GeomError;
use crate::geom2::Pt2;

/// Incremental `(dx, dy)` steps along a closed boundary walk.
///
/// Every edge contributes `steps_per_edge` equal steps; the prefix sum of the
/// steps starting from `start` reproduces the walk.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplacementSequence {
    pub start: Pt2,
    pub steps_per_edge: usize,
    pub steps: Vec<Pt2>,
}

impl DisplacementSequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.steps.len() / self.steps_per_edge.max(1)
    }

    /// Positions after each step (the start itself is not yielded).
    pub fn positions(&self) -> impl Iterator<Item = Pt2> + '_ {
        self.steps.iter().scan(self.start, |pos, d| {
            *pos += d;
            Some(*pos)
        })
    }

    /// Sum of all steps; `(0, 0)` up to rounding for a closed walk.
    pub fn net(&self) -> Pt2 {
        self.steps.iter().fold(Pt2::zeros(), |acc, d| acc + d)
    }
}

/// Split every edge of the closed walk into `steps_per_edge` equal steps.
pub fn interpolate(
    chain: &BoundaryChain,
    steps_per_edge: usize,
) -> Result<DisplacementSequence, GeomError> {
    if steps_per_edge == 0 {
        return Err(GeomError::invalid_argument("steps per edge must be >= 1, got 0"));
    }
    let start = chain
        .start()
        .ok_or_else(|| GeomError::invalid_polygon("boundary chain has no upper vertex"))?;
    let mut steps = Vec::with_capacity(chain.edge_count() * steps_per_edge);
    let n = steps_per_edge as f64;
    let mut prev = start;
    for next in chain.walk().skip(1) {
        let d = (next - prev) / n;
        steps.extend(std::iter::repeat(d).take(steps_per_edge));
        prev = next;
    }
    debug!(
        edges = chain.edge_count(),
        steps_per_edge,
        total = steps.len(),
        "interpolated boundary walk"
    );
    Ok(DisplacementSequence {
        start,
        steps_per_edge,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn chain() -> BoundaryChain {
        BoundaryChain {
            upper: vec![vector![4.0, 2.0], vector![7.0, 4.0], vector![8.0, 0.0]],
            lower: vec![vector![6.0, -2.0]],
        }
    }

    #[test]
    fn steps_per_edge_and_closure() {
        let seq = interpolate(&chain(), 25).unwrap();
        assert_eq!(seq.len(), 25 * 4);
        assert_eq!(seq.edge_count(), 4);
        assert!(seq.net().norm() < 1e-12);
        // First edge steps are (7-4, 4-2)/25.
        assert!((seq.steps[0] - vector![0.12, 0.08]).norm() < 1e-15);
        let pos: Vec<Pt2> = seq.positions().collect();
        assert!((pos[24] - vector![7.0, 4.0]).norm() < 1e-12);
        assert!((pos[49] - vector![8.0, 0.0]).norm() < 1e-12);
        assert!((pos[74] - vector![6.0, -2.0]).norm() < 1e-12);
        assert!((pos[99] - vector![4.0, 2.0]).norm() < 1e-12);
    }

    #[test]
    fn single_step_edges_are_the_edges() {
        let seq = interpolate(&chain(), 1).unwrap();
        assert_eq!(
            seq.steps,
            vec![
                vector![3.0, 2.0],
                vector![1.0, -4.0],
                vector![-2.0, -2.0],
                vector![-2.0, 4.0]
            ]
        );
    }

    #[test]
    fn lone_upper_vertex_yields_zero_steps() {
        let c = BoundaryChain {
            upper: vec![vector![1.0, 1.0]],
            lower: vec![],
        };
        let seq = interpolate(&c, 3).unwrap();
        assert_eq!(seq.steps, vec![Pt2::zeros(); 3]);
    }

    #[test]
    fn zero_steps_is_invalid_argument() {
        let err = interpolate(&chain(), 0).unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument { .. }));
        let empty = BoundaryChain {
            upper: vec![],
            lower: vec![vector![0.0, 0.0]],
        };
        assert!(matches!(
            interpolate(&empty, 1),
            Err(GeomError::InvalidPolygon { .. })
        ));
    }

    proptest! {
        #[test]
        fn closed_walk_sums_to_zero(
            upper in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..6),
            lower in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 0..6),
            steps in 1usize..40,
        ) {
            let c = BoundaryChain {
                upper: upper.into_iter().map(|(x, y)| vector![x, y]).collect(),
                lower: lower.into_iter().map(|(x, y)| vector![x, y]).collect(),
            };
            let seq = interpolate(&c, steps).unwrap();
            prop_assert_eq!(seq.len(), steps * c.edge_count());
            prop_assert!(seq.net().norm() < 1e-9);
            let last = seq.positions().last().unwrap();
            prop_assert!((last - c.upper[0]).norm() < 1e-9);
        }
    }
}
