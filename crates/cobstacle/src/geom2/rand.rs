//! Random planar point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, non-degenerate raw point sets for property tests,
//!   benchmarks and randomly drawn scenarios.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, shift by `center`. Optionally add interior points (positive
//!   convex combinations of the boundary points) that the hull must discard.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Pt2;

/// How many boundary points a draw produces (never fewer than 3).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range; `max < min` collapses to `min`.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        rng.gen_range(lo..=hi.max(lo))
    }
}

/// Shape of a drawn cloud: a jittered regular polygon around `center`,
/// optionally padded with points the hull has to discard.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Max angular offset per point, in units of the spacing `2π/n` (at most 0.49).
    pub angle_jitter_frac: f64,
    /// Max relative change of the radius per point (at most 0.9).
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Pt2,
    pub interior_points: usize,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 8 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
            interior_points: 0,
        }
    }
}

/// `(seed, index)` pair; equal tokens give equal clouds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn finalize(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }
        let golden = 0x9e37_79b9_7f4a_7c15_u64;
        let idx = finalize(self.index.wrapping_mul(golden).wrapping_add(golden));
        StdRng::seed_from_u64(finalize(self.seed.rotate_left(17) ^ idx))
    }
}

/// Draw a raw point cloud whose hull has at least 3 vertices.
///
/// Boundary points are returned in angular order, interior points follow.
pub fn draw_point_cloud(cfg: RadialCfg, tok: ReplayToken) -> Vec<Pt2> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-6);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut pts: Vec<Pt2> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let th = base + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    // Strictly positive convex weights keep these off the hull boundary.
    for _ in 0..cfg.interior_points {
        let w: Vec<f64> = (0..n).map(|_| rng.gen::<f64>() + 0.05).collect();
        let total: f64 = w.iter().sum();
        let p = pts[..n]
            .iter()
            .zip(&w)
            .fold(Vector2::zeros(), |acc, (q, wk)| acc + q * (wk / total));
        pts.push(p);
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{convex_hull_indices, GeomCfg};

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            interior_points: 5,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_point_cloud(cfg, tok);
        let b = draw_point_cloud(cfg, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 15);
        let c = draw_point_cloud(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(a, c);
    }

    #[test]
    fn vertex_count_stays_in_range() {
        let cfg = |vertex_count| RadialCfg {
            vertex_count,
            ..RadialCfg::default()
        };
        for index in 0..40 {
            let tok = ReplayToken { seed: 11, index };
            let n = |vc| draw_point_cloud(cfg(vc), tok).len();
            assert!((4..=6).contains(&n(VertexCount::Uniform { min: 4, max: 6 })));
            // Inverted range collapses to `min`; tiny counts are raised to 3.
            assert_eq!(n(VertexCount::Uniform { min: 5, max: 2 }), 5);
            assert_eq!(n(VertexCount::Fixed(1)), 3);
        }
    }

    #[test]
    fn interior_points_never_on_hull() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(6),
            interior_points: 20,
            ..RadialCfg::default()
        };
        for index in 0..50 {
            let pts = draw_point_cloud(cfg, ReplayToken { seed: 3, index });
            let hull = convex_hull_indices(&pts, &GeomCfg::default()).unwrap();
            assert!(hull.iter().all(|&i| i < 6), "interior point on hull: {hull:?}");
        }
    }
}
