//! Run configuration: raw robot/obstacle point sets and walk parameters.
//!
//! Replaces module-level constants with a value passed into `pipeline::run`.
//! Serde-friendly so callers can load it from JSON; missing fields fall back
//! to the reference scenario.

use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::geom2::rand::{draw_point_cloud, RadialCfg, ReplayToken};
use crate::geom2::{to_pt, Pt2};

/// Which polygon the boundary walk goes around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalFrame {
    /// Reference point of the original robot walks around the C-obstacle.
    #[default]
    CObstacle,
    /// Reflected robot (pivoting on its reference point) walks around the
    /// original obstacle, sweeping out the C-obstacle.
    Flipped,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub robot: Vec<[f64; 2]>,
    pub obstacle: Vec<[f64; 2]>,
    /// Interpolation steps per boundary edge (>= 1).
    pub step_size: usize,
    /// Extra space around the view window; not used by the geometry.
    pub margin: f64,
    pub frame: TraversalFrame,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            robot: vec![[-1.0, -1.0], [0.0, 2.0], [1.0, -1.0]],
            obstacle: vec![[4.0, 2.0], [7.0, 4.0], [6.0, -2.0], [8.0, 0.0]],
            step_size: 25,
            margin: 2.0,
            frame: TraversalFrame::CObstacle,
        }
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), GeomError> {
        if self.step_size == 0 {
            return Err(GeomError::invalid_argument("step_size must be >= 1, got 0"));
        }
        if !self.margin.is_finite() {
            return Err(GeomError::invalid_argument(format!(
                "margin must be finite, got {}",
                self.margin
            )));
        }
        for (name, pts) in [("robot", &self.robot), ("obstacle", &self.obstacle)] {
            if let Some(k) = pts.iter().position(|p| !(p[0].is_finite() && p[1].is_finite())) {
                return Err(GeomError::invalid_argument(format!(
                    "{name} point #{k} is not finite: {:?}",
                    pts[k]
                )));
            }
        }
        Ok(())
    }

    pub fn robot_points(&self) -> Vec<Pt2> {
        self.robot.iter().copied().map(to_pt).collect()
    }

    pub fn obstacle_points(&self) -> Vec<Pt2> {
        self.obstacle.iter().copied().map(to_pt).collect()
    }

    /// Random scenario: a small robot near the origin and a larger obstacle
    /// off to the side, reproducible from `tok`.
    pub fn sample(tok: ReplayToken) -> Self {
        let robot = draw_point_cloud(
            RadialCfg {
                base_radius: 1.5,
                ..RadialCfg::default()
            },
            ReplayToken {
                seed: tok.seed,
                index: 2 * tok.index,
            },
        );
        let obstacle = draw_point_cloud(
            RadialCfg {
                base_radius: 3.0,
                center: Pt2::new(6.0, 0.0),
                interior_points: 3,
                ..RadialCfg::default()
            },
            ReplayToken {
                seed: tok.seed,
                index: 2 * tok.index + 1,
            },
        );
        Self {
            robot: robot.iter().map(|p| [p.x, p.y]).collect(),
            obstacle: obstacle.iter().map(|p| [p.x, p.y]).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults_fill_missing_fields() {
        let s: Scenario = serde_json::from_str(r#"{"step_size": 5, "frame": "flipped"}"#).unwrap();
        assert_eq!(s.step_size, 5);
        assert_eq!(s.frame, TraversalFrame::Flipped);
        assert_eq!(s.robot, Scenario::default().robot);
        assert_eq!(s.margin, 2.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = Scenario {
            step_size: 0,
            ..Scenario::default()
        };
        assert!(matches!(bad.validate(), Err(GeomError::InvalidArgument { .. })));
        let bad = Scenario {
            obstacle: vec![[0.0, 0.0], [f64::INFINITY, 1.0], [1.0, 0.0]],
            ..Scenario::default()
        };
        assert!(matches!(bad.validate(), Err(GeomError::InvalidArgument { .. })));
        assert!(Scenario::default().validate().is_ok());
    }

    #[test]
    fn sampled_scenarios_are_reproducible() {
        let tok = ReplayToken { seed: 9, index: 4 };
        assert_eq!(Scenario::sample(tok), Scenario::sample(tok));
        assert_ne!(
            Scenario::sample(tok),
            Scenario::sample(ReplayToken { seed: 9, index: 5 })
        );
    }
}
