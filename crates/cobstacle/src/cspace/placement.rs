//! Initial robot pose and the viewing window around the C-obstacle.

use serde::Serialize;

use super::extremes::ExtremePoints;
use crate::error::GeomError;
use crate::geom2::{Extents, Polygon, Pt2};

/// Translate `robot` so its reference (first) vertex lands on `anchor`.
pub fn place_robot(robot: &Polygon, anchor: Pt2) -> Result<Polygon, GeomError> {
    let reference = robot
        .first()
        .ok_or_else(|| GeomError::invalid_polygon("cannot place an empty robot"))?;
    Ok(robot.translated(anchor - reference))
}

/// Axis-aligned window that fits the C-obstacle plus the robot body and a margin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// `robot` are the extents of the robot with its reference vertex at the origin.
    pub fn around(c_obstacle: &ExtremePoints, robot: &Extents, margin: f64) -> Self {
        Self {
            x_min: c_obstacle.min_x() + robot.min_x - margin,
            x_max: c_obstacle.max_x() + robot.max_x + margin,
            y_min: c_obstacle.min_y() + robot.min_y - margin,
            y_max: c_obstacle.max_y() + robot.max_y + margin,
        }
    }

    #[inline]
    pub fn contains(&self, p: Pt2) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn reference_vertex_lands_on_anchor() {
        let robot = Polygon::from_vertices(vec![
            vector![-1.0, -1.0],
            vector![1.0, -1.0],
            vector![0.0, 2.0],
        ]);
        let placed = place_robot(&robot, vector![2.0, 2.0]).unwrap();
        assert_eq!(
            placed.vertices(),
            &[vector![2.0, 2.0], vector![4.0, 2.0], vector![3.0, 5.0]]
        );
        assert!(place_robot(&Polygon::default(), vector![0.0, 0.0]).is_err());
    }

    #[test]
    fn window_adds_robot_extents_and_margin() {
        let ex = ExtremePoints {
            leftmost: vector![2.0, 2.0],
            rightmost: vector![8.0, 0.0],
            topmost: vector![7.0, 4.0],
            bottommost: vector![5.0, -5.0],
        };
        let robot = Extents {
            min_x: 0.0,
            max_x: 2.0,
            min_y: 0.0,
            max_y: 3.0,
        };
        let v = ViewBounds::around(&ex, &robot, 2.0);
        assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 12.0, -7.0, 9.0));
        assert!(v.contains(vector![5.0, 0.0]));
        assert!(!v.contains(vector![13.0, 0.0]));
    }
}
