//! End-to-end run: scenario → C-obstacle, boundary walk and displacement steps.
//!
//! Every stage runs for both frames (hulls, reflection, Minkowski sum, both
//! extreme sets); the frame only picks which polygon/robot pair feeds the
//! partition, interpolation and placement. Any stage failure aborts the run.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cspace::{
    c_obstacle, interpolate, locate_extremes, normalize, partition, place_robot, reflect,
    BoundaryChain, ChainOrder, DisplacementSequence, ExtremePoints, ExtremeScan, ViewBounds,
};
use crate::error::GeomError;
use crate::geom2::{Extents, GeomCfg, Polygon};
use crate::scenario::{Scenario, TraversalFrame};

/// Numerical and ordering options; defaults reproduce the reference behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOpts {
    pub cfg: GeomCfg,
    pub scan: ExtremeScan,
    pub order: ChainOrder,
}

/// Everything downstream consumers (renderers, planners) need.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub robot: Polygon,
    pub obstacle: Polygon,
    pub reflected_robot: Polygon,
    /// Robot bounds with its reference vertex at the origin.
    pub robot_extents: Extents,
    pub c_obstacle: Polygon,
    pub obstacle_extremes: ExtremePoints,
    pub c_obstacle_extremes: ExtremePoints,
    pub frame: TraversalFrame,
    pub chain: BoundaryChain,
    /// Robot (frame-dependent) with its reference vertex on the walk's left extreme.
    pub initial_robot: Polygon,
    pub animation_points: DisplacementSequence,
    pub view: ViewBounds,
}

pub fn run(scn: &Scenario) -> Result<Solution, GeomError> {
    run_with(scn, &PipelineOpts::default())
}

pub fn run_with(scn: &Scenario, opts: &PipelineOpts) -> Result<Solution, GeomError> {
    scn.validate()?;
    let cfg = &opts.cfg;
    let robot = normalize(&scn.robot_points(), cfg)?;
    let obstacle = normalize(&scn.obstacle_points(), cfg)?;
    let reflected = reflect(&robot)?;
    let c_obs = c_obstacle(&reflected, &obstacle, cfg)?;
    let obstacle_extremes = locate_extremes(&obstacle, opts.scan)?;
    let c_obstacle_extremes = locate_extremes(&c_obs, opts.scan)?;

    let (walked, extremes, frame_robot) = match scn.frame {
        TraversalFrame::CObstacle => (&c_obs, &c_obstacle_extremes, &robot),
        TraversalFrame::Flipped => (&obstacle, &obstacle_extremes, reflected.polygon()),
    };
    debug!(frame = ?scn.frame, vertices = walked.len(), "walking boundary");
    let chain = partition(
        walked,
        extremes.leftmost,
        extremes.rightmost,
        opts.order,
        cfg,
    )?;
    let animation_points = interpolate(&chain, scn.step_size)?;
    let initial_robot = place_robot(frame_robot, extremes.leftmost)?;
    let view = ViewBounds::around(&c_obstacle_extremes, reflected.extents(), scn.margin);

    info!(
        robot = robot.len(),
        obstacle = obstacle.len(),
        c_obstacle = c_obs.len(),
        edges = chain.edge_count(),
        steps = animation_points.len(),
        "c-obstacle pipeline done"
    );
    Ok(Solution {
        robot,
        obstacle,
        reflected_robot: reflected.polygon().clone(),
        robot_extents: *reflected.extents(),
        c_obstacle: c_obs,
        obstacle_extremes,
        c_obstacle_extremes,
        frame: scn.frame,
        chain,
        initial_robot,
        animation_points,
        view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::rand::ReplayToken;
    use nalgebra::vector;

    #[test]
    fn reference_scenario_c_obstacle_frame() {
        let sol = run(&Scenario::default()).unwrap();
        assert!((3..=7).contains(&sol.c_obstacle.len()));
        assert!(sol.c_obstacle.len() <= sol.robot.len() * sol.obstacle.len());
        assert_eq!(sol.chain.edge_count(), sol.c_obstacle.len());
        assert_eq!(sol.animation_points.len(), 25 * sol.chain.edge_count());
        assert!(sol.animation_points.net().norm() < 1e-9);
        assert_eq!(sol.animation_points.start, vector![2.0, 2.0]);
        // Original robot, reference vertex (-1,-1) moved to the left extreme (2,2).
        assert_eq!(
            sol.initial_robot.vertices(),
            &[vector![2.0, 2.0], vector![4.0, 2.0], vector![3.0, 5.0]]
        );
        assert_eq!(
            (sol.view.x_min, sol.view.x_max, sol.view.y_min, sol.view.y_max),
            (0.0, 12.0, -7.0, 9.0)
        );
    }

    #[test]
    fn reference_scenario_flipped_frame() {
        let scn = Scenario {
            frame: TraversalFrame::Flipped,
            ..Scenario::default()
        };
        let sol = run(&scn).unwrap();
        assert_eq!(sol.chain.edge_count(), 4);
        assert_eq!(sol.animation_points.len(), 100);
        assert_eq!(
            sol.chain.upper,
            vec![vector![4.0, 2.0], vector![7.0, 4.0], vector![8.0, 0.0]]
        );
        assert_eq!(sol.chain.lower, vec![vector![6.0, -2.0]]);
        // Reflected robot pivots on its reference vertex at (4,2).
        assert_eq!(
            sol.initial_robot.vertices(),
            &[vector![4.0, 2.0], vector![2.0, 2.0], vector![3.0, -1.0]]
        );
        // C-obstacle still computed in this frame.
        assert_eq!(sol.c_obstacle, run(&Scenario::default()).unwrap().c_obstacle);
    }

    #[test]
    fn flipped_sweep_traces_c_obstacle_vertices() {
        // Every vertex of the reflected robot, carried along the obstacle
        // boundary, stays inside the C-obstacle.
        let scn = Scenario {
            frame: TraversalFrame::Flipped,
            step_size: 4,
            ..Scenario::default()
        };
        let sol = run(&scn).unwrap();
        let start = sol.initial_robot.clone();
        let mut offset = vector![0.0, 0.0];
        for d in &sol.animation_points.steps {
            offset += d;
            for v in start.vertices() {
                assert!(sol.c_obstacle.contains_eps(v + offset, 1e-9));
            }
        }
    }

    #[test]
    fn failures_abort_the_run() {
        let collinear = Scenario {
            obstacle: vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]],
            ..Scenario::default()
        };
        assert!(run(&collinear).unwrap_err().is_degenerate());
        let zero = Scenario {
            step_size: 0,
            ..Scenario::default()
        };
        assert!(matches!(run(&zero), Err(GeomError::InvalidArgument { .. })));
        let lonely = Scenario {
            robot: vec![[0.0, 0.0]],
            ..Scenario::default()
        };
        assert!(run(&lonely).unwrap_err().is_degenerate());
    }

    #[test]
    fn options_switch_scan_and_order() {
        let opts = PipelineOpts {
            scan: ExtremeScan::Independent,
            order: ChainOrder::Angular,
            ..PipelineOpts::default()
        };
        let a = run(&Scenario::default()).unwrap();
        let b = run_with(&Scenario::default(), &opts).unwrap();
        assert_eq!(a.chain, b.chain);
        assert_eq!(a.animation_points, b.animation_points);
    }

    #[test]
    fn sampled_scenarios_run() {
        for index in 0..25 {
            let scn = Scenario::sample(ReplayToken { seed: 2024, index });
            let sol = run(&scn).unwrap();
            assert_eq!(
                sol.animation_points.len(),
                scn.step_size * sol.c_obstacle.len()
            );
        }
    }

    #[test]
    fn solution_serializes_as_plain_pairs() {
        let sol = run(&Scenario::default()).unwrap();
        let v = serde_json::to_value(&sol).unwrap();
        assert_eq!(v["obstacle"][0], serde_json::json!([4.0, 2.0]));
        assert_eq!(v["frame"], "c_obstacle");
        assert_eq!(v["animation_points"]["steps"].as_array().unwrap().len(), 175);
    }
}
