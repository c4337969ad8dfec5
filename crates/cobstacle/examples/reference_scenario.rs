//! Run the reference robot/obstacle pair and print the walk summary.
//!
//! Usage:
//!   cargo run -p cobstacle --example reference_scenario -- [c-obstacle|flipped]

use cobstacle::{run, Scenario, TraversalFrame};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "c-obstacle".to_string());
    let frame = match mode.as_str() {
        "c-obstacle" => TraversalFrame::CObstacle,
        "flipped" => TraversalFrame::Flipped,
        _ => {
            eprintln!("usage: reference_scenario [c-obstacle|flipped]");
            return;
        }
    };
    let scn = Scenario {
        frame,
        ..Scenario::default()
    };
    match run(&scn) {
        Ok(sol) => {
            println!("c-obstacle ({} vertices):", sol.c_obstacle.len());
            for p in sol.c_obstacle.vertices() {
                println!("  ({:>6.2}, {:>6.2})", p.x, p.y);
            }
            let walk: Vec<String> = sol
                .chain
                .walk()
                .map(|p| format!("({}, {})", p.x, p.y))
                .collect();
            println!("walk: {}", walk.join(" -> "));
            println!(
                "{} steps over {} edges, net drift {:.2e}",
                sol.animation_points.len(),
                sol.animation_points.edge_count(),
                sol.animation_points.net().norm()
            );
        }
        Err(e) => eprintln!("pipeline failed: {e}"),
    }
}
