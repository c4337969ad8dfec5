use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cobstacle::cspace::{ChainOrder, ExtremeScan};
use cobstacle::geom2::rand::ReplayToken;
use cobstacle::{PipelineOpts, Scenario, TraversalFrame};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod frames;
mod provenance;
mod track;

use provenance::{ensure_parent, write_sidecar, Payload};
use track::RobotTrack;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Configuration-space obstacles and boundary walks for convex robots")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the C-obstacle and boundary walk, write the solution JSON
    Run {
        /// Scenario JSON; the reference scenario when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Walk the reflected robot around the original obstacle
        #[arg(short, long)]
        flipped: bool,
        #[arg(long)]
        step_size: Option<usize>,
        #[arg(long)]
        margin: Option<f64>,
        /// Order chains by clockwise angle instead of by coordinates
        #[arg(long)]
        angular: bool,
        /// Track all four extremes independently per vertex
        #[arg(long)]
        independent_extremes: bool,
        #[arg(long)]
        out: PathBuf,
        /// Per-frame reference positions (.csv or .parquet)
        #[arg(long)]
        frames: Option<PathBuf>,
    },
    /// Write a random, reproducible scenario JSON
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            config,
            flipped,
            step_size,
            margin,
            angular,
            independent_extremes,
            out,
            frames,
        } => {
            let mut scn = load_scenario(config.as_deref())?;
            apply_overrides(&mut scn, flipped, step_size, margin);
            let opts = PipelineOpts {
                scan: if independent_extremes {
                    ExtremeScan::Independent
                } else {
                    ExtremeScan::Chained
                },
                order: if angular {
                    ChainOrder::Angular
                } else {
                    ChainOrder::Sorted
                },
                ..PipelineOpts::default()
            };
            run(&scn, &opts, config.as_deref(), &out, frames.as_deref())
        }
        Action::Sample { seed, index, out } => sample(seed, index, &out),
        Action::Report => report(),
    }
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scenario {}", path.display()))
}

/// Command-line flags win over the scenario file; an absent flag keeps the file's value.
fn apply_overrides(
    scn: &mut Scenario,
    flipped: bool,
    step_size: Option<usize>,
    margin: Option<f64>,
) {
    if flipped {
        scn.frame = TraversalFrame::Flipped;
    }
    if let Some(n) = step_size {
        scn.step_size = n;
    }
    if let Some(m) = margin {
        scn.margin = m;
    }
}

fn run(
    scn: &Scenario,
    opts: &PipelineOpts,
    config: Option<&Path>,
    out: &Path,
    frames_out: Option<&Path>,
) -> Result<()> {
    tracing::info!(
        frame = ?scn.frame,
        step_size = scn.step_size,
        robot = scn.robot.len(),
        obstacle = scn.obstacle.len(),
        out = %out.display(),
        "run"
    );
    // Nothing is written unless the whole pipeline succeeds.
    let sol = cobstacle::run_with(scn, opts).with_context(|| match config {
        Some(p) => format!("C-obstacle pipeline failed for {}", p.display()),
        None => "C-obstacle pipeline failed for the reference scenario".to_string(),
    })?;

    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&sol)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "scenario": scn, "opts": opts });
    let mut payload = Payload::new(params.clone());
    if let Some(p) = config {
        payload = payload.with_input(p);
    }
    write_sidecar(out, payload)?;
    tracing::info!(
        c_obstacle = sol.c_obstacle.len(),
        steps = sol.animation_points.len(),
        "solution_written"
    );

    if let Some(path) = frames_out {
        ensure_parent(path)?;
        let frames = RobotTrack::new(&sol.initial_robot, &sol.animation_points).frames();
        frames::write_frames(path, &frames)?;
        write_sidecar(path, Payload::new(params).with_input(out))?;
    }
    Ok(())
}

fn sample(seed: u64, index: u64, out: &Path) -> Result<()> {
    tracing::info!(seed, index, out = %out.display(), "sample");
    let scn = Scenario::sample(ReplayToken { seed, index });
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&scn)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, Payload::new(serde_json::json!({ "seed": seed, "index": index })))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
