//! Headless run of the surface graph
//!
//! Plays a cycling schedule at a fixed 60 Hz step and prints every change
//! of tick decision plus the measured sampling rate. Pass a TOML config
//! path as the first argument to override the built-in schedule.

use std::time::Instant;
use surface_graph::{
    config::load_config_from_file,
    frame_stats::{create_frame_stats, record_frame},
    graph::{build_graph_uniform, dispatch_groups},
    surface::function_name,
    GraphConfig, GridBackend, GridConfig, ScheduleConfig, TickDecision,
};

const TICK: f32 = 1.0 / 60.0;
const TICKS: u32 = 60 * 30;

fn describe(decision: &TickDecision) -> String {
    match *decision {
        TickDecision::Steady { function } => format!("steady {}", function_name(function)),
        TickDecision::Morphing { from, to, .. } => {
            format!("morph  {} -> {}", function_name(from), function_name(to))
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config_from_file(path)?,
        None => GraphConfig {
            grid: GridConfig {
                resolution: 400,
                backend: GridBackend::Instanced,
                ..GridConfig::default()
            },
            schedule: ScheduleConfig {
                hold_duration: 2.0,
                transition_duration: 1.0,
                auto_advance: true,
            },
            ..GraphConfig::default()
        },
    };

    println!("Surface Graph Headless Demo");
    println!("===========================");
    println!(
        "{}x{} points, {} workgroups per axis",
        config.grid.resolution,
        config.grid.resolution,
        dispatch_groups(config.grid.resolution)
    );

    let grid = config.grid;
    let mut graph = surface_graph::create_graph(config)?;
    let mut stats = create_frame_stats(1.0)?;
    let mut last_label = String::new();

    for _ in 0..TICKS {
        let started = Instant::now();
        let frame = surface_graph::tick_graph(&mut graph, TICK);

        let label = describe(&frame.decision);
        if label != last_label {
            let uniform = build_graph_uniform(&grid, &frame.decision, frame.time);
            println!(
                "[frame {:>5}] t={:>6.2}  {:<40} (keys {} / {})",
                frame.frame_index, frame.time, label, uniform.function_a, uniform.function_b
            );
            last_label = label;
        }

        if let Some(report) = record_frame(&mut stats, started.elapsed().as_secs_f32()) {
            println!(
                "             sampling: avg {:.0} / best {:.0} / worst {:.0} ticks per second",
                report.average_fps, report.best_fps, report.worst_fps
            );
        }
    }

    Ok(())
}
