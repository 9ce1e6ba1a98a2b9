//! Graph Operations - Pure DOP Functions
//!
//! Per-tick orchestration: advance the scheduler exactly once, then sample
//! the whole grid against that decision.

use super::graph_data::{GraphData, GraphFrame};
use crate::config::{validate_config, GraphConfig};
use crate::error::GraphResult;
use crate::grid::{grid_bounds, point_count, sample_grid_into};
use crate::surface::{function_from_index, function_name, FunctionId};
use crate::transition::{
    create_transition_state, current_decision, request_function, reset_transition, set_schedule,
    tick_transition, TickDecision,
};

#[cfg(feature = "parallel")]
use crate::constants::sampling::PARALLEL_POINT_THRESHOLD;
#[cfg(feature = "parallel")]
use crate::grid::sample_grid_parallel_into;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Validate `config` and build a graph holding its initial function
pub fn create_graph(config: GraphConfig) -> GraphResult<GraphData> {
    validate_config(&config)?;

    let schedule = config.schedule;
    let transition = create_transition_state(
        config.initial_function,
        schedule.hold_duration,
        schedule.transition_duration,
        schedule.auto_advance,
    );

    log::info!(
        "[Graph] Created {}x{} graph showing '{}' (hold={}s, transition={}s, auto_advance={})",
        config.grid.resolution,
        config.grid.resolution,
        function_name(config.initial_function),
        schedule.hold_duration,
        schedule.transition_duration,
        schedule.auto_advance
    );

    Ok(GraphData {
        points: Vec::with_capacity(point_count(config.grid.resolution)),
        config,
        transition,
        clock: 0.0,
        frame_index: 0,
    })
}

// ============================================================================
// TICK
// ============================================================================

/// Advance by `delta_time` seconds and resample every point
pub fn tick_graph(graph: &mut GraphData, delta_time: f32) -> GraphFrame<'_> {
    if delta_time.is_finite() && delta_time > 0.0 {
        graph.clock += f64::from(delta_time);
    }

    let decision = tick_transition(&mut graph.transition, delta_time);
    let time = animation_time(graph);
    sample_points(graph, &decision, time);
    graph.frame_index += 1;

    GraphFrame {
        frame_index: graph.frame_index,
        decision,
        time,
        points: &graph.points,
        bounds: grid_bounds(&graph.config.grid),
    }
}

#[cfg(feature = "parallel")]
fn sample_points(graph: &mut GraphData, decision: &TickDecision, time: f32) {
    let grid = &graph.config.grid;
    if point_count(grid.resolution) >= PARALLEL_POINT_THRESHOLD {
        sample_grid_parallel_into(grid, decision, time, &mut graph.points);
    } else {
        sample_grid_into(grid, decision, time, &mut graph.points);
    }
}

#[cfg(not(feature = "parallel"))]
fn sample_points(graph: &mut GraphData, decision: &TickDecision, time: f32) {
    sample_grid_into(&graph.config.grid, decision, time, &mut graph.points);
}

/// Time fed to the surface functions
pub fn animation_time(graph: &GraphData) -> f32 {
    (graph.clock / f64::from(graph.config.grid.time_dilation)) as f32
}

/// Decision the next sample would use if no time passed
pub fn graph_decision(graph: &GraphData) -> TickDecision {
    current_decision(&graph.transition)
}

// ============================================================================
// SELECTION / RECONFIGURATION
// ============================================================================

/// Request a morph to `function`
pub fn select_function(graph: &mut GraphData, function: FunctionId) {
    request_function(&mut graph.transition, function);
}

/// Request a morph by registry index, rejecting unknown indices
pub fn select_function_index(graph: &mut GraphData, index: u32) -> GraphResult<()> {
    let function = function_from_index(index)?;
    select_function(graph, function);
    Ok(())
}

/// Swap in a new configuration; takes effect on the next tick
///
/// Grid changes apply directly. Schedule timings update in place. A new
/// initial function restarts the scheduler holding that function.
pub fn reconfigure_graph(graph: &mut GraphData, config: GraphConfig) -> GraphResult<()> {
    validate_config(&config)?;

    if config.schedule != graph.config.schedule {
        let schedule = config.schedule;
        set_schedule(
            &mut graph.transition,
            schedule.hold_duration,
            schedule.transition_duration,
            schedule.auto_advance,
        );
    }

    if config.initial_function != graph.config.initial_function {
        reset_transition(&mut graph.transition, config.initial_function);
    }

    if config.grid.resolution != graph.config.grid.resolution {
        log::info!(
            "[Graph] Resolution {} -> {}",
            graph.config.grid.resolution,
            config.grid.resolution
        );
    }

    graph.config = config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GridConfig, ScheduleConfig};
    use crate::error::GraphError;
    use crate::grid::{cell_parameters, sample_grid};
    use crate::surface::{next_function, Point3};

    fn config(resolution: u32, auto_advance: bool) -> GraphConfig {
        GraphConfig {
            initial_function: FunctionId::Wave,
            grid: GridConfig {
                resolution,
                ..GridConfig::default()
            },
            schedule: ScheduleConfig {
                hold_duration: 2.0,
                transition_duration: 1.0,
                auto_advance,
            },
        }
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let mut bad = config(4, false);
        bad.grid.resolution = 0;
        assert!(matches!(
            create_graph(bad),
            Err(GraphError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_first_tick_samples_initial_function() {
        let mut graph = create_graph(config(4, false)).expect("valid config");
        let frame = tick_graph(&mut graph, 0.0);

        assert_eq!(frame.frame_index, 1);
        assert_eq!(
            frame.decision,
            TickDecision::Steady {
                function: FunctionId::Wave
            }
        );
        assert_eq!(frame.points.len(), 16);
        assert!((frame.points[0].y + 0.707_106_8).abs() < 1e-4);
        assert_eq!(frame.bounds.half_extent, Point3::splat(1.25));
    }

    #[test]
    fn test_time_is_dilated() {
        let mut cfg = config(2, false);
        cfg.grid.time_dilation = 4.0;
        let mut graph = create_graph(cfg).expect("valid config");
        let grid = graph.config.grid;

        tick_graph(&mut graph, 1.0);
        let frame = tick_graph(&mut graph, 1.0);

        assert_eq!(frame.time, 0.5);
        let expected = sample_grid(&grid, &frame.decision, 0.5);
        assert_eq!(frame.points, expected.points.as_slice());
    }

    #[test]
    fn test_clock_keeps_advancing_after_days() {
        let mut graph = create_graph(config(2, false)).expect("valid config");
        graph.clock = 524_288.0;
        let before = animation_time(&graph);

        let mut time = before;
        for _ in 0..600 {
            time = tick_graph(&mut graph, 1.0 / 60.0).time;
        }

        assert!((graph.clock - 524_298.0).abs() < 1e-4);
        assert!(time > before);
        assert!((time - before - 10.0).abs() < 0.1);
    }

    #[test]
    fn test_auto_cycle_morphs_then_holds_next() {
        let mut graph = create_graph(config(3, true)).expect("valid config");

        let frame = tick_graph(&mut graph, 2.5);
        assert_eq!(
            frame.decision,
            TickDecision::Morphing {
                from: FunctionId::Wave,
                to: FunctionId::CrossWave,
                progress: 0.5,
            }
        );

        let frame = tick_graph(&mut graph, 0.6);
        assert_eq!(
            frame.decision,
            TickDecision::Steady {
                function: next_function(FunctionId::Wave)
            }
        );
    }

    #[test]
    fn test_select_function_index_validates() {
        let mut graph = create_graph(config(3, false)).expect("valid config");

        assert!(matches!(
            select_function_index(&mut graph, 42),
            Err(GraphError::InvalidSelection { index: 42, .. })
        ));

        select_function_index(&mut graph, 8).expect("torus is registered");
        let frame = tick_graph(&mut graph, 0.1);
        assert!(matches!(
            frame.decision,
            TickDecision::Morphing {
                to: FunctionId::Torus,
                ..
            }
        ));
    }

    #[test]
    fn test_reconfigure_resolution_applies_next_tick() {
        let mut graph = create_graph(config(4, false)).expect("valid config");
        tick_graph(&mut graph, 0.1);

        let mut bigger = graph.config.clone();
        bigger.grid.resolution = 10;
        reconfigure_graph(&mut graph, bigger).expect("valid reconfiguration");

        let frame = tick_graph(&mut graph, 0.1);
        assert_eq!(frame.points.len(), 100);
        let (u, v) = cell_parameters(9, 9, 10);
        assert_eq!((frame.points[99].x, frame.points[99].z), (u, v));
    }

    #[test]
    fn test_reconfigure_initial_function_resets_scheduler() {
        let mut graph = create_graph(config(4, true)).expect("valid config");
        tick_graph(&mut graph, 2.5);
        assert!(graph.transition.is_transitioning);

        let mut other = graph.config.clone();
        other.initial_function = FunctionId::Sphere;
        reconfigure_graph(&mut graph, other).expect("valid reconfiguration");

        assert_eq!(
            graph_decision(&graph),
            TickDecision::Steady {
                function: FunctionId::Sphere
            }
        );
    }

    #[test]
    fn test_reconfigure_rejects_invalid_and_keeps_old() {
        let mut graph = create_graph(config(4, false)).expect("valid config");
        let mut bad = graph.config.clone();
        bad.grid.z_range = -1.0;

        assert!(reconfigure_graph(&mut graph, bad).is_err());
        assert_eq!(graph.config.grid.z_range, 1.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_large_grid_uses_same_output_as_serial() {
        let mut graph = create_graph(config(200, false)).expect("valid config");
        let grid = graph.config.grid;
        let frame = tick_graph(&mut graph, 0.25);
        let expected = sample_grid(&grid, &frame.decision, frame.time);
        assert_eq!(frame.points, expected.points.as_slice());
    }
}
