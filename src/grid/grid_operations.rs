//! Grid Sampler Operations - Pure DOP Functions
//!
//! Maps grid cells to surface parameters and evaluates the active
//! function (or morph) for every cell. Cells are independent, so the
//! parallel path produces exactly the serial output.

use super::grid_data::{GridBounds, GridSamples, ResolvedDecision};
use crate::config::GridConfig;
use crate::morph::morph;
use crate::surface::{get_function, Point3};
use crate::transition::TickDecision;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// CELL MAPPING
// ============================================================================

/// Number of points in a resolution x resolution grid
#[inline]
pub fn point_count(resolution: u32) -> usize {
    resolution as usize * resolution as usize
}

/// Distance between neighbouring cells in parameter space
#[inline]
pub fn point_scale(resolution: u32) -> f32 {
    2.0 / resolution as f32
}

/// Row-major cell of a linear index: x advances fastest
///
/// A zero resolution maps like a single-column grid instead of dividing by zero.
#[inline]
pub fn cell_coordinates(index: usize, resolution: u32) -> (u32, u32) {
    let row = resolution.max(1) as usize;
    ((index % row) as u32, (index / row) as u32)
}

/// Linear index of a cell
#[inline]
pub fn cell_index(x: u32, z: u32, resolution: u32) -> usize {
    z as usize * resolution as usize + x as usize
}

/// Surface parameters (u, v) in [-1, 1] at the center of a cell
#[inline]
pub fn cell_parameters(x: u32, z: u32, resolution: u32) -> (f32, f32) {
    let step = point_scale(resolution);
    let u = (x as f32 + 0.5) * step - 1.0;
    let v = (z as f32 + 0.5) * step - 1.0;
    (u, v)
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Look up the decision's functions once per tick
pub fn resolve_decision(decision: &TickDecision) -> ResolvedDecision {
    match *decision {
        TickDecision::Steady { function } => ResolvedDecision::Steady(get_function(function)),
        TickDecision::Morphing { from, to, progress } => ResolvedDecision::Morphing {
            from: get_function(from),
            to: get_function(to),
            progress,
        },
    }
}

/// Evaluate one cell, z scaled by the configured range
#[inline]
pub fn sample_cell(
    config: &GridConfig,
    resolved: &ResolvedDecision,
    x: u32,
    z: u32,
    time: f32,
) -> Point3 {
    let (u, v) = cell_parameters(x, z, config.resolution);
    let (a, f) = (config.amplitude, config.frequency);

    let mut point = match *resolved {
        ResolvedDecision::Steady(function) => function(u, v, time, a, f),
        ResolvedDecision::Morphing { from, to, progress } => {
            morph(u, v, time, a, f, from, to, progress)
        }
    };
    point.z *= config.z_range;
    point
}

/// Sample every cell into a fresh buffer
///
/// `time` is animation time already divided by the time dilation.
pub fn sample_grid(config: &GridConfig, decision: &TickDecision, time: f32) -> GridSamples {
    let mut points = Vec::with_capacity(point_count(config.resolution));
    sample_grid_into(config, decision, time, &mut points);

    GridSamples {
        resolution: config.resolution,
        points,
    }
}

/// Sample every cell into `points`, reusing its allocation
pub fn sample_grid_into(
    config: &GridConfig,
    decision: &TickDecision,
    time: f32,
    points: &mut Vec<Point3>,
) {
    let resolved = resolve_decision(decision);
    let resolution = config.resolution;

    points.clear();
    points.reserve(point_count(resolution));
    for z in 0..resolution {
        for x in 0..resolution {
            points.push(sample_cell(config, &resolved, x, z, time));
        }
    }
}

/// Rayon-parallel sampling over rows; output identical to [`sample_grid_into`]
#[cfg(feature = "parallel")]
pub fn sample_grid_parallel_into(
    config: &GridConfig,
    decision: &TickDecision,
    time: f32,
    points: &mut Vec<Point3>,
) {
    let resolved = resolve_decision(decision);
    let resolution = config.resolution;

    points.clear();
    points.resize(point_count(resolution), Point3::ZERO);
    if resolution == 0 {
        return;
    }

    points
        .par_chunks_mut(resolution as usize)
        .enumerate()
        .for_each(|(z, row)| {
            for (x, point) in row.iter_mut().enumerate() {
                *point = sample_cell(config, &resolved, x as u32, z as u32, time);
            }
        });
}

/// Rayon-parallel variant of [`sample_grid`]
#[cfg(feature = "parallel")]
pub fn sample_grid_parallel(config: &GridConfig, decision: &TickDecision, time: f32) -> GridSamples {
    let mut points = Vec::new();
    sample_grid_parallel_into(config, decision, time, &mut points);

    GridSamples {
        resolution: config.resolution,
        points,
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Bounding volume hint: centered at the origin, (1 + 1/resolution) * amplitude per axis
pub fn grid_bounds(config: &GridConfig) -> GridBounds {
    let half = (1.0 + 1.0 / config.resolution as f32) * config.amplitude;
    GridBounds {
        center: Point3::ZERO,
        half_extent: Point3::splat(half),
    }
}
