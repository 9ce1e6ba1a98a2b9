/// Grid Sampler
///
/// - grid_data.rs: GridSamples, GridBounds
/// - grid_operations.rs: cell mapping and per-frame sampling

pub mod grid_data;
pub mod grid_operations;

pub use grid_data::{GridBounds, GridSamples, ResolvedDecision};

pub use grid_operations::{
    cell_coordinates, cell_index, cell_parameters, grid_bounds, point_count, point_scale,
    resolve_decision, sample_cell, sample_grid, sample_grid_into,
};

#[cfg(feature = "parallel")]
pub use grid_operations::{sample_grid_parallel, sample_grid_parallel_into};
