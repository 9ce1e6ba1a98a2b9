//! GPU parameter record for the instanced variant
//!
//! The compute dispatch itself lives with the renderer. This module only
//! packs the per-tick parameters into a uniform the kernel can read and
//! exposes the point buffer as raw bytes for upload.

use crate::config::GridConfig;
use crate::constants::gpu::WORKGROUP_SIZE;
use crate::grid::{point_count, point_scale};
use crate::morph::ease;
use crate::surface::{function_index, Point3};
use crate::transition::TickDecision;
use static_assertions::const_assert_eq;

/// Per-tick compute parameters
/// Must match shader layout exactly
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GraphUniform {
    /// Points per grid side
    pub resolution: u32,

    /// Cell spacing, 2 / resolution
    pub step: f32,

    /// Dilated animation time
    pub time: f32,

    pub amplitude: f32,
    pub frequency: f32,

    /// Registry index of the morph source (or the steady function)
    pub function_a: u32,

    /// Registry index of the morph target (equals function_a when steady)
    pub function_b: u32,

    /// Eased blend weight, 0 when steady
    pub transition_progress: f32,
}

const_assert_eq!(std::mem::size_of::<GraphUniform>() % 16, 0);

/// Bytes per position in the GPU buffer (tightly packed xyz)
pub const POSITION_STRIDE: usize = std::mem::size_of::<[f32; 3]>();

/// Pack the tick's parameters for the compute kernel
pub fn build_graph_uniform(grid: &GridConfig, decision: &TickDecision, time: f32) -> GraphUniform {
    let (function_a, function_b, transition_progress) = match *decision {
        TickDecision::Steady { function } => {
            (function_index(function), function_index(function), 0.0)
        }
        TickDecision::Morphing { from, to, progress } => {
            (function_index(from), function_index(to), ease(progress))
        }
    };

    GraphUniform {
        resolution: grid.resolution,
        step: point_scale(grid.resolution),
        time,
        amplitude: grid.amplitude,
        frequency: grid.frequency,
        function_a,
        function_b,
        transition_progress,
    }
}

/// Workgroups per axis for an 8x8 kernel covering the grid
pub fn dispatch_groups(resolution: u32) -> u32 {
    resolution.div_ceil(WORKGROUP_SIZE)
}

/// Size of a position buffer able to hold `resolution`² points
pub fn position_buffer_size(resolution: u32) -> u64 {
    point_count(resolution) as u64 * POSITION_STRIDE as u64
}

/// View sampled points as bytes for buffer upload
pub fn points_as_bytes(points: &[Point3]) -> &[u8] {
    bytemuck::cast_slice(points)
}
