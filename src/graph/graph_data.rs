//! Graph Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in graph_operations.rs

use crate::config::GraphConfig;
use crate::grid::GridBounds;
use crate::surface::Point3;
use crate::transition::{TickDecision, TransitionState};

/// Everything the animated surface owns between ticks
#[derive(Debug, Clone)]
pub struct GraphData {
    pub config: GraphConfig,
    pub transition: TransitionState,

    /// Unscaled seconds since creation; f64 so small steps still register
    /// after days of running
    pub clock: f64,

    /// Ticks processed so far
    pub frame_index: u64,

    /// Point buffer, rewritten in place every tick
    pub points: Vec<Point3>,
}

/// Output of one tick, handed to the rendering side
#[derive(Debug, Clone, Copy)]
pub struct GraphFrame<'a> {
    pub frame_index: u64,
    pub decision: TickDecision,

    /// Time fed to the surface functions (clock / time dilation)
    pub time: f32,

    /// resolution² points in row-major order
    pub points: &'a [Point3],
    pub bounds: GridBounds,
}
