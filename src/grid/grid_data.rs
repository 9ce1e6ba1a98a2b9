//! Grid Sampler Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in grid_operations.rs

use crate::surface::{Point3, SurfaceFunction};

/// One frame of sampled surface points
///
/// `points[i]` belongs to cell (i % resolution, i / resolution); the order
/// never changes between frames so consumers can bind index -> visual.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSamples {
    pub resolution: u32,
    pub points: Vec<Point3>,
}

/// Axis-aligned bounding volume hint for the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub center: Point3,
    pub half_extent: Point3,
}

/// Tick decision with registry lookups already done
#[derive(Clone, Copy)]
pub enum ResolvedDecision {
    Steady(SurfaceFunction),
    Morphing {
        from: SurfaceFunction,
        to: SurfaceFunction,
        progress: f32,
    },
}
