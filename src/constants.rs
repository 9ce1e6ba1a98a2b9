//! Graph constants - single source of truth for limits and defaults
//!
//! Grouped by concern. Validation in config_operations.rs reads from here,
//! never from literals.

/// Grid resolution limits
pub mod resolution {
    /// Smallest grid side length; a 1x1 grid is a single centered point
    pub const MIN_RESOLUTION: u32 = 1;

    /// Ceiling when every point is backed by its own scene object
    pub const MAX_POINT_OBJECT_RESOLUTION: u32 = 200;

    /// Ceiling for instanced / GPU-resident position buffers
    pub const MAX_INSTANCED_RESOLUTION: u32 = 3000;

    pub const DEFAULT_RESOLUTION: u32 = 100;
}

/// Surface shape parameters
pub mod shape {
    pub const MAX_AMPLITUDE: f32 = 10.0;
    pub const MAX_FREQUENCY: f32 = 10.0;
    pub const DEFAULT_AMPLITUDE: f32 = 1.0;
    pub const DEFAULT_FREQUENCY: f32 = 1.0;

    /// Time dilation range (sign flips playback direction, zero is rejected)
    pub const MIN_TIME_DILATION: f32 = -10.0;
    pub const MAX_TIME_DILATION: f32 = 10.0;
    pub const DEFAULT_TIME_DILATION: f32 = 1.0;

    pub const MIN_Z_RANGE: f32 = 0.0;
    pub const MAX_Z_RANGE: f32 = 1.0;
    pub const DEFAULT_Z_RANGE: f32 = 1.0;
}

/// Function cycling schedule
pub mod schedule {
    /// Seconds a function is held before auto-advance
    pub const DEFAULT_HOLD_DURATION: f32 = 2.0;

    /// Seconds spent morphing between two functions
    pub const DEFAULT_TRANSITION_DURATION: f32 = 2.0;

    pub const DEFAULT_AUTO_ADVANCE: bool = false;
}

/// Grid sampling
pub mod sampling {
    /// Grids with at least this many points are sampled across threads
    pub const PARALLEL_POINT_THRESHOLD: usize = 16_384;
}

/// GPU-backed variant
pub mod gpu {
    /// Compute workgroup edge (8x8 threads per group)
    pub const WORKGROUP_SIZE: u32 = 8;
}

/// Frame-rate sampling
pub mod frame_stats {
    pub const DEFAULT_SAMPLE_DURATION: f32 = 1.0;
    pub const MIN_SAMPLE_DURATION: f32 = 0.1;
    pub const MAX_SAMPLE_DURATION: f32 = 2.0;
}
