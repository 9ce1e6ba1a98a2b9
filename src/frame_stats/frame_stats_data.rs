//! Frame Rate Sampler Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in frame_stats_operations.rs

/// Accumulator over one sampling window of wall-clock frame durations
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStatsData {
    /// Window length in seconds
    pub sample_duration: f32,

    pub frames: u32,
    pub duration: f32,
    pub best_duration: f32,
    pub worst_duration: f32,
}

/// Summary emitted when a window closes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRateReport {
    pub frames: u32,
    pub average_fps: f32,
    /// From the shortest frame in the window
    pub best_fps: f32,
    /// From the longest frame in the window
    pub worst_fps: f32,
}
