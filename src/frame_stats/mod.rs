/// Frame Rate Sampler
///
/// Independent of the surface core: averages wall-clock frame durations
/// over a window and reports average / best / worst frames per second.

pub mod frame_stats_data;
pub mod frame_stats_operations;

pub use frame_stats_data::{FrameRateReport, FrameStatsData};
pub use frame_stats_operations::{create_frame_stats, record_frame, reset_frame_stats};
