//! Frame Rate Sampler Operations - Pure DOP Functions

use super::frame_stats_data::{FrameRateReport, FrameStatsData};
use crate::constants::frame_stats::{MAX_SAMPLE_DURATION, MIN_SAMPLE_DURATION};
use crate::error::{invalid_config, GraphResult};

/// Create a sampler with a window of `sample_duration` seconds
pub fn create_frame_stats(sample_duration: f32) -> GraphResult<FrameStatsData> {
    if !(MIN_SAMPLE_DURATION..=MAX_SAMPLE_DURATION).contains(&sample_duration) {
        return Err(invalid_config(
            "frame_stats.sample_duration",
            sample_duration,
            format!("must be within [{}, {}]", MIN_SAMPLE_DURATION, MAX_SAMPLE_DURATION),
        ));
    }

    Ok(FrameStatsData {
        sample_duration,
        frames: 0,
        duration: 0.0,
        best_duration: f32::MAX,
        worst_duration: 0.0,
    })
}

/// Record one frame; returns a report and restarts the window once it is full
pub fn record_frame(stats: &mut FrameStatsData, frame_duration: f32) -> Option<FrameRateReport> {
    if !frame_duration.is_finite() || frame_duration <= 0.0 {
        return None;
    }

    stats.frames += 1;
    stats.duration += frame_duration;
    stats.best_duration = stats.best_duration.min(frame_duration);
    stats.worst_duration = stats.worst_duration.max(frame_duration);

    if stats.duration < stats.sample_duration {
        return None;
    }

    let report = FrameRateReport {
        frames: stats.frames,
        average_fps: stats.frames as f32 / stats.duration,
        best_fps: 1.0 / stats.best_duration,
        worst_fps: 1.0 / stats.worst_duration,
    };
    reset_frame_stats(stats);
    Some(report)
}

/// Discard the current window
pub fn reset_frame_stats(stats: &mut FrameStatsData) {
    stats.frames = 0;
    stats.duration = 0.0;
    stats.best_duration = f32::MAX;
    stats.worst_duration = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        assert!(create_frame_stats(0.05).is_err());
        assert!(create_frame_stats(2.5).is_err());
        assert!(create_frame_stats(1.0).is_ok());
    }

    #[test]
    fn test_report_after_window() {
        let mut stats = create_frame_stats(1.0).expect("valid window");

        assert_eq!(record_frame(&mut stats, 0.25), None);
        assert_eq!(record_frame(&mut stats, 0.5), None);
        let report = record_frame(&mut stats, 0.25).expect("window is full");

        assert_eq!(report.frames, 3);
        assert_eq!(report.average_fps, 3.0);
        assert_eq!(report.best_fps, 4.0);
        assert_eq!(report.worst_fps, 2.0);

        // Window restarted
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.best_duration, f32::MAX);
    }

    #[test]
    fn test_invalid_frames_ignored() {
        let mut stats = create_frame_stats(0.5).expect("valid window");
        assert_eq!(record_frame(&mut stats, 0.0), None);
        assert_eq!(record_frame(&mut stats, f32::INFINITY), None);
        assert_eq!(stats.frames, 0);
    }
}
