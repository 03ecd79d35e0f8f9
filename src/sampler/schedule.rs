use crate::errors::{FramecapResult, SamplerError};
use log::debug;

/// Default spacing between sampled frames, in seconds
pub const DEFAULT_SAMPLE_INTERVAL_SECONDS: f64 = 30.0;

/// Capture timestamps for a media source: 0, i, 2i, ... strictly below the
/// duration, so the schedule covers `[0, duration)` and never exceeds it.
///
/// A non-positive or non-finite interval is rejected instead of looping
/// forever. A non-positive duration yields an empty schedule.
pub fn sample_schedule(duration_seconds: f64, interval_seconds: f64) -> FramecapResult<Vec<f64>> {
    if !interval_seconds.is_finite() || interval_seconds <= 0.0 {
        return Err(
            SamplerError::new(format!("invalid sample interval: {}", interval_seconds)).into(),
        );
    }
    if !duration_seconds.is_finite() {
        return Err(
            SamplerError::new(format!("invalid media duration: {}", duration_seconds)).into(),
        );
    }

    let mut timestamps = Vec::new();
    let mut current = 0.0;
    while current < duration_seconds {
        timestamps.push(current);
        current += interval_seconds;
    }

    debug!(
        "Sample schedule: {} timestamps over {:.2}s at {:.2}s intervals",
        timestamps.len(),
        duration_seconds,
        interval_seconds
    );
    Ok(timestamps)
}
