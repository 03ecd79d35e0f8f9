use super::types::SampledFrame;
use crate::errors::FramecapResult;

/// A host-provided producer of still frames sampled from a media source.
///
/// Implementations own all decoding and seeking; a failure there is a hard
/// failure of the run and must surface as an error rather than a short frame
/// list. Frames are expected at a fixed cadence covering `[0, duration)`,
/// typically the timestamps from [`super::sample_schedule`].
pub trait FrameSampler {
    fn sample_frames(&mut self, interval_seconds: f64) -> FramecapResult<Vec<SampledFrame>>;
}
