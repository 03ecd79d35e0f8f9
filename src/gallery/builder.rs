use super::types::GalleryEntry;
use crate::align::find_subtitle_at;
use crate::errors::FramecapResult;
use crate::sampler::{FrameSampler, SampledFrame};
use crate::subtitles::{format_clock, parse_srt, SubtitleInterval};
use base64::{engine::general_purpose, Engine as _};
use log::info;

/// Pair every sampled frame with the subtitle active at its timestamp.
///
/// One aligner call per frame, frame order preserved. The caption is `None`
/// only when the subtitle sequence is empty; a frame in a gap between
/// intervals still gets the nearest caption.
pub fn build_gallery(frames: &[SampledFrame], subtitles: &[SubtitleInterval]) -> Vec<GalleryEntry> {
    let entries: Vec<GalleryEntry> = frames
        .iter()
        .map(|frame| {
            let caption = find_subtitle_at(frame.timestamp_seconds, subtitles)
                .interval()
                .map(|interval| interval.text.clone());

            GalleryEntry {
                timestamp_seconds: frame.timestamp_seconds,
                clock: format_clock(frame.timestamp_seconds),
                image_base64: general_purpose::STANDARD.encode(&frame.image),
                caption,
            }
        })
        .collect();

    info!("Built gallery with {} entries", entries.len());
    entries
}

/// Full run over one media source: parse the subtitles, pull frames from the
/// sampler at the given cadence, align each frame.
///
/// Sampler failures abort the run; there is no retry or partial recovery here.
pub fn process_media<S: FrameSampler>(
    mut sampler: S,
    srt_text: &str,
    interval_seconds: f64,
) -> FramecapResult<Vec<GalleryEntry>> {
    info!("Gallery Processing...");

    let subtitles = parse_srt(srt_text);

    let frames = sampler.sample_frames(interval_seconds)?;
    info!("Sampler yielded {} frames", frames.len());

    Ok(build_gallery(&frames, &subtitles))
}
