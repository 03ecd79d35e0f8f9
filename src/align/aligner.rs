use crate::subtitles::SubtitleInterval;

/// Outcome of aligning one timestamp against a subtitle sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentResult<'a> {
    /// The interval containing the timestamp, or the nearest one when no
    /// interval contains it
    Aligned(&'a SubtitleInterval),
    /// The sequence had no subtitles at all
    NoSubtitles,
}

impl<'a> AlignmentResult<'a> {
    /// The aligned interval, if any subtitles were available
    pub fn interval(&self) -> Option<&'a SubtitleInterval> {
        match self {
            AlignmentResult::Aligned(interval) => Some(interval),
            AlignmentResult::NoSubtitles => None,
        }
    }

    pub fn is_no_subtitles(&self) -> bool {
        matches!(self, AlignmentResult::NoSubtitles)
    }
}

/// Find the subtitle that applies at `timestamp`.
///
/// Phase 1 returns the first interval, in sequence order, whose range contains
/// the timestamp (boundaries inclusive, first-wins on overlap). Phase 2 falls
/// back to the interval whose nearest boundary is closest; ties keep the
/// earliest-encountered interval. Pure function over an immutable slice, so
/// concurrent callers can share the slice freely.
pub fn find_subtitle_at<'a>(
    timestamp: f64,
    subtitles: &'a [SubtitleInterval],
) -> AlignmentResult<'a> {
    for interval in subtitles {
        if interval.start_seconds <= timestamp && timestamp <= interval.end_seconds {
            return AlignmentResult::Aligned(interval);
        }
    }

    // Strict < keeps the first of any equidistant pair.
    let mut closest: Option<&SubtitleInterval> = None;
    let mut min_distance = f64::INFINITY;

    for interval in subtitles {
        let distance = (timestamp - interval.start_seconds)
            .abs()
            .min((timestamp - interval.end_seconds).abs());

        if distance < min_distance {
            min_distance = distance;
            closest = Some(interval);
        }
    }

    match closest {
        Some(interval) => AlignmentResult::Aligned(interval),
        None => AlignmentResult::NoSubtitles,
    }
}
