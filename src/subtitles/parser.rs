use super::types::SubtitleInterval;
use crate::errors::{FramecapResult, SubtitleError};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static TIMECODE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d{3}) --> (\d{2}):(\d{2}):(\d{2}),(\d{3})").unwrap()
});

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Parse SRT text into subtitle intervals, preserving file order.
///
/// Malformed blocks are silently skipped, so this never fails. No re-sorting
/// by time happens here; callers that need time-sorted output must sort
/// themselves.
pub fn parse_srt(raw: &str) -> Vec<SubtitleInterval> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut intervals = Vec::new();
    for block in BLOCK_SEPARATOR.split(trimmed) {
        match parse_block(block) {
            Some(interval) => intervals.push(interval),
            None => debug!("Skipping malformed subtitle block: {:?}", block),
        }
    }

    info!("Parsed {} subtitle intervals", intervals.len());
    intervals
}

/// Read a local SRT file and parse it.
///
/// Malformed blocks inside the file are still skipped silently; only I/O
/// failures and non-text content are errors.
pub fn read_srt_file<P: AsRef<Path>>(path: P) -> FramecapResult<Vec<SubtitleInterval>> {
    let bytes = std::fs::read(path)?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| SubtitleError::new("subtitle file is not valid UTF-8 text"))?;
    Ok(parse_srt(&raw))
}

/// Parse a single block: sequence index line, timecode range line, caption lines.
/// Returns None if the block has fewer than 3 lines or its timecode line does
/// not match the SRT range pattern.
fn parse_block(block: &str) -> Option<SubtitleInterval> {
    let lines: Vec<&str> = block.trim().split('\n').collect();
    if lines.len() < 3 {
        return None;
    }

    // Index parse failures do not reject the block; the field is diagnostic-only.
    let index = lines[0].trim().parse::<i64>().ok();

    let caps = TIMECODE_RANGE.captures(lines[1])?;
    let start_seconds = timecode_seconds(&caps, 1);
    let end_seconds = timecode_seconds(&caps, 5);

    // Out-of-order start/end pairs are kept as given, no clamping.
    let text = MARKUP_TAG
        .replace_all(&lines[2..].join("\n"), "")
        .into_owned();

    Some(SubtitleInterval {
        index,
        start_seconds,
        end_seconds,
        text,
    })
}

/// Convert four consecutive capture groups (HH, MM, SS, mmm) to total seconds
fn timecode_seconds(caps: &Captures<'_>, first_group: usize) -> f64 {
    let hours = capture_value(caps, first_group);
    let minutes = capture_value(caps, first_group + 1);
    let seconds = capture_value(caps, first_group + 2);
    let millis = capture_value(caps, first_group + 3);
    hours * 3600.0 + minutes * 60.0 + seconds + millis / 1000.0
}

fn capture_value(caps: &Captures<'_>, group: usize) -> f64 {
    // Groups are \d{2} or \d{3}, so the parse cannot fail in practice.
    caps[group].parse::<u32>().unwrap_or(0) as f64
}
