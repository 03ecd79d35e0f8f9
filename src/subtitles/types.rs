use serde::Serialize;

/// One subtitle cue: a time range in seconds with its caption text
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubtitleInterval {
    /// Author-assigned sequence number; not guaranteed contiguous or unique,
    /// kept for diagnostics only and never used for matching
    pub index: Option<i64>,
    pub start_seconds: f64,
    pub end_seconds: f64,
    /// Caption text with markup tags stripped; line breaks preserved
    pub text: String,
}
