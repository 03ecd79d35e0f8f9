/// One still frame captured from a media source.
///
/// The image payload is an opaque encoded blob; nothing here ever inspects
/// pixel data. Timestamps are expected to be monotonically non-decreasing
/// within one run.
#[derive(Debug, Clone)]
pub struct SampledFrame {
    pub timestamp_seconds: f64,
    pub image: Vec<u8>,
}
