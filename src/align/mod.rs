mod aligner;

pub use aligner::{find_subtitle_at, AlignmentResult};
