pub mod subtitles;
pub use subtitles::{format_clock, format_timestamp, parse_srt, read_srt_file, SubtitleInterval};

pub mod align;
pub use align::{find_subtitle_at, AlignmentResult};

pub mod sampler;
pub use sampler::{sample_schedule, FrameSampler, SampledFrame, DEFAULT_SAMPLE_INTERVAL_SECONDS};

pub mod gallery;
pub use gallery::{build_gallery, process_media, GalleryEntry};

pub mod errors;
pub use errors::{FramecapError, FramecapResult, SamplerError, SubtitleError};
