mod schedule;
mod source;
mod types;

pub use schedule::{sample_schedule, DEFAULT_SAMPLE_INTERVAL_SECONDS};
pub use source::FrameSampler;
pub use types::SampledFrame;
