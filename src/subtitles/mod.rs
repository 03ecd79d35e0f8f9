mod parser;
mod types;
mod utils;

pub use parser::{parse_srt, read_srt_file};
pub use types::SubtitleInterval;
pub use utils::{format_clock, format_timestamp};
