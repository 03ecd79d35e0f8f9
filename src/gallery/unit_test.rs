use crate::errors::FramecapError;
use crate::gallery::{build_gallery, process_media};
use crate::subtitles::parse_srt;

mod test_helpers {
    use crate::errors::{FramecapResult, SamplerError};
    use crate::sampler::{sample_schedule, FrameSampler, SampledFrame};

    pub const TWO_BLOCK_SRT: &str =
        "1\n00:00:01,000 --> 00:00:04,000\nHello\n\n2\n00:00:10,000 --> 00:00:12,500\nWorld";

    /// In-memory sampler that yields one fixed payload per scheduled timestamp
    pub struct ScriptedSampler {
        pub duration_seconds: f64,
        pub payload: Vec<u8>,
    }

    impl FrameSampler for ScriptedSampler {
        fn sample_frames(&mut self, interval_seconds: f64) -> FramecapResult<Vec<SampledFrame>> {
            let frames = sample_schedule(self.duration_seconds, interval_seconds)?
                .into_iter()
                .map(|timestamp_seconds| SampledFrame {
                    timestamp_seconds,
                    image: self.payload.clone(),
                })
                .collect();
            Ok(frames)
        }
    }

    /// Sampler that always fails, standing in for an unreadable source
    pub struct FailingSampler;

    impl FrameSampler for FailingSampler {
        fn sample_frames(&mut self, _interval_seconds: f64) -> FramecapResult<Vec<SampledFrame>> {
            Err(SamplerError::new("seek failed at 0.00s").into())
        }
    }
}

#[test]
fn test_build_gallery_pairs_frames_with_captions() {
    use test_helpers::*;
    let subtitles = parse_srt(TWO_BLOCK_SRT);
    let mut sampler = ScriptedSampler {
        duration_seconds: 25.0,
        payload: b"frame".to_vec(),
    };

    use crate::sampler::FrameSampler;
    let frames = sampler.sample_frames(10.0).unwrap();
    let gallery = build_gallery(&frames, &subtitles);

    assert_eq!(gallery.len(), 3);
    // 0.0 is nearest "Hello", 10.0 is inside "World", 20.0 is nearest "World".
    assert_eq!(gallery[0].caption.as_deref(), Some("Hello"));
    assert_eq!(gallery[1].caption.as_deref(), Some("World"));
    assert_eq!(gallery[2].caption.as_deref(), Some("World"));
}

#[test]
fn test_gallery_entries_keep_frame_order_and_clock() {
    use test_helpers::*;
    let subtitles = parse_srt(TWO_BLOCK_SRT);
    let mut sampler = ScriptedSampler {
        duration_seconds: 95.0,
        payload: b"frame".to_vec(),
    };

    use crate::sampler::FrameSampler;
    let frames = sampler.sample_frames(30.0).unwrap();
    let gallery = build_gallery(&frames, &subtitles);

    let timestamps: Vec<f64> = gallery.iter().map(|e| e.timestamp_seconds).collect();
    assert_eq!(timestamps, vec![0.0, 30.0, 60.0, 90.0]);
    assert_eq!(gallery[3].clock, "00:01:30");
}

#[test]
fn test_frame_payload_is_base64_encoded() {
    use test_helpers::*;
    let subtitles = parse_srt(TWO_BLOCK_SRT);
    let frames = vec![crate::sampler::SampledFrame {
        timestamp_seconds: 2.0,
        image: b"frame".to_vec(),
    }];

    let gallery = build_gallery(&frames, &subtitles);
    assert_eq!(gallery[0].image_base64, "ZnJhbWU=");
}

#[test]
fn test_empty_subtitles_yield_none_captions() {
    let frames = vec![crate::sampler::SampledFrame {
        timestamp_seconds: 0.0,
        image: Vec::new(),
    }];

    let gallery = build_gallery(&frames, &[]);
    assert_eq!(gallery.len(), 1);
    assert!(gallery[0].caption.is_none());
}

#[test]
fn test_process_media_end_to_end() {
    use test_helpers::*;
    let sampler = ScriptedSampler {
        duration_seconds: 15.0,
        payload: b"frame".to_vec(),
    };

    let gallery = process_media(sampler, TWO_BLOCK_SRT, 5.0).unwrap();

    assert_eq!(gallery.len(), 3);
    assert_eq!(gallery[0].caption.as_deref(), Some("Hello"));
    assert_eq!(gallery[1].caption.as_deref(), Some("Hello"));
    assert_eq!(gallery[2].caption.as_deref(), Some("World"));
}

#[test]
fn test_sampler_failure_aborts_the_run() {
    use test_helpers::*;
    let result = process_media(FailingSampler, TWO_BLOCK_SRT, 30.0);
    assert!(matches!(result, Err(FramecapError::Sampler(_))));
}
