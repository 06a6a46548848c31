//! Audio preprocessing pipeline
//!
//! Everything between an uploaded file and the fixed-shape waveform the
//! classifier expects: decode, resample, length fixing, normalization.

pub mod decode;
pub mod normalize;
pub mod resample;

pub use decode::{decode_audio_file, DecodedAudio};
pub use normalize::{prepare_waveform, TARGET_SAMPLE_RATE};
