//! Test helper modules for spoofcheck-api integration tests
//!
//! Provides reusable test infrastructure:
//! - audio_generator: deterministic in-memory WAV clips
//! - multipart: raw multipart/form-data body assembly
//! - stub_model: classifier stand-ins with known outputs

pub mod audio_generator;
pub mod multipart;
pub mod stub_model;

pub use audio_generator::sine_wav_bytes;
pub use multipart::multipart_body;
pub use stub_model::{failing_detector, stub_detector};
