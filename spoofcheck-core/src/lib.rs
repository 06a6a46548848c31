//! # spoofcheck-core
//!
//! Preprocessing and model wrapper for audio spoof detection:
//! - Audio decoding to mono f32 PCM (symphonia)
//! - Resampling, length fixing, and amplitude normalization
//! - Opaque classifier interface plus its ONNX-backed implementation
//!
//! The neural network itself is an external artifact (an exported AASIST
//! graph); this crate only prepares waveforms for it and interprets the
//! two class logits it returns. No HTTP concerns live here.

pub mod audio;
pub mod detector;
pub mod error;
pub mod model;

pub use detector::{Label, Prediction, SpoofDetector, DETECTION_THRESHOLD};
pub use error::{Error, Result};
pub use model::SpoofClassifier;
