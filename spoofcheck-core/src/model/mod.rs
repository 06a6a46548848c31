//! Model loading and inference
//!
//! The classifier is loaded once at startup and shared read-only across
//! requests. [`SpoofClassifier`] is the seam between the detection pipeline
//! and the inference runtime, so tests can substitute a stub model.

pub mod config;
pub mod onnx;

pub use config::ModelConfig;
pub use onnx::OnnxClassifier;

use crate::error::Result;

/// Interface to a trained spoofing countermeasure model
///
/// Implementations take a prepared waveform (16 kHz, fixed length, z-score
/// normalized) and return the raw class logits as `(bonafide, spoof)`.
pub trait SpoofClassifier: Send + Sync {
    fn classify(&self, waveform: &[f32]) -> Result<(f32, f32)>;
}
