//! Error types for spoofcheck-core
//!
//! Module-specific error types using thiserror for clear error propagation.

use thiserror::Error;

/// Convenience Result type using the core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the preprocessing and inference pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Audio decoding errors (probe, codec, corrupt data)
    #[error("Audio decode error: {0}")]
    Decode(String),

    /// Sample-rate conversion errors
    #[error("Resample error: {0}")]
    Resample(String),

    /// Model configuration file errors
    #[error("Model config error: {0}")]
    Config(String),

    /// Model artifact structure errors (missing graph, wrong output shape)
    #[error("Model error: {0}")]
    Model(String),

    /// Errors raised by the inference runtime during evaluation
    #[error("Inference error: {0}")]
    Inference(#[from] candle_core::Error),
}
