//! Spoofing detection pipeline
//!
//! Ties decoding, preprocessing and the classifier together. A single
//! [`SpoofDetector`] is built at startup and shared across requests; it
//! holds no mutable state, so no locking is needed.

use crate::audio::{decode_audio_file, prepare_waveform};
use crate::error::Result;
use crate::model::{ModelConfig, OnnxClassifier, SpoofClassifier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Spoof probability above which audio is labeled fake
pub const DETECTION_THRESHOLD: f64 = 0.5;

/// Classification outcome for one audio clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Bona fide human speech
    Real,
    /// Synthesized or converted speech
    Fake,
}

/// Result of classifying one audio clip
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Classification outcome
    pub label: Label,
    /// Spoof probability in [0, 1]
    pub score: f64,
    /// Distance from the decision boundary rescaled to [0, 1]
    pub confidence: f64,
}

impl Prediction {
    fn from_score(score: f64) -> Self {
        let label = if score > DETECTION_THRESHOLD {
            Label::Fake
        } else {
            Label::Real
        };
        let confidence = ((score - DETECTION_THRESHOLD).abs() * 2.0).min(1.0);
        Self {
            label,
            score,
            confidence,
        }
    }
}

/// The full detection pipeline around a loaded classifier
pub struct SpoofDetector {
    classifier: Box<dyn SpoofClassifier>,
    nb_samp: usize,
}

impl SpoofDetector {
    /// Load the model configuration and ONNX weights from disk
    pub fn load(config_path: &Path, weights_path: &Path) -> Result<Self> {
        let config = ModelConfig::from_file(config_path)?;
        let classifier = OnnxClassifier::from_file(weights_path)?;

        info!(
            architecture = config.architecture(),
            nb_samp = config.nb_samp(),
            weights = %weights_path.display(),
            "Model loaded"
        );

        Ok(Self::with_classifier(Box::new(classifier), config.nb_samp()))
    }

    /// Build a detector around any classifier implementation
    pub fn with_classifier(classifier: Box<dyn SpoofClassifier>, nb_samp: usize) -> Self {
        Self {
            classifier,
            nb_samp,
        }
    }

    /// Decode an audio file, preprocess it and classify it
    pub fn detect_file(&self, path: &Path) -> Result<Prediction> {
        let audio = decode_audio_file(path)?;
        debug!(
            sample_rate = audio.sample_rate,
            channels = audio.channels,
            duration_seconds = audio.duration_seconds,
            "Audio decoded"
        );

        let waveform = prepare_waveform(audio.samples, audio.sample_rate, self.nb_samp)?;
        self.detect_waveform(&waveform)
    }

    /// Classify an already prepared waveform
    pub fn detect_waveform(&self, waveform: &[f32]) -> Result<Prediction> {
        let (bonafide, spoof) = self.classifier.classify(waveform)?;
        let score = spoof_probability(bonafide, spoof);

        let prediction = Prediction::from_score(score);
        debug!(
            label = ?prediction.label,
            score = prediction.score,
            confidence = prediction.confidence,
            "Classification complete"
        );
        Ok(prediction)
    }
}

/// Softmax over the two class logits, returning the spoof probability
///
/// The max is subtracted before exponentiating so extreme logits cannot
/// overflow.
fn spoof_probability(bonafide: f32, spoof: f32) -> f64 {
    let max = f64::from(bonafide).max(f64::from(spoof));
    let e_bonafide = (f64::from(bonafide) - max).exp();
    let e_spoof = (f64::from(spoof) - max).exp();
    e_spoof / (e_bonafide + e_spoof)
}
