//! Classifier stand-ins with known outputs

use spoofcheck_core::{Error, Result, SpoofClassifier, SpoofDetector};
use std::sync::Arc;

/// Input window length used by the production model
pub const NB_SAMP: usize = 64_600;

/// Classifier returning fixed logits regardless of input
pub struct StubClassifier {
    pub logits: (f32, f32),
}

impl SpoofClassifier for StubClassifier {
    fn classify(&self, _waveform: &[f32]) -> Result<(f32, f32)> {
        Ok(self.logits)
    }
}

/// Classifier that always fails, for exercising the 500 path
pub struct FailingClassifier;

impl SpoofClassifier for FailingClassifier {
    fn classify(&self, _waveform: &[f32]) -> Result<(f32, f32)> {
        Err(Error::Model("inference backend unavailable".to_string()))
    }
}

/// Detector wired to a stub classifier with the production window length
pub fn stub_detector(logits: (f32, f32)) -> Arc<SpoofDetector> {
    Arc::new(SpoofDetector::with_classifier(
        Box::new(StubClassifier { logits }),
        NB_SAMP,
    ))
}

/// Detector whose classifier fails on every call
pub fn failing_detector() -> Arc<SpoofDetector> {
    Arc::new(SpoofDetector::with_classifier(
        Box::new(FailingClassifier),
        NB_SAMP,
    ))
}
