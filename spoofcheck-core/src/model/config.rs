//! Model configuration file parsing
//!
//! The configuration ships alongside the weights as a JSON file. Most of it
//! is training metadata; the server only needs the architecture block.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration bundled with the trained model
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Architecture hyperparameters
    pub model_config: ArchitectureParams,
}

/// The subset of architecture parameters the server uses
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureParams {
    /// Architecture name, e.g. "AASIST"
    #[serde(default)]
    pub architecture: Option<String>,
    /// Input window length in samples at 16 kHz
    pub nb_samp: usize,
}

impl ModelConfig {
    /// Load and parse a model configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Input window length the model expects
    pub fn nb_samp(&self) -> usize {
        self.model_config.nb_samp
    }

    /// Architecture name, if the configuration declares one
    pub fn architecture(&self) -> &str {
        self.model_config
            .architecture
            .as_deref()
            .unwrap_or("unknown")
    }
}
