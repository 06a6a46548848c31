//! ONNX inference via candle
//!
//! The trained network is exported to ONNX and evaluated directly from the
//! graph proto. No weights are compiled in; the model file is read once at
//! startup and kept in memory.

use crate::error::{Error, Result};
use crate::model::SpoofClassifier;
use candle_core::{Device, Tensor};
use candle_onnx::onnx::ModelProto;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Classifier backed by an ONNX export of the trained network
pub struct OnnxClassifier {
    model: ModelProto,
    input_name: String,
    output_name: String,
    device: Device,
}

impl OnnxClassifier {
    /// Load an ONNX model from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let model = candle_onnx::read_file(path)
            .map_err(|e| Error::Model(format!("Failed to load {}: {}", path.display(), e)))?;
        Self::from_proto(model)
    }

    fn from_proto(model: ModelProto) -> Result<Self> {
        let graph = model
            .graph
            .as_ref()
            .ok_or_else(|| Error::Model("ONNX model has no graph".to_string()))?;

        let input_name = graph
            .input
            .first()
            .ok_or_else(|| Error::Model("ONNX graph declares no inputs".to_string()))?
            .name
            .clone();

        // The network emits (embedding, logits); the logits are the last
        // declared graph output.
        let output_name = graph
            .output
            .last()
            .ok_or_else(|| Error::Model("ONNX graph declares no outputs".to_string()))?
            .name
            .clone();

        debug!(
            input = %input_name,
            output = %output_name,
            nodes = graph.node.len(),
            "ONNX model ready"
        );

        Ok(Self {
            model,
            input_name,
            output_name,
            device: Device::Cpu,
        })
    }
}

impl SpoofClassifier for OnnxClassifier {
    fn classify(&self, waveform: &[f32]) -> Result<(f32, f32)> {
        let input = Tensor::from_slice(waveform, (1, waveform.len()), &self.device)?;

        let mut inputs = HashMap::new();
        inputs.insert(self.input_name.clone(), input);

        let mut outputs = candle_onnx::simple_eval(&self.model, inputs)?;
        let logits = outputs
            .remove(&self.output_name)
            .ok_or_else(|| Error::Model(format!("Missing graph output '{}'", self.output_name)))?;

        let values = logits.flatten_all()?.to_vec1::<f32>()?;
        match values.as_slice() {
            [bonafide, spoof] => Ok((*bonafide, *spoof)),
            other => Err(Error::Model(format!(
                "Expected 2 class logits, got {} values",
                other.len()
            ))),
        }
    }
}
