//! Audio classification endpoint

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use spoofcheck_core::{Label, SpoofDetector, DETECTION_THRESHOLD};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Model architecture reported with every prediction
const MODEL_TYPE: &str = "AASIST";

/// Prediction response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Classification outcome ("real" or "fake")
    pub result: Label,
    /// Spoof probability in [0, 1]
    pub score: f64,
    /// Distance from the threshold rescaled to [0, 1]
    pub confidence: f64,
    /// Decision threshold applied to the score
    pub threshold: f64,
    /// Model architecture name
    pub model_type: &'static str,
}

/// POST /predict/
///
/// Accepts a multipart form with a `file` field holding a WAV or FLAC clip
/// and returns the classification result.
///
/// Returns 400 for anything other than a `.wav`/`.flac` upload and 500 when
/// decoding or inference fails.
pub async fn predict_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<PredictResponse>> {
    let detector = state
        .detector
        .clone()
        .ok_or_else(|| ApiError::Internal("Model not loaded".to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let extension = allowed_extension(&filename)
            .ok_or_else(|| ApiError::BadRequest("Only WAV/FLAC files supported".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        info!("Processing audio file: {} ({} bytes)", filename, data.len());
        return classify_upload(detector, extension, &data).await.map(Json);
    }

    Err(ApiError::BadRequest("Missing file field".to_string()))
}

/// Write the upload to a scoped temp file and run the detection pipeline
///
/// The temp file is removed when the guard drops, whichever way this
/// function exits.
async fn classify_upload(
    detector: Arc<SpoofDetector>,
    extension: &str,
    data: &[u8],
) -> ApiResult<PredictResponse> {
    let temp_file = tempfile::Builder::new()
        .prefix("spoofcheck-")
        .suffix(&format!(".{}", extension))
        .tempfile()?;
    tokio::fs::write(temp_file.path(), data).await?;

    // Decoding and inference are CPU-bound; keep them off the async runtime
    let temp_path = temp_file.path().to_path_buf();
    let prediction = tokio::task::spawn_blocking(move || detector.detect_file(&temp_path))
        .await
        .map_err(|e| ApiError::Internal(format!("Inference task failed: {}", e)))?
        .map_err(|e| {
            error!("Prediction failed: {}", e);
            ApiError::Detection(e)
        })?;

    info!(
        "Prediction result: {:?} (score={:.4}, confidence={:.4})",
        prediction.label, prediction.score, prediction.confidence
    );

    Ok(PredictResponse {
        result: prediction.label,
        score: prediction.score,
        confidence: prediction.confidence,
        threshold: DETECTION_THRESHOLD,
        model_type: MODEL_TYPE,
    })
}

/// Map an accepted upload filename to its canonical extension
///
/// The check is purely on the filename suffix, case-insensitive. Content
/// sniffing happens later in the decoder.
fn allowed_extension(filename: &str) -> Option<&'static str> {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".wav") {
        Some("wav")
    } else if lower.ends_with(".flac") {
        Some("flac")
    } else {
        None
    }
}

/// Build prediction routes
pub fn predict_routes() -> Router<AppState> {
    Router::new().route("/predict/", post(predict_audio))
}
