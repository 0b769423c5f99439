//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::api::AppState;
use crate::detector::Detection;

/// Detect anomalies in an arbitrary JSON payload
///
/// Body parsing is left to the `Json` extractor, so malformed input is
/// rejected before the detector runs.
pub async fn detect_anomalies(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Detection>, (StatusCode, String)> {
    let detection = state.detector.detect(&payload).await.map_err(|e| {
        tracing::warn!(
            detector = state.detector.name(),
            error = %e,
            "Anomaly detection failed"
        );
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    Ok(Json(detection))
}
