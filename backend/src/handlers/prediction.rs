//! HTTP handler for the crop prediction endpoint

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use shared::PredictionResult;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::current_month;
use crate::AppState;

/// Predict a crop for a city and soil readings.
///
/// The body is read raw rather than through the `Json` extractor: any JSON
/// object is accepted regardless of content type, and a body that is not a
/// JSON object is a server error, not a client one.
pub async fn predict_crop(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictionResult>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);

    async move {
        let payload: Value = serde_json::from_slice(&body)
            .map_err(|e| AppError::MalformedBody(e.to_string()))?;
        let object = payload
            .as_object()
            .ok_or_else(|| AppError::MalformedBody("expected a JSON object".to_string()))?;

        let outcome = state.predictor.predict(object, current_month()).await?;
        if !outcome.diagnostics.is_empty() {
            tracing::debug!(diagnostics = ?outcome.diagnostics, "Prediction used defaults");
        }

        Ok(Json(outcome.result))
    }
    .instrument(span)
    .await
}
