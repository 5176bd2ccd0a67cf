//! Log controller: connects routes to the ingestion usecase

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::log_dto::LogEntry;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn ingest(
        State(state): State<AppState>,
        payload: Result<Json<LogEntry>, JsonRejection>,
    ) -> Result<Json<Value>, AppError> {
        // The rejection text is echoed to the caller, matching 400 semantics
        let Json(entry) =
            payload.map_err(|rejection| AppError::BodyParsingError(rejection.body_text()))?;

        state
            .log_service
            .ingest(entry)
            .await
            .map(Json)
            .map_err(AppError::DatabaseError)
    }
}
