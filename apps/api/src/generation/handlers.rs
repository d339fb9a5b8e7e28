//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::validation::validate_review_request;
use crate::models::review::ReplySource;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ReplyMetadata {
    pub business_name: String,
    pub business_type: String,
    pub rating: u8,
    pub generated_at: DateTime<Utc>,
    pub source: ReplySource,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub response: String,
    pub metadata: ReplyMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-response
///
/// Validates the review, then replies via the AI path or the template fallback.
/// The body is taken as raw JSON so that every validation failure, including a
/// malformed body, produces the same `{error}` shape.
pub async fn handle_generate_response(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        AppError::Validation(format!(
            "Request body must be valid JSON: {}",
            rejection.body_text()
        ))
    })?;

    let request = validate_review_request(&body)?;

    let request_id = Uuid::new_v4();
    let reply = state
        .generator
        .generate(&request)
        .instrument(info_span!("generate_reply", %request_id))
        .await
        .map_err(AppError::Generation)?;

    info!(
        "Generated response for {} ({}) - {} stars via {:?}",
        request.business_name, request.business_type, request.rating, reply.source
    );

    Ok(Json(GenerateResponse {
        success: true,
        response: reply.text,
        metadata: ReplyMetadata {
            business_name: request.business_name,
            business_type: request.business_type,
            rating: request.rating,
            generated_at: reply.generated_at,
            source: reply.source,
        },
    }))
}
