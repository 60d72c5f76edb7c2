//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::process_document;
use crate::error::EngineError;
use crate::models::{AttendanceReport, SummaryRow};
use crate::report::render_summary_table;

use super::request::ProcessRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// | Method | Path | Result |
/// |---|---|---|
/// | `GET` | `/health` | liveness probe |
/// | `POST` | `/attendance` | processed [`AttendanceReport`] |
/// | `POST` | `/summaries` | processed and saved [`SummaryRow`] |
/// | `GET` | `/summaries` | every saved row |
/// | `GET` | `/summaries/report` | fixed-layout text table |
/// | `GET` | `/summaries/:id` | one saved row |
/// | `DELETE` | `/summaries/:id` | removes one row |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/attendance", post(attendance_handler))
        .route(
            "/summaries",
            post(create_summary_handler).get(list_summaries_handler),
        )
        .route("/summaries/report", get(summary_report_handler))
        .route(
            "/summaries/:id",
            get(get_summary_handler).delete(delete_summary_handler),
        )
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for `POST /attendance`.
///
/// Processes the submitted text and returns the full report without
/// saving anything.
async fn attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<AttendanceReport>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance document");

    let request = parse_payload(payload, correlation_id)?;
    let report = run_pipeline(&state, &request, correlation_id)?;
    Ok(Json(report))
}

/// Handler for `POST /summaries`.
///
/// Processes the submitted text, flattens the report into a summary row
/// and saves it.
async fn create_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Saving attendance summary");

    let request = parse_payload(payload, correlation_id)?;
    let report = run_pipeline(&state, &request, correlation_id)?;

    let row = SummaryRow::from_report(&report, Utc::now());
    let saved = state
        .store()
        .save(row)
        .map_err(|err| log_failure(err, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        summary_id = %saved.id,
        name = %saved.name,
        "Summary saved"
    );
    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

/// Handler for `GET /summaries`.
async fn list_summaries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SummaryRow>>, ApiErrorResponse> {
    let rows = state
        .store()
        .list()
        .map_err(|err| log_failure(err, Uuid::new_v4()))?;
    Ok(Json(rows))
}

/// Handler for `GET /summaries/report`.
///
/// Renders every saved row into the four-column text table.
async fn summary_report_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let rows = state
        .store()
        .list()
        .map_err(|err| log_failure(err, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        rows = rows.len(),
        "Rendering summary report"
    );
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_summary_table(&rows),
    )
        .into_response())
}

/// Handler for `GET /summaries/:id`.
async fn get_summary_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SummaryRow>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = parse_id(id, correlation_id)?;
    let row = state
        .store()
        .get(id)
        .map_err(|err| log_failure(err, correlation_id))?;
    Ok(Json(row))
}

/// Handler for `DELETE /summaries/:id`.
async fn delete_summary_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = parse_id(id, correlation_id)?;
    state
        .store()
        .delete(id)
        .map_err(|err| log_failure(err, correlation_id))?;

    info!(correlation_id = %correlation_id, summary_id = %id, "Summary deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn run_pipeline(
    state: &AppState,
    request: &ProcessRequest,
    correlation_id: Uuid,
) -> Result<AttendanceReport, ApiErrorResponse> {
    let start_time = Instant::now();
    let report = process_document(&request.text, request.gender, state.policy())
        .map_err(|err| log_failure(err, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        records = report.records.len(),
        warnings = report.warnings.len(),
        total_overtime_seconds = report.summary.total_overtime_seconds,
        duration_us = start_time.elapsed().as_micros(),
        "Document processed successfully"
    );
    Ok(report)
}

fn log_failure(err: EngineError, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    err.into()
}

fn parse_payload(
    payload: Result<Json<ProcessRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<ProcessRequest, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn parse_id(
    id: Result<Path<Uuid>, PathRejection>,
    correlation_id: Uuid,
) -> Result<Uuid, ApiErrorResponse> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid summary id"
            );
            Err(ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_ID",
                "Summary id must be a UUID",
                body_text,
            )))
        }
    }
}
