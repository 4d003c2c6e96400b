//! API handlers for the compliance server
//!
//! Provides REST endpoints for:
//! - Ad-hoc text validation
//! - Document upload, listing, re-validation and deletion
//! - Rule catalog listing

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap},
    Json,
};
use document_pipeline::{DocumentRecord, UploadOutcome};
use serde::{Deserialize, Serialize};
use shared_types::{ComplianceRule, IssueSummary, Recommendation, ScoreStatus, ValidationResult};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "compliance-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Rule catalog response
#[derive(Serialize)]
pub struct RuleListResponse {
    pub success: bool,
    pub rules: Vec<ComplianceRule>,
    pub count: usize,
    /// Rule names the engine can reclassify from the catalog
    pub enrichable_rules: Vec<&'static str>,
}

/// Handler: GET /api/rules
pub async fn handle_list_rules(State(state): State<AppState>) -> Json<RuleListResponse> {
    let rules = state.catalog.rules().to_vec();
    let count = rules.len();

    Json(RuleListResponse {
        success: true,
        rules,
        count,
        enrichable_rules: state.engine.catalog_rule_names(),
    })
}

/// Validation request body
#[derive(Deserialize)]
pub struct ValidateRequest {
    /// Identifier echoed back in the result
    #[serde(default = "default_document_id")]
    pub document_id: String,

    /// Extracted document text
    pub text: Option<String>,
}

fn default_document_id() -> String {
    "adhoc".to_string()
}

/// Validation response
#[derive(Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub result: ValidationResult,
    pub summary: IssueSummary,
    pub status: ScoreStatus,
    pub status_label: &'static str,
    pub recommendations: Vec<Recommendation>,
}

impl ValidateResponse {
    fn from_result(result: ValidationResult) -> Self {
        let status = result.status();
        Self {
            success: true,
            summary: result.summary(),
            recommendations: result.recommendations(),
            status,
            status_label: status.label(),
            result,
        }
    }
}

/// Handler: POST /api/validate
pub async fn handle_validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ServerError> {
    let Json(req) = payload?;
    info!("Validation request: document_id={}", req.document_id);

    let result = state.engine.validate_document(
        &req.document_id,
        req.text.as_deref(),
        Some(state.catalog.as_ref()),
    )?;
    debug!("Issues: {:?}", result.issues);

    Ok(Json(ValidateResponse::from_result(result)))
}

/// Upload request body
#[derive(Deserialize)]
pub struct UploadRequest {
    pub file_name: String,

    #[serde(default = "default_mime_type")]
    pub mime_type: String,

    /// Extracted text; absent when extraction produced nothing
    pub content: Option<String>,
}

fn default_mime_type() -> String {
    "text/plain".to_string()
}

/// Upload response
#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: UploadOutcome,
    pub summary: IssueSummary,
    pub status: ScoreStatus,
    pub recommendations: Vec<Recommendation>,
}

impl UploadResponse {
    fn from_outcome(outcome: UploadOutcome) -> Self {
        Self {
            success: true,
            summary: outcome.validation_result.summary(),
            recommendations: outcome.validation_result.recommendations(),
            status: outcome.validation_result.status(),
            outcome,
        }
    }
}

/// Handler: POST /api/documents
pub async fn handle_upload_document(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, ServerError> {
    let Json(req) = payload?;
    info!(
        "Upload request: file_name={}, mime_type={}",
        req.file_name, req.mime_type
    );

    require_file_name(&req.file_name)?;

    let outcome = state
        .pipeline
        .upload(&req.file_name, &req.mime_type, req.content)?;

    Ok(Json(UploadResponse::from_outcome(outcome)))
}

/// Query parameters for a raw upload
#[derive(Deserialize)]
pub struct RawUploadParams {
    pub file_name: String,
}

/// Handler: POST /api/documents/raw?file_name=...
///
/// The request body is the file itself; its content type becomes the
/// document's MIME type.
pub async fn handle_upload_raw_document(
    State(state): State<AppState>,
    params: Result<Query<RawUploadParams>, QueryRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadResponse>, ServerError> {
    let Query(params) = params?;
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream");
    info!(
        "Raw upload request: file_name={}, mime_type={}, {} bytes",
        params.file_name,
        mime_type,
        body.len()
    );

    require_file_name(&params.file_name)?;

    let outcome = state
        .pipeline
        .upload_bytes(&params.file_name, mime_type, &body)?;

    Ok(Json(UploadResponse::from_outcome(outcome)))
}

fn require_file_name(file_name: &str) -> Result<(), ServerError> {
    if file_name.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "file_name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Document list response
#[derive(Serialize)]
pub struct DocumentListResponse {
    pub success: bool,
    pub documents: Vec<DocumentRecord>,
    pub count: usize,
}

/// Handler: GET /api/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
) -> Result<Json<DocumentListResponse>, ServerError> {
    let documents = state.pipeline.list_documents()?;
    let count = documents.len();

    Ok(Json(DocumentListResponse {
        success: true,
        documents,
        count,
    }))
}

/// Handler: GET /api/documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentRecord>, ServerError> {
    Ok(Json(state.pipeline.get_document(&id)?))
}

/// Handler: POST /api/documents/:id/validate
pub async fn handle_revalidate_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UploadResponse>, ServerError> {
    let id = document_pipeline::parse_document_id(&id)?;
    info!("Re-validation request: document {}", id);

    let outcome = state.pipeline.revalidate(id)?;

    Ok(Json(UploadResponse::from_outcome(outcome)))
}

/// Handler: DELETE /api/documents/:id
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DocumentRecord>, ServerError> {
    Ok(Json(state.pipeline.delete_document(&id)?))
}
