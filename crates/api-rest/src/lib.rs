//! # API REST
//!
//! REST API implementation for vitals triage.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for request/response types and `vitals-core` for all scoring.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{AssessReq, AssessRes, ClassifyReq, ClassifyRes, HealthRes, HealthService};
use vitals_core::{classify, AnalyzerConfig, BatchAnalyzer};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<BatchAnalyzer>,
}

impl AppState {
    pub fn new(cfg: AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(BatchAnalyzer::new(cfg)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, classify_patient, assess_patients),
    components(schemas(HealthRes, ClassifyReq, ClassifyRes, AssessReq, AssessRes))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI mounted at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify_patient))
        .route("/assessments", post(assess_patients))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/classify",
    request_body = ClassifyReq,
    responses(
        (status = 200, description = "Classification of a single record", body = ClassifyRes),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Body does not have the expected shape")
    )
)]
/// Classify a single patient record
///
/// Field values are never rejected: unusable readings score zero and are reported as
/// data-quality issues in the response.
#[axum::debug_handler]
async fn classify_patient(
    State(_state): State<AppState>,
    Json(req): Json<ClassifyReq>,
) -> Json<ClassifyRes> {
    Json(ClassifyRes {
        classification: classify(&req.patient),
    })
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = AssessReq,
    responses(
        (status = 200, description = "Assessment payload and per-patient verdicts", body = AssessRes),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Body does not have the expected shape"),
        (status = 500, description = "Internal server error")
    )
)]
/// Analyse a batch of patient records
///
/// Returns the high-risk, fever and data-quality identifier lists in input order, together
/// with a summary and every per-patient classification.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - the analysis task panics or is cancelled.
#[axum::debug_handler]
async fn assess_patients(
    State(state): State<AppState>,
    Json(req): Json<AssessReq>,
) -> Result<Json<AssessRes>, (StatusCode, &'static str)> {
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&req.patients))
        .await
        .map_err(|e| {
            tracing::error!("Assessment task error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })?;

    Ok(Json(AssessRes {
        payload: analysis.payload(),
        summary: analysis.summary(),
        classifications: analysis.classifications,
    }))
}
