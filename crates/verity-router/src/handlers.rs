//! HTTP request handlers for the Router service.
//!
//! Implements the analysis, health and banner endpoints using axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use verity_domain::traits::{Classifier, TextAnalyzer};
use verity_domain::FEATURE_COUNT;
use verity_pipeline::{ErrorResponse, Pipeline, PipelineError, Report};

/// Banner served at `/`
pub const BANNER: &str = "Fake News Detection API Running";

/// Error message for a missing or empty text
pub const TEXT_MISSING: &str = "Text missing";

/// Error message when the model cannot be loaded
pub const SERVICE_UNAVAILABLE: &str = "ML service is unavailable. Please try again later.";

/// Error message for any other failure
pub const PREDICTION_FAILED: &str = "Prediction failed";

/// What the handlers need from the analysis pipeline
pub trait CredibilityService: Send + Sync {
    /// Analyze a body and its (possibly empty) headline
    fn analyze(&self, text: &str, title: &str) -> Result<Report, PipelineError>;

    /// Whether the model is resident
    fn is_model_loaded(&self) -> bool;
}

impl<A, C> CredibilityService for Pipeline<A, C>
where
    A: TextAnalyzer + Send + Sync,
    A::Error: Display,
    C: Classifier<Error = verity_pipeline::ClassifierError> + Send + Sync,
{
    fn analyze(&self, text: &str, title: &str) -> Result<Report, PipelineError> {
        self.analyze_with_title(text, title)
    }

    fn is_model_loaded(&self) -> bool {
        Pipeline::is_model_loaded(self)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline shared by all requests
    pub service: Arc<dyn CredibilityService>,
}

impl AppState {
    /// Wrap a service in shared state
    pub fn new(service: impl CredibilityService + 'static) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Article body
    #[serde(default)]
    pub text: Option<String>,

    /// Optional headline; empty means "derive from the body"
    #[serde(default)]
    pub title: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// "ok" when the model is resident, otherwise "degraded"
    pub status: String,
    /// Whether the model is resident
    pub model_loaded: bool,
    /// Width of the feature vector
    pub feature_count: usize,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Body missing, unparseable, or without text
    BadRequest(Option<String>),
    /// Analysis failed
    Pipeline(PipelineError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(details) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: TEXT_MISSING.to_string(),
                    details,
                },
            ),
            AppError::Pipeline(PipelineError::MissingInput) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(TEXT_MISSING))
            }
            AppError::Pipeline(e) if e.is_unavailable() => {
                warn!("Model unavailable: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::with_details(SERVICE_UNAVAILABLE, e.to_string()),
                )
            }
            AppError::Pipeline(e) => {
                error!("Prediction failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(PREDICTION_FAILED, e.to_string()),
                )
            }
            AppError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details(PREDICTION_FAILED, msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        AppError::Pipeline(e)
    }
}

/// POST /predict and POST /api/analyze - Analyze a text
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Report>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(Some(e.body_text())))?;

    let text = request.text.unwrap_or_default();
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(None));
    }
    let title = request.title.unwrap_or_default();

    // Extraction is CPU-bound
    let service = state.service.clone();
    let report = tokio::task::spawn_blocking(move || service.analyze(&text, &title))
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))??;

    Ok(Json(report))
}

/// GET /health - Model residency
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let model_loaded = state.service.is_model_loaded();

    Json(HealthCheckResponse {
        status: if model_loaded { "ok" } else { "degraded" }.to_string(),
        model_loaded,
        feature_count: FEATURE_COUNT,
    })
}

/// GET / - Banner
async fn root() -> &'static str {
    BANNER
}

/// Create the axum router with all routes
pub fn create_router(state: AppState, cors: bool) -> AxumRouter {
    let router = AxumRouter::new()
        .route("/", get(root))
        .route("/predict", post(analyze))
        .route("/api/analyze", post(analyze))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    let router = if cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
