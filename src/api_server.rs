// Axum API Server Module
//
// Purpose: REST surface over the risk engine for web forms
// Endpoints: health, assess (score + explanation), plan by score

#[cfg(feature = "api")]
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use crate::assessment::PatientAssessment;

#[cfg(feature = "api")]
use crate::explanation::{ExplanationGenerator, RiskExplanation};

#[cfg(feature = "api")]
use crate::recommendation::{PreparationPlan, RecommendationMapper};

#[cfg(feature = "api")]
use crate::scorer::{RiskEngine, RiskResult, MAX_SCORE};

#[cfg(feature = "api")]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// ============================================================================
// Configuration
// ============================================================================

/// Server settings read from the environment
#[cfg(feature = "api")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

#[cfg(feature = "api")]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

#[cfg(feature = "api")]
impl ServerConfig {
    /// `BIND_ADDR` (default 0.0.0.0) and `PORT` (default 3000)
    ///
    /// Unparseable values fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid BIND_ADDR '{}'", raw);
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT '{}'", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        Self { bind_addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Scoring endpoints
        .route("/api/airway/assess", post(assess))
        .route("/api/airway/plan/:score", get(get_plan))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive()) // Allow all origins (form UI served elsewhere)
        .layer(TraceLayer::new_for_http()) // Request logging
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Score an assessment and return the full explanation
///
/// POST /api/airway/assess
#[cfg(feature = "api")]
async fn assess(
    payload: Result<Json<PatientAssessment>, JsonRejection>,
) -> Result<Json<AssessResponse>, AppError> {
    let Json(assessment) = payload.map_err(AppError::from)?;

    // Microsecond-scale pure computation: no blocking pool needed
    let result = RiskEngine::compute(&assessment);
    let explanation = ExplanationGenerator::generate(&result);

    tracing::info!(
        "Assessed airway risk: score={}, tier={}, factors={}",
        result.score,
        result.tier(),
        result.contributors.len()
    );

    Ok(Json(AssessResponse { result, explanation }))
}

/// Preparation plan for a score
///
/// GET /api/airway/plan/:score
#[cfg(feature = "api")]
async fn get_plan(Path(score): Path<u32>) -> Result<Json<PreparationPlan>, AppError> {
    if score > MAX_SCORE {
        return Err(AppError::ScoreOutOfRange(score));
    }
    Ok(Json(RecommendationMapper::map_plan(score)))
}

// ============================================================================
// Response Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct AssessResponse {
    pub result: RiskResult,
    pub explanation: RiskExplanation,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    /// Well-formed JSON whose values are not a valid assessment
    InvalidAssessment(String),
    /// Body could not be read as JSON at all (syntax, content type, size)
    Rejected(StatusCode, String),
    ScoreOutOfRange(u32),
}

#[cfg(feature = "api")]
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::InvalidAssessment(e.body_text()),
            other => AppError::Rejected(other.status(), other.body_text()),
        }
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidAssessment(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Rejected(status, msg) => (status, msg),
            AppError::ScoreOutOfRange(score) => (
                StatusCode::BAD_REQUEST,
                format!("Score {} is outside 0-{}", score, MAX_SCORE),
            ),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
