// Axum server module
//
// Purpose: serve the site pages (Askama + htmx) and the JSON API for the
// footprint estimator and contact relay.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use serde::Serialize;
use std::sync::Arc;

use crate::chart::{self, ChartSlice};
use crate::config::SiteConfig;
use crate::contact::{ContactMessage, ContactNotice, FormRelayClient};
use crate::footprint::{
    self, FootprintBreakdown, FootprintInput, FootprintStatus, Recommendation, TransportMode,
    DIET_FACTOR, ELECTRICITY_FACTOR, STATUS_THRESHOLD_TONS, WASTE_FACTOR,
};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub relay: FormRelayClient,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        match config.contact_relay_url.as_deref() {
            Some(url) => tracing::info!("Contact relay: {}", url),
            None => tracing::warn!("CONTACT_RELAY_URL not set; contact submissions will fail"),
        }
        let relay = FormRelayClient::new(config.contact_relay_url.clone())?;

        Ok(Self::with_relay(config, relay))
    }

    /// State with a caller-built relay client
    pub fn with_relay(config: SiteConfig, relay: FormRelayClient) -> Self {
        Self {
            config: Arc::new(config),
            relay,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages
        .route("/", get(pages::home_page))
        .route("/calculator", get(pages::calculator_page))
        .route("/about", get(pages::about_page))
        .route("/resources", get(pages::resources_page))
        .route("/contact", get(pages::contact_page).post(pages::submit_contact))
        .route("/solutions/:topic", get(pages::solution_page))
        .route("/theme/toggle", get(pages::toggle_theme))

        // Footprint endpoints (JSON)
        .route("/api/footprint", get(footprint_from_query).post(footprint_from_json))
        .route("/api/emission-factors", get(emission_factors))
        .route("/api/recommendations", get(list_recommendations))

        // Contact relay (JSON)
        .route("/api/contact", post(submit_contact_json))

        .nest_service("/static", static_files)
        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn footprint_from_query(
    query: Result<Query<FootprintInput>, QueryRejection>,
) -> Result<Json<FootprintReport>, AppError> {
    let Query(input) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    finite_report(input).map(Json)
}

async fn footprint_from_json(
    body: Result<Json<FootprintInput>, JsonRejection>,
) -> Result<Json<FootprintReport>, AppError> {
    let Json(input) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    finite_report(input).map(Json)
}

/// JSON has no encoding for infinity, so overflowing inputs are refused.
fn finite_report(input: FootprintInput) -> Result<FootprintReport, AppError> {
    let report = FootprintReport::new(input);
    if report.total_monthly.is_finite() && report.yearly_tons.is_finite() {
        Ok(report)
    } else {
        Err(AppError::BadRequest(
            "inputs are too large to produce a finite estimate".to_string(),
        ))
    }
}

async fn emission_factors() -> impl IntoResponse {
    let transport: serde_json::Map<String, serde_json::Value> = TransportMode::ALL
        .iter()
        .map(|mode| (mode.as_str().to_string(), serde_json::json!(mode.emission_factor())))
        .collect();

    Json(serde_json::json!({
        "transport_kg_per_km": transport,
        "electricity_kg_per_kwh": ELECTRICITY_FACTOR,
        "waste_kg_per_kg": WASTE_FACTOR,
        "meat_kg_per_kg": DIET_FACTOR,
        "status_threshold_tons": STATUS_THRESHOLD_TONS,
    }))
}

async fn list_recommendations() -> Json<&'static [Recommendation]> {
    Json(footprint::recommendations())
}

async fn submit_contact_json(
    State(state): State<AppState>,
    body: Result<Json<ContactMessage>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(message) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let message = message
        .validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    match state.relay.submit(&message).await {
        Ok(()) => Ok(Json(serde_json::json!({ "success": true }))),
        Err(e) => {
            tracing::warn!("Contact submission failed: {}", e);
            Err(AppError::BadGateway(ContactNotice::Failed.text().to_string()))
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Everything the calculator shows for one set of inputs
#[derive(Debug, Serialize)]
pub struct FootprintReport {
    pub input: FootprintInput,
    pub breakdown: FootprintBreakdown,
    pub total_monthly: f64,
    pub yearly_tons: f64,
    pub status: StatusReport,
    pub recommendations: &'static [Recommendation],
    pub chart: Vec<ChartSlice>,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub level: FootprintStatus,
    pub message: &'static str,
}

impl FootprintReport {
    pub fn new(input: FootprintInput) -> Self {
        let result = footprint::estimate(&input);
        let status = result.status();
        tracing::debug!(
            "Footprint estimate: {:.2} kg/month, {:.2} t/year ({:?})",
            result.total_monthly,
            result.yearly_tons,
            status
        );

        Self {
            input,
            breakdown: result.breakdown,
            total_monthly: result.total_monthly,
            yearly_tons: result.yearly_tons,
            status: StatusReport {
                level: status,
                message: status.message(),
            },
            recommendations: footprint::recommendations(),
            chart: chart::slices(&result),
        }
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unprocessable(String),
    BadGateway(String),
    Template(String),
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Template(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
