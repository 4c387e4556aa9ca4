//! HTTP routes.

pub mod error;

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::HubConfig;
use crate::core::{ConversionService, QuoteBook, UpstreamApi, WeatherService};
use crate::domain::model::{ConversionResult, DataEnvelope, QuoteRecord, WeatherReport};
pub use error::ApiError;

/// Read-only state shared by every request.
pub struct AppState {
    pub config: HubConfig,
    pub upstream: Arc<dyn UpstreamApi>,
    pub quotes: QuoteBook,
}

impl AppState {
    pub fn new(config: HubConfig, upstream: Arc<dyn UpstreamApi>) -> Self {
        Self {
            config,
            upstream,
            quotes: QuoteBook::default(),
        }
    }
}

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/quote", get(get_quote))
        .route("/api/weather", get(get_weather))
        .route("/api/convert", get(convert))
}

/// Routes plus request tracing and CORS, ready to serve.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(state.config.cors_allowed_origins());
    let mut router = routes().with_state(state).layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}

async fn health() -> &'static str {
    "OK"
}

async fn get_quote(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<QuoteRecord>>, ApiError> {
    let quote = state.quotes.pick()?;
    Ok(Json(DataEnvelope::new(quote)))
}

async fn get_weather(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DataEnvelope<WeatherReport>>, ApiError> {
    let report = WeatherService::new(&state.config, state.upstream.as_ref())
        .report()
        .await?;
    Ok(Json(DataEnvelope::new(report)))
}

async fn convert(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<DataEnvelope<ConversionResult>>, ApiError> {
    let result = ConversionService::new(&state.config, state.upstream.as_ref())
        .convert(params.get("amount").map(String::as_str))
        .await?;
    Ok(Json(DataEnvelope::new(result)))
}

/// `None` or `"*"` allows any origin; otherwise a comma-separated allow-list.
fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let allowed_origins = match allowed_origins {
        None | Some("*") => return Some(cors.allow_origin(Any)),
        Some(origins) => origins,
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(
            origins = %allowed_origins,
            "No valid CORS origins configured, cross-origin requests will be refused"
        );
        return None;
    }

    Some(cors.allow_origin(origins))
}
