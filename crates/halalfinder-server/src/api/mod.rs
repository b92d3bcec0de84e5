mod admin;
mod directory;
mod restaurants;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use halalfinder_sheets::{load_app_data, DataSource, LoadedAppData, SheetClient};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SheetClient>,
    /// `None` serves the bundled sample data.
    pub sheet_url: Option<Arc<str>>,
}

impl AppState {
    /// Loads a fresh dataset. Called once per request; nothing is cached.
    pub(crate) async fn load(&self) -> LoadedAppData {
        load_app_data(&self.client, self.sheet_url.as_deref()).await
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSource>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    sheet_configured: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
            source: None,
        }
    }

    pub(super) fn with_source(request_id: String, source: DataSource) -> Self {
        Self {
            source: Some(source),
            ..Self::new(request_id)
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn loaded(data: T, request_id: String, source: DataSource) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::with_source(request_id, source),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn cache_control(max_age_secs: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_secs}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn directory_router(rate_limit: RateLimitState, cache_max_age_secs: u64) -> Router<AppState> {
    Router::new()
        .route("/api/v1/data", get(directory::get_app_data))
        .route("/api/v1/home", get(directory::get_home))
        .route("/api/v1/cities", get(directory::list_cities))
        .route("/api/v1/restaurants", get(restaurants::list_restaurants))
        .route("/api/v1/restaurants/{slug}", get(restaurants::get_restaurant))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control(cache_max_age_secs),
        ))
        .route("/api/v1/admin/data-health", get(admin::get_data_health))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState, cache_max_age_secs: u64) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(directory_router(rate_limit, cache_max_age_secs))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            sheet_configured: state.sheet_url.is_some(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub fn rate_limit_state(per_minute: usize) -> RateLimitState {
    RateLimitState::new(per_minute, Duration::from_secs(60))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
