use axum::{extract::State, Extension, Json};
use halalfinder_core::{AppData, CitySummary, FilterConfig, Restaurant, SiteSettings};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

/// Number of featured listings shown on the home page.
const HOME_FEATURED_LIMIT: usize = 6;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HomeData {
    site_settings: SiteSettings,
    featured: Vec<Restaurant>,
    popular_cities: Vec<CitySummary>,
    filters: Vec<FilterConfig>,
}

impl HomeData {
    fn from_app_data(data: &AppData) -> Self {
        Self {
            site_settings: data.site_settings.clone(),
            featured: data
                .featured(HOME_FEATURED_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
            popular_cities: data.popular_cities(),
            filters: data.enabled_filters().into_iter().cloned().collect(),
        }
    }
}

pub(super) async fn get_app_data(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<AppData>> {
    let loaded = state.load().await;
    ApiResponse::loaded(loaded.data, req_id.0, loaded.source)
}

pub(super) async fn get_home(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HomeData>> {
    let loaded = state.load().await;
    ApiResponse::loaded(
        HomeData::from_app_data(&loaded.data),
        req_id.0,
        loaded.source,
    )
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<CitySummary>>> {
    let loaded = state.load().await;
    ApiResponse::loaded(loaded.data.city_summaries(), req_id.0, loaded.source)
}
