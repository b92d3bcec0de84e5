use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use halalfinder_core::{
    filter_restaurants, sort_restaurants, Feature, HalalStatus, Page, Restaurant,
    RestaurantFilter, SortStrategy,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

/// Explore-page query. List parameters are comma-separated.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RestaurantQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    pub cuisines: Option<String>,
    pub halal_status: Option<String>,
    pub features: Option<String>,
    pub price_level: Option<String>,
    pub min_rating: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl RestaurantQuery {
    fn filter(&self) -> Result<RestaurantFilter, String> {
        Ok(RestaurantFilter {
            search: non_blank(self.search.as_deref()),
            city: non_blank(self.city.as_deref()),
            cuisines: tokens(self.cuisines.as_deref())
                .map(str::to_string)
                .collect(),
            halal_status: tokens(self.halal_status.as_deref())
                .map(|t| {
                    HalalStatus::parse(t).ok_or_else(|| format!("unknown halal_status '{t}'"))
                })
                .collect::<Result<_, _>>()?,
            features: tokens(self.features.as_deref())
                .map(|t| Feature::parse(t).ok_or_else(|| format!("unknown feature '{t}'")))
                .collect::<Result<_, _>>()?,
            price_level: tokens(self.price_level.as_deref())
                .map(|t| match t.parse::<u8>() {
                    Ok(level @ 1..=4) => Ok(level),
                    _ => Err(format!("price_level must be 1-4, got '{t}'")),
                })
                .collect::<Result<_, _>>()?,
            min_rating: match non_blank(self.min_rating.as_deref()) {
                None => 0.0,
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite())
                    .ok_or_else(|| format!("min_rating must be a number, got '{raw}'"))?,
            },
        })
    }

    /// Defaults to rating order; unknown names keep sheet order.
    fn sort(&self) -> Option<SortStrategy> {
        SortStrategy::from_name(self.sort.as_deref().unwrap_or("rating"))
    }

    fn page(&self) -> Result<usize, String> {
        match non_blank(self.page.as_deref()) {
            None => Ok(1),
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("page must be a positive integer, got '{raw}'")),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn tokens(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub(super) async fn list_restaurants(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RestaurantQuery>,
) -> Result<Json<ApiResponse<Page<Restaurant>>>, ApiError> {
    let invalid = |message: String| ApiError::new(req_id.0.clone(), "validation_error", message);
    let filter = query.filter().map_err(invalid)?;
    let page = query.page().map_err(invalid)?;

    let loaded = state.load().await;
    let matched = filter_restaurants(&loaded.data.restaurants, &filter);
    let sorted = sort_restaurants(&matched, query.sort());

    Ok(ApiResponse::loaded(
        Page::load_more(sorted, page),
        req_id.0,
        loaded.source,
    ))
}

pub(super) async fn get_restaurant(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Restaurant>>, ApiError> {
    let loaded = state.load().await;
    let Some(restaurant) = loaded.data.find_active_by_slug(&slug).cloned() else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("restaurant '{slug}' not found"),
        ));
    };
    Ok(ApiResponse::loaded(restaurant, req_id.0, loaded.source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(f: impl FnOnce(&mut RestaurantQuery)) -> RestaurantQuery {
        let mut q = RestaurantQuery::default();
        f(&mut q);
        q
    }

    #[test]
    fn empty_query_is_unconstrained() {
        let q = RestaurantQuery::default();
        assert_eq!(q.filter().expect("valid"), RestaurantFilter::default());
        assert_eq!(q.sort(), Some(SortStrategy::Rating));
        assert_eq!(q.page(), Ok(1));
    }

    #[test]
    fn list_params_split_on_commas() {
        let q = query(|q| {
            q.cuisines = Some("Turkish, Lebanese,".to_string());
            q.halal_status = Some("certified,pork_free".to_string());
            q.features = Some("wudu, delivery".to_string());
            q.price_level = Some("1,2".to_string());
        });
        let f = q.filter().expect("valid");
        assert_eq!(f.cuisines, vec!["Turkish", "Lebanese"]);
        assert_eq!(f.halal_status, vec![HalalStatus::Certified, HalalStatus::PorkFree]);
        assert_eq!(f.features, vec![Feature::Wudu, Feature::Delivery]);
        assert_eq!(f.price_level, vec![1, 2]);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(query(|q| q.features = Some("jacuzzi".to_string())).filter().is_err());
        assert!(query(|q| q.halal_status = Some("maybe".to_string())).filter().is_err());
        assert!(query(|q| q.price_level = Some("5".to_string())).filter().is_err());
        assert!(query(|q| q.min_rating = Some("high".to_string())).filter().is_err());
        assert!(query(|q| q.page = Some("-1".to_string())).page().is_err());
    }

    #[test]
    fn unknown_sort_passes_through() {
        assert_eq!(query(|q| q.sort = Some("alphabetical".to_string())).sort(), None);
        assert_eq!(
            query(|q| q.sort = Some("newest".to_string())).sort(),
            Some(SortStrategy::Newest)
        );
    }

    #[test]
    fn blank_search_is_dropped() {
        let f = query(|q| q.search = Some("   ".to_string()))
            .filter()
            .expect("valid");
        assert_eq!(f.search, None);
    }
}
