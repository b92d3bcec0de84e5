//! Narrowing a restaurant collection by user-chosen criteria.

use serde::{Deserialize, Serialize};

use crate::restaurants::{Feature, HalalStatus, Restaurant};

/// Explore-page criteria. Every field left at its default means "no
/// constraint" for that dimension; all present constraints must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RestaurantFilter {
    /// Case-insensitive substring match against name, city, or any cuisine.
    pub search: Option<String>,
    /// Exact city equality.
    pub city: Option<String>,
    /// At least one shared cuisine.
    pub cuisines: Vec<String>,
    /// Halal status must be one of these.
    pub halal_status: Vec<HalalStatus>,
    /// Restaurant must have every one of these.
    pub features: Vec<Feature>,
    /// Price level must be one of these.
    pub price_level: Vec<u8>,
    /// Inclusive lower bound on rating; `0` disables the check.
    pub min_rating: f64,
}

impl RestaurantFilter {
    /// Returns `true` if `restaurant` is active and satisfies every criterion.
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if !restaurant.is_active {
            return false;
        }

        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            let q = query.to_lowercase();
            let hit = restaurant.name.to_lowercase().contains(&q)
                || restaurant.city.to_lowercase().contains(&q)
                || restaurant
                    .cuisines
                    .iter()
                    .any(|c| c.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }

        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            if restaurant.city != city {
                return false;
            }
        }

        if !self.cuisines.is_empty()
            && !self.cuisines.iter().any(|c| restaurant.cuisines.contains(c))
        {
            return false;
        }

        if !self.halal_status.is_empty() && !self.halal_status.contains(&restaurant.halal_status)
        {
            return false;
        }

        if !self.features.iter().all(|f| restaurant.has_feature(*f)) {
            return false;
        }

        if !self.price_level.is_empty() && !self.price_level.contains(&restaurant.price_level) {
            return false;
        }

        if self.min_rating > 0.0 && restaurant.rating < self.min_rating {
            return false;
        }

        true
    }
}

/// Returns the active restaurants matching `filter`, in input order.
#[must_use]
pub fn filter_restaurants(restaurants: &[Restaurant], filter: &RestaurantFilter) -> Vec<Restaurant> {
    restaurants
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}
