//! The aggregate dataset and the read-only views the site builds from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::restaurants::Restaurant;

/// Explore results are revealed twelve at a time.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub is_popular: bool,
}

/// Named display strings for the site chrome.
///
/// Keys the sheet provides beyond the known ones are kept in `extra` so the
/// admin preview can show them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub brand_name: String,
    pub featured_section_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_style: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SiteSettings {
    /// All settings as `(key, value)` pairs, known keys first.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = vec![
            ("heroTitle".to_string(), self.hero_title.clone()),
            ("heroSubtitle".to_string(), self.hero_subtitle.clone()),
            ("brandName".to_string(), self.brand_name.clone()),
            (
                "featuredSectionTitle".to_string(),
                self.featured_section_title.clone(),
            ),
        ];
        if let Some(accent) = &self.accent_style {
            out.push(("accentStyle".to_string(), accent.clone()));
        }
        out.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Chip,
    Checkbox,
    Range,
    Select,
}

impl FilterType {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chip" => Some(Self::Chip),
            "checkbox" => Some(Self::Checkbox),
            "range" => Some(Self::Range),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub options: Vec<String>,
    pub enabled: bool,
    pub sort_order: i32,
}

/// Everything the site renders, produced whole by one fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    pub restaurants: Vec<Restaurant>,
    pub cities: Vec<City>,
    pub site_settings: SiteSettings,
    pub filters_config: Vec<FilterConfig>,
}

/// A city together with how many active listings it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySummary {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub is_popular: bool,
    pub restaurant_count: usize,
}

/// A "load more" window over an ordered result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Keeps the first `page * PAGE_SIZE` items. Page numbers below 1 are
    /// treated as 1.
    #[must_use]
    pub fn load_more(mut items: Vec<T>, page: usize) -> Self {
        let page = page.max(1);
        let total = items.len();
        let shown = page.saturating_mul(PAGE_SIZE).min(total);
        items.truncate(shown);
        Self {
            items,
            total,
            page,
            has_more: shown < total,
        }
    }
}

impl AppData {
    pub fn active_restaurants(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter().filter(|r| r.is_active)
    }

    /// Detail-page lookup. Inactive listings are hidden.
    #[must_use]
    pub fn find_active_by_slug(&self, slug: &str) -> Option<&Restaurant> {
        self.active_restaurants().find(|r| r.slug == slug)
    }

    /// Active featured listings in source order.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Restaurant> {
        self.active_restaurants()
            .filter(|r| r.is_featured)
            .take(limit)
            .collect()
    }

    /// Every city with its active listing count, busiest first.
    #[must_use]
    pub fn city_summaries(&self) -> Vec<CitySummary> {
        let mut summaries: Vec<CitySummary> = self
            .cities
            .iter()
            .map(|c| CitySummary {
                city: c.city.clone(),
                country: c.country.clone(),
                is_popular: c.is_popular,
                restaurant_count: self.active_restaurants().filter(|r| r.city == c.city).count(),
            })
            .collect();
        summaries.sort_by(|a, b| b.restaurant_count.cmp(&a.restaurant_count));
        summaries
    }

    #[must_use]
    pub fn popular_cities(&self) -> Vec<CitySummary> {
        self.city_summaries()
            .into_iter()
            .filter(|c| c.is_popular)
            .collect()
    }

    /// Enabled filters in display order.
    #[must_use]
    pub fn enabled_filters(&self) -> Vec<&FilterConfig> {
        let mut filters: Vec<&FilterConfig> =
            self.filters_config.iter().filter(|f| f.enabled).collect();
        filters.sort_by_key(|f| f.sort_order);
        filters
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
