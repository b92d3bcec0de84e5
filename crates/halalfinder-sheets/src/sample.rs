//! The bundled dataset served when no sheet is configured or the sheet fails.
//!
//! Stored in the same string-valued shape the sheet publishes and passed
//! through the regular normalizers, so sample and live data cannot drift in
//! their defaulting rules.

use std::sync::LazyLock;

use halalfinder_core::{AppData, SiteSettings};
use serde::Deserialize;

use crate::normalize::{
    normalize_city, normalize_filter_config, normalize_restaurant, site_settings_from_pairs,
};
use crate::types::RawRow;

const SAMPLE_JSON: &str = include_str!("../data/sample-data.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleFile {
    restaurants: Vec<RawRow>,
    cities: Vec<RawRow>,
    site_settings: RawRow,
    filters_config: Vec<RawRow>,
}

static SAMPLE: LazyLock<AppData> = LazyLock::new(|| {
    let file: SampleFile =
        serde_json::from_str(SAMPLE_JSON).expect("bundled sample-data.json is valid");
    AppData {
        restaurants: file.restaurants.iter().map(normalize_restaurant).collect(),
        cities: file.cities.iter().map(normalize_city).collect(),
        site_settings: site_settings_from_pairs(
            file.site_settings.iter(),
            &SiteSettings::default(),
        ),
        filters_config: file
            .filters_config
            .iter()
            .map(normalize_filter_config)
            .collect(),
    }
});

/// The bundled sample dataset.
#[must_use]
pub fn sample_app_data() -> &'static AppData {
    &SAMPLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses_and_is_populated() {
        let data = sample_app_data();
        assert!(!data.restaurants.is_empty());
        assert!(!data.cities.is_empty());
        assert!(!data.filters_config.is_empty());
        assert_eq!(data.site_settings.brand_name, "HalalFinder");
    }

    #[test]
    fn sample_slugs_are_unique_and_url_safe() {
        let report = halalfinder_core::data_health_report(sample_app_data());
        assert!(report.duplicate_slugs.is_empty());
        assert!(report.unsafe_slugs.is_empty());
        assert!(report.missing_slugs.is_empty());
    }

    #[test]
    fn sample_exercises_inactive_and_featured_listings() {
        let data = sample_app_data();
        assert!(data.restaurants.iter().any(|r| !r.is_active));
        assert!(!data.featured(6).is_empty());
    }

    #[test]
    fn every_sample_city_is_known() {
        let data = sample_app_data();
        for r in &data.restaurants {
            assert!(
                data.cities.iter().any(|c| c.city == r.city),
                "restaurant {} has unlisted city {}",
                r.id,
                r.city
            );
        }
    }
}
