//! Data-quality diagnostics over a loaded dataset, for sheet editors.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::directory::AppData;
use crate::restaurants::{HalalStatus, Restaurant};

/// More listings than this without a rating is worth a warning.
const NO_RATING_WARN_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warn,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub label: &'static str,
    pub value: usize,
    pub status: CheckStatus,
}

/// Identifies one listing in a defect list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRef {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataHealthReport {
    pub checks: Vec<HealthCheck>,
    /// Active listings that cannot be linked to.
    pub missing_slugs: Vec<ListingRef>,
    /// Listings whose slug contains characters outside `a-z`, `0-9`, `-`.
    pub unsafe_slugs: Vec<ListingRef>,
    /// Slugs shared by more than one listing.
    pub duplicate_slugs: Vec<String>,
    pub site_settings: BTreeMap<String, String>,
}

impl DataHealthReport {
    /// Worst status across all checks.
    #[must_use]
    pub fn overall(&self) -> CheckStatus {
        let has = |status| self.checks.iter().any(|c| c.status == status);
        if has(CheckStatus::Error) {
            CheckStatus::Error
        } else if has(CheckStatus::Warn) {
            CheckStatus::Warn
        } else {
            CheckStatus::Ok
        }
    }
}

/// Builds the diagnostics shown on the admin data-health page.
#[must_use]
pub fn data_health_report(data: &AppData) -> DataHealthReport {
    let active: Vec<&Restaurant> = data.active_restaurants().collect();
    let inactive = data.restaurants.len() - active.len();
    let missing_images = active.iter().filter(|r| r.cover_image_url.is_empty()).count();
    let no_rating = active.iter().filter(|r| r.rating <= 0.0).count();
    let unknown_halal = active
        .iter()
        .filter(|r| r.halal_status == HalalStatus::Unknown)
        .count();
    let featured = active.iter().filter(|r| r.is_featured).count();

    let missing_slugs: Vec<ListingRef> = active
        .iter()
        .filter(|r| !r.has_slug())
        .map(|r| listing_ref(r))
        .collect();

    let warn_if = |cond: bool| if cond { CheckStatus::Warn } else { CheckStatus::Ok };

    let checks = vec![
        HealthCheck {
            label: "Total restaurants",
            value: data.restaurants.len(),
            status: CheckStatus::Info,
        },
        HealthCheck {
            label: "Active listings",
            value: active.len(),
            status: CheckStatus::Ok,
        },
        HealthCheck {
            label: "Inactive / hidden",
            value: inactive,
            status: warn_if(inactive > 0),
        },
        HealthCheck {
            label: "Missing cover image",
            value: missing_images,
            status: warn_if(missing_images > 0),
        },
        HealthCheck {
            label: "Missing slug (broken links!)",
            value: missing_slugs.len(),
            status: if missing_slugs.is_empty() {
                CheckStatus::Ok
            } else {
                CheckStatus::Error
            },
        },
        HealthCheck {
            label: "No rating set",
            value: no_rating,
            status: warn_if(no_rating > NO_RATING_WARN_THRESHOLD),
        },
        HealthCheck {
            label: "Unknown halal status",
            value: unknown_halal,
            status: warn_if(unknown_halal > 0),
        },
        HealthCheck {
            label: "Featured restaurants",
            value: featured,
            status: warn_if(featured == 0),
        },
        HealthCheck {
            label: "Cities",
            value: data.cities.len(),
            status: CheckStatus::Info,
        },
        HealthCheck {
            label: "Active filters",
            value: data.filters_config.iter().filter(|f| f.enabled).count(),
            status: CheckStatus::Info,
        },
    ];

    let unsafe_slugs = data
        .restaurants
        .iter()
        .filter(|r| r.has_slug() && !is_url_safe_slug(&r.slug))
        .map(listing_ref)
        .collect();

    DataHealthReport {
        checks,
        missing_slugs,
        unsafe_slugs,
        duplicate_slugs: duplicate_slugs(&data.restaurants),
        site_settings: data.site_settings.entries().into_iter().collect(),
    }
}

fn listing_ref(r: &Restaurant) -> ListingRef {
    let suggested = suggested_slug(&r.name);
    ListingRef {
        id: r.id.clone(),
        name: r.name.clone(),
        slug: r.slug.clone(),
        suggested_slug: (!suggested.is_empty() && suggested != r.slug).then_some(suggested),
    }
}

fn duplicate_slugs(restaurants: &[Restaurant]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for r in restaurants.iter().filter(|r| r.has_slug()) {
        if !seen.insert(r.slug.as_str()) && !dupes.contains(&r.slug) {
            dupes.push(r.slug.clone());
        }
    }
    dupes
}

/// Returns `true` when `slug` is non-empty and uses only `a-z`, `0-9` and `-`.
#[must_use]
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Generate a URL-safe slug from a restaurant name.
///
/// Swedish vowels are folded to their ASCII base letter; other non-ASCII
/// characters are dropped.
#[must_use]
pub fn suggested_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'å' | 'ä' | 'á' | 'à' => Some('a'),
            'ö' | 'ø' | 'ó' => Some('o'),
            'é' | 'è' | 'ë' => Some('e'),
            'ü' | 'ú' => Some('u'),
            c if c.is_ascii_alphanumeric() || c == '-' => Some(c),
            c if c.is_whitespace() || c == '_' || c == '/' => Some('-'),
            _ => None,
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{app_data, city, filter_config, restaurant};

    fn check<'a>(report: &'a DataHealthReport, label: &str) -> &'a HealthCheck {
        report
            .checks
            .iter()
            .find(|c| c.label == label)
            .unwrap_or_else(|| panic!("missing check {label}"))
    }

    #[test]
    fn healthy_dataset_reports_ok() {
        let mut star = restaurant("star");
        star.is_featured = true;
        let mut data = app_data(vec![star, restaurant("plain")]);
        data.cities = vec![city("Stockholm", true)];
        data.filters_config = vec![filter_config("city", 0, true), filter_config("x", 1, false)];

        let report = data_health_report(&data);
        assert_eq!(check(&report, "Total restaurants").value, 2);
        assert_eq!(check(&report, "Active listings").value, 2);
        assert_eq!(check(&report, "Cities").value, 1);
        assert_eq!(check(&report, "Active filters").value, 1);
        assert_eq!(report.overall(), CheckStatus::Ok);
        assert!(report.missing_slugs.is_empty());
    }

    #[test]
    fn missing_slug_is_an_error() {
        let mut broken = restaurant("x");
        broken.slug = String::new();
        broken.name = "Café Ärlig".to_string();
        let mut star = restaurant("star");
        star.is_featured = true;
        let data = app_data(vec![broken, star]);

        let report = data_health_report(&data);
        assert_eq!(check(&report, "Missing slug (broken links!)").status, CheckStatus::Error);
        assert_eq!(report.overall(), CheckStatus::Error);
        assert_eq!(report.missing_slugs.len(), 1);
        assert_eq!(
            report.missing_slugs[0].suggested_slug.as_deref(),
            Some("cafe-arlig")
        );
    }

    #[test]
    fn inactive_missing_slug_is_not_counted() {
        let mut hidden = restaurant("x");
        hidden.slug = String::new();
        hidden.is_active = false;
        let report = data_health_report(&app_data(vec![hidden]));
        assert!(report.missing_slugs.is_empty());
        assert_eq!(check(&report, "Inactive / hidden").status, CheckStatus::Warn);
    }

    #[test]
    fn no_rating_warns_only_above_threshold() {
        let unrated = |slug: &str| {
            let mut r = restaurant(slug);
            r.rating = 0.0;
            r
        };
        let five: Vec<_> = (0..5).map(|i| unrated(&format!("r{i}"))).collect();
        let report = data_health_report(&app_data(five));
        assert_eq!(check(&report, "No rating set").status, CheckStatus::Ok);

        let six: Vec<_> = (0..6).map(|i| unrated(&format!("r{i}"))).collect();
        let report = data_health_report(&app_data(six));
        assert_eq!(check(&report, "No rating set").status, CheckStatus::Warn);
    }

    #[test]
    fn no_featured_warns() {
        let report = data_health_report(&app_data(vec![restaurant("a")]));
        assert_eq!(check(&report, "Featured restaurants").status, CheckStatus::Warn);
    }

    #[test]
    fn unsafe_and_duplicate_slugs_are_listed() {
        let mut spaced = restaurant("Kebab Hus");
        spaced.name = "Kebab Hus".to_string();
        let report = data_health_report(&app_data(vec![
            spaced,
            restaurant("dup"),
            restaurant("dup"),
            restaurant("dup"),
        ]));
        assert_eq!(report.unsafe_slugs.len(), 1);
        assert_eq!(
            report.unsafe_slugs[0].suggested_slug.as_deref(),
            Some("kebab-hus")
        );
        assert_eq!(report.duplicate_slugs, vec!["dup".to_string()]);
    }

    #[test]
    fn site_settings_preview_includes_known_keys() {
        let report = data_health_report(&app_data(vec![]));
        assert_eq!(
            report.site_settings.get("brandName").map(String::as_str),
            Some("HalalFinder")
        );
    }

    #[test]
    fn slug_simple_name() {
        assert_eq!(suggested_slug("Beirut Grill"), "beirut-grill");
    }

    #[test]
    fn slug_special_characters() {
        assert_eq!(suggested_slug("Ali's Kebab & Pizza"), "alis-kebab-pizza");
    }

    #[test]
    fn slug_swedish_characters() {
        assert_eq!(suggested_slug("Malmö Grönt Kök"), "malmo-gront-kok");
    }

    #[test]
    fn url_safe_slug_rules() {
        assert!(is_url_safe_slug("sultan-kebab-2"));
        assert!(!is_url_safe_slug("Sultan"));
        assert!(!is_url_safe_slug("a b"));
        assert!(!is_url_safe_slug(""));
    }
}
