//! Normalization from raw sheet rows to [`halalfinder_core`] domain records.
//!
//! Every function here is total: malformed cells fall back to a documented
//! default and are logged at `debug`, never reported as errors.

use halalfinder_core::{
    City, Feature, FilterConfig, FilterType, HalalStatus, Restaurant, SiteSettings,
};

use crate::parse_helpers::{parse_float_prefix, parse_int_prefix};
use crate::sample::sample_app_data;
use crate::types::RawRow;

/// Price level used when the cell is missing or outside `1..=4`.
const DEFAULT_PRICE_LEVEL: u8 = 2;

/// Normalizes one row of the `restaurants` tab.
#[must_use]
pub fn normalize_restaurant(row: &RawRow) -> Restaurant {
    let id = row.get("id");

    let halal_raw = row.get("halalStatus");
    let halal_status = HalalStatus::parse(halal_raw).unwrap_or_else(|| {
        if !halal_raw.is_empty() {
            tracing::debug!(id, value = halal_raw, "unrecognised halal status; using unknown");
        }
        HalalStatus::Unknown
    });

    let features = dedup(split_list(row.get("features")).into_iter().filter_map(|token| {
        let feature = Feature::parse(&token);
        if feature.is_none() {
            tracing::debug!(id, token = token.as_str(), "dropping unrecognised feature tag");
        }
        feature
    }));

    Restaurant {
        id: id.to_string(),
        name: row.get("name").to_string(),
        slug: row.get("slug").to_string(),
        city: row.get("city").to_string(),
        address: row.get("address").to_string(),
        lat: optional(row, "lat"),
        lng: optional(row, "lng"),
        phone: optional(row, "phone"),
        website: optional(row, "website"),
        cover_image_url: row.get("coverImageUrl").to_string(),
        gallery_image_urls: split_list(row.get("galleryImageUrls")),
        cuisines: dedup(split_list(row.get("cuisines"))),
        halal_status,
        certification_body: optional(row, "certificationBody"),
        price_level: price_level(id, row.get("priceLevel")),
        rating: rating(id, row.get("rating")),
        review_count: review_count(row.get("reviewCount")),
        opening_hours: row.get("openingHours").to_string(),
        features,
        is_featured: row.get("isFeatured").eq_ignore_ascii_case("true"),
        is_active: !row.get("isActive").eq_ignore_ascii_case("false"),
        last_updated: row.get("lastUpdated").to_string(),
    }
}

/// Normalizes one row of the `cities` tab.
#[must_use]
pub fn normalize_city(row: &RawRow) -> City {
    City {
        city: row.get("city").to_string(),
        country: optional(row, "country"),
        is_popular: row.get("isPopular") == "true",
    }
}

/// Normalizes one row of the `filters_config` tab.
#[must_use]
pub fn normalize_filter_config(row: &RawRow) -> FilterConfig {
    let key = row.get("key");
    let type_raw = row.get("type");
    let filter_type = FilterType::parse(type_raw).unwrap_or_else(|| {
        tracing::debug!(key, value = type_raw, "unrecognised filter type; using chip");
        FilterType::Chip
    });

    FilterConfig {
        key: key.to_string(),
        label: row.get("label").to_string(),
        filter_type,
        options: split_list(row.get("options")),
        enabled: row.get("enabled") != "false",
        sort_order: parse_int_prefix(row.get("sortOrder"))
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(0),
    }
}

/// Normalizes the whole `site_settings` tab.
///
/// A `key` column selects the key/value layout (one setting per row, rows
/// with an empty key skipped). Otherwise the first row's columns are the
/// setting names. Settings the sheet leaves blank keep their bundled value,
/// and an empty tab yields the bundled settings unchanged.
#[must_use]
pub fn normalize_site_settings(rows: &[RawRow]) -> SiteSettings {
    let defaults = &sample_app_data().site_settings;
    let Some(first) = rows.first() else {
        return defaults.clone();
    };

    if first.has_column("key") {
        let pairs = rows
            .iter()
            .filter(|r| !r.get("key").is_empty())
            .map(|r| (r.get("key"), r.get("value")));
        site_settings_from_pairs(pairs, defaults)
    } else {
        site_settings_from_pairs(first.iter(), defaults)
    }
}

/// Builds settings from `(name, value)` pairs. Blank values leave the
/// corresponding field of `defaults` in place; later pairs win.
pub(crate) fn site_settings_from_pairs<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    defaults: &SiteSettings,
) -> SiteSettings {
    let mut settings = defaults.clone();
    for (name, value) in pairs {
        if value.is_empty() {
            continue;
        }
        let value = value.to_string();
        match name {
            "heroTitle" => settings.hero_title = value,
            "heroSubtitle" => settings.hero_subtitle = value,
            "brandName" => settings.brand_name = value,
            "featuredSectionTitle" => settings.featured_section_title = value,
            "accentStyle" => settings.accent_style = Some(value),
            other => {
                settings.extra.insert(other.to_string(), value);
            }
        }
    }
    settings
}

/// Splits a comma-separated cell, trimming tokens and dropping empty ones.
pub(crate) fn split_list(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn optional(row: &RawRow, column: &str) -> Option<String> {
    row.non_empty(column).map(str::to_string)
}

fn price_level(id: &str, raw: &str) -> u8 {
    match parse_int_prefix(raw).and_then(|n| u8::try_from(n).ok()) {
        Some(level @ 1..=4) => level,
        _ => {
            if !raw.is_empty() {
                tracing::debug!(id, value = raw, "price level outside 1-4; using default");
            }
            DEFAULT_PRICE_LEVEL
        }
    }
}

fn rating(id: &str, raw: &str) -> f64 {
    match parse_float_prefix(raw) {
        Some(r) if r >= 0.0 => r,
        _ => {
            if !raw.is_empty() {
                tracing::debug!(id, value = raw, "unreadable rating; using 0");
            }
            0.0
        }
    }
}

fn review_count(raw: &str) -> u32 {
    parse_int_prefix(raw)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
