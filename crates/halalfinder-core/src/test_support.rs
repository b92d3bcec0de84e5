//! Fixture builders shared by the unit tests in this crate.

use crate::directory::{AppData, City, FilterConfig, FilterType, SiteSettings};
use crate::restaurants::{HalalStatus, Restaurant};

pub(crate) fn restaurant(slug: &str) -> Restaurant {
    Restaurant {
        id: slug.to_string(),
        name: format!("Restaurant {slug}"),
        slug: slug.to_string(),
        city: "Stockholm".to_string(),
        address: "Drottninggatan 1".to_string(),
        lat: None,
        lng: None,
        phone: None,
        website: None,
        cover_image_url: format!("https://img.example.com/{slug}.jpg"),
        gallery_image_urls: vec![],
        cuisines: vec!["Turkish".to_string()],
        halal_status: HalalStatus::Certified,
        certification_body: None,
        price_level: 2,
        rating: 4.0,
        review_count: 10,
        opening_hours: "11-22".to_string(),
        features: vec![],
        is_featured: false,
        is_active: true,
        last_updated: "2024-01-01".to_string(),
    }
}

pub(crate) fn city(name: &str, is_popular: bool) -> City {
    City {
        city: name.to_string(),
        country: Some("Sweden".to_string()),
        is_popular,
    }
}

pub(crate) fn filter_config(key: &str, sort_order: i32, enabled: bool) -> FilterConfig {
    FilterConfig {
        key: key.to_string(),
        label: key.to_uppercase(),
        filter_type: FilterType::Chip,
        options: vec![],
        enabled,
        sort_order,
    }
}

pub(crate) fn app_data(restaurants: Vec<Restaurant>) -> AppData {
    AppData {
        restaurants,
        cities: vec![],
        site_settings: SiteSettings {
            hero_title: "Find halal food".to_string(),
            hero_subtitle: "Near you".to_string(),
            brand_name: "HalalFinder".to_string(),
            featured_section_title: "Featured".to_string(),
            accent_style: None,
            extra: std::collections::BTreeMap::new(),
        },
        filters_config: vec![],
    }
}
