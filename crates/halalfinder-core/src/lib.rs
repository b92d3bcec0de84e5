pub mod app_config;
pub mod config;
pub mod directory;
pub mod filter;
pub mod health;
pub mod restaurants;
pub mod sort;

#[cfg(test)]
mod test_support;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use directory::{
    AppData, City, CitySummary, FilterConfig, FilterType, Page, SiteSettings, PAGE_SIZE,
};
pub use filter::{filter_restaurants, RestaurantFilter};
pub use health::{
    data_health_report, is_url_safe_slug, suggested_slug, CheckStatus, DataHealthReport,
    HealthCheck, ListingRef,
};
pub use restaurants::{Feature, HalalStatus, Restaurant};
pub use sort::{sort_restaurants, SortStrategy};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
