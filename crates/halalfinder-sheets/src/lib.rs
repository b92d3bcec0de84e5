pub mod aggregate;
pub mod client;
pub mod csv;
pub mod error;
pub mod normalize;
mod parse_helpers;
pub mod sample;
pub mod types;
pub mod url;

pub use aggregate::{fetch_app_data, load_app_data, DataSource, LoadedAppData};
pub use client::SheetClient;
pub use csv::{parse_csv, tokenize_line};
pub use error::SheetError;
pub use normalize::{
    normalize_city, normalize_filter_config, normalize_restaurant, normalize_site_settings,
};
pub use sample::sample_app_data;
pub use types::{RawRow, Tab};
pub use url::resolve_tab_url;
