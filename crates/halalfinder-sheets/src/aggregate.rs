//! Assembling the full [`AppData`] from the four sheet tabs.

use halalfinder_core::AppData;
use serde::Serialize;

use crate::client::SheetClient;
use crate::error::SheetError;
use crate::normalize::{
    normalize_city, normalize_filter_config, normalize_restaurant, normalize_site_settings,
};
use crate::sample::sample_app_data;
use crate::types::{RawRow, Tab};

/// Where a [`LoadedAppData`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// No sheet configured.
    Sample,
    /// Restaurants came from the sheet. Secondary tabs may have been
    /// substituted individually.
    Sheet,
    /// A sheet is configured but the restaurants tab failed.
    Fallback,
}

impl DataSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Sheet => "sheet",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAppData {
    pub data: AppData,
    pub source: DataSource,
}

/// Fetches all four tabs concurrently and normalizes them.
///
/// With no `reference` the bundled sample data is returned without touching
/// the network. The `restaurants` tab is load-bearing: its failure fails the
/// whole call. Each other tab that fails or comes back empty is replaced by
/// the matching sample collection on its own.
///
/// # Errors
///
/// Returns the [`SheetError`] of the `restaurants` tab fetch.
pub async fn fetch_app_data(
    client: &SheetClient,
    reference: Option<&str>,
) -> Result<AppData, SheetError> {
    let Some(reference) = reference else {
        return Ok(sample_app_data().clone());
    };

    let (restaurants, cities, settings, filters) = tokio::join!(
        client.fetch_tab(reference, Tab::Restaurants),
        client.fetch_tab(reference, Tab::Cities),
        client.fetch_tab(reference, Tab::SiteSettings),
        client.fetch_tab(reference, Tab::FiltersConfig),
    );

    let restaurants: Vec<_> = restaurants?.iter().map(normalize_restaurant).collect();
    let sample = sample_app_data();

    let cities = secondary_rows(Tab::Cities, cities).map_or_else(
        || sample.cities.clone(),
        |rows| rows.iter().map(normalize_city).collect(),
    );
    let site_settings = secondary_rows(Tab::SiteSettings, settings).map_or_else(
        || sample.site_settings.clone(),
        |rows| normalize_site_settings(&rows),
    );
    let filters_config = secondary_rows(Tab::FiltersConfig, filters).map_or_else(
        || sample.filters_config.clone(),
        |rows| rows.iter().map(normalize_filter_config).collect(),
    );

    tracing::info!(count = restaurants.len(), "loaded restaurants from sheet");
    Ok(AppData {
        restaurants,
        cities,
        site_settings,
        filters_config,
    })
}

/// Rows of a secondary tab, or `None` when it must fall back to sample data.
fn secondary_rows(tab: Tab, result: Result<Vec<RawRow>, SheetError>) -> Option<Vec<RawRow>> {
    match result {
        Ok(rows) if rows.is_empty() => {
            tracing::warn!(tab = tab.as_str(), "sheet tab is empty; using sample data");
            None
        }
        Ok(rows) => Some(rows),
        Err(error) => {
            tracing::warn!(tab = tab.as_str(), error = %error, "sheet tab failed; using sample data");
            None
        }
    }
}

/// Loads the dataset for one request, never failing.
///
/// Wraps [`fetch_app_data`] and substitutes the complete sample dataset when
/// the `restaurants` tab cannot be fetched.
pub async fn load_app_data(client: &SheetClient, reference: Option<&str>) -> LoadedAppData {
    if reference.is_none() {
        return LoadedAppData {
            data: sample_app_data().clone(),
            source: DataSource::Sample,
        };
    }

    match fetch_app_data(client, reference).await {
        Ok(data) => LoadedAppData {
            data,
            source: DataSource::Sheet,
        },
        Err(error) => {
            tracing::warn!(error = %error, "failed to load sheet; using sample data");
            LoadedAppData {
                data: sample_app_data().clone(),
                source: DataSource::Fallback,
            }
        }
    }
}
