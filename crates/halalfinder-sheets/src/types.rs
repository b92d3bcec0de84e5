//! Loosely typed shapes read from the spreadsheet, before normalization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One CSV data row keyed by trimmed header name.
///
/// Cells are kept as the raw strings the sheet published. Nothing here is
/// validated; [`crate::normalize`] turns rows into domain records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(BTreeMap<String, String>);

impl RawRow {
    /// Cell value for `column`, or `""` when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.0.get(column).map_or("", String::as_str)
    }

    /// Cell value for `column` when it is present and non-blank.
    #[must_use]
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        Some(self.get(column).trim()).filter(|v| !v.is_empty())
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The four logical tabs of the directory spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Restaurants,
    Cities,
    SiteSettings,
    FiltersConfig,
}

impl Tab {
    /// Sheet tab name as published.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Cities => "cities",
            Self::SiteSettings => "site_settings",
            Self::FiltersConfig => "filters_config",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
