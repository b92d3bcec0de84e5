//! Ordering a restaurant collection by one of the explore-page strategies.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::restaurants::Restaurant;

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Rating descending, then review count descending.
    Rating,
    /// Review count descending.
    Reviews,
    /// Featured first, then rating descending.
    Featured,
    /// Most recently updated first; unparseable dates sort last.
    Newest,
}

impl SortStrategy {
    /// Looks a strategy up by name. Unknown names yield `None`, which
    /// [`sort_restaurants`] treats as "keep input order".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "rating" => Some(Self::Rating),
            "reviews" => Some(Self::Reviews),
            "featured" => Some(Self::Featured),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Featured => "featured",
            Self::Newest => "newest",
        }
    }
}

/// Returns a reordered copy of `restaurants`. The sort is stable, so equal
/// elements keep their input order, and `None` returns the input order as is.
#[must_use]
pub fn sort_restaurants(
    restaurants: &[Restaurant],
    strategy: Option<SortStrategy>,
) -> Vec<Restaurant> {
    let mut out = restaurants.to_vec();
    let Some(strategy) = strategy else {
        return out;
    };

    match strategy {
        SortStrategy::Rating => out.sort_by(|a, b| {
            desc_f64(a.rating, b.rating).then_with(|| b.review_count.cmp(&a.review_count))
        }),
        SortStrategy::Reviews => out.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortStrategy::Featured => out.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then_with(|| desc_f64(a.rating, b.rating))
        }),
        SortStrategy::Newest => {
            out.sort_by_cached_key(|r| std::cmp::Reverse(timestamp_millis(&r.last_updated)));
        }
    }
    out
}

fn desc_f64(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Parses a free-text `lastUpdated` cell into epoch milliseconds.
///
/// Unparseable input maps to `i64::MIN` so it orders as the oldest value.
fn timestamp_millis(raw: &str) -> i64 {
    parse_timestamp(raw).unwrap_or(i64::MIN)
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }

    None
}
