use serde::{Deserialize, Serialize};

/// Certification or claim category of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalalStatus {
    Certified,
    Claimed,
    PorkFree,
    AlcoholFree,
    #[default]
    Unknown,
}

impl HalalStatus {
    pub const ALL: [HalalStatus; 5] = [
        HalalStatus::Certified,
        HalalStatus::Claimed,
        HalalStatus::PorkFree,
        HalalStatus::AlcoholFree,
        HalalStatus::Unknown,
    ];

    /// Parses a sheet cell or query token.
    ///
    /// Matching ignores case and surrounding whitespace, and accepts `-` or a
    /// space in place of `_` (`"Pork-Free"` is [`HalalStatus::PorkFree`]).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_token(raw).as_str() {
            "certified" => Some(Self::Certified),
            "claimed" => Some(Self::Claimed),
            "pork_free" => Some(Self::PorkFree),
            "alcohol_free" => Some(Self::AlcoholFree),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Certified => "certified",
            Self::Claimed => "claimed",
            Self::PorkFree => "pork_free",
            Self::AlcoholFree => "alcohol_free",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HalalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity tag attached to a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    PrayerSpace,
    Wudu,
    FamilySeating,
    Delivery,
    Takeaway,
    Wheelchair,
    Vegetarian,
    Vegan,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Feature::PrayerSpace,
        Feature::Wudu,
        Feature::FamilySeating,
        Feature::Delivery,
        Feature::Takeaway,
        Feature::Wheelchair,
        Feature::Vegetarian,
        Feature::Vegan,
    ];

    /// Parses one feature token with the same leniency as [`HalalStatus::parse`].
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match canonical_token(raw).as_str() {
            "prayer_space" => Some(Self::PrayerSpace),
            "wudu" => Some(Self::Wudu),
            "family_seating" => Some(Self::FamilySeating),
            "delivery" => Some(Self::Delivery),
            "takeaway" => Some(Self::Takeaway),
            "wheelchair" => Some(Self::Wheelchair),
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrayerSpace => "prayer_space",
            Self::Wudu => "wudu",
            Self::FamilySeating => "family_seating",
            Self::Delivery => "delivery",
            Self::Takeaway => "takeaway",
            Self::Wheelchair => "wheelchair",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn canonical_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// A listing, normalized from one row of the `restaurants` tab.
///
/// Rebuilt from scratch on every fetch; only `id` and `slug` carry identity
/// across fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Routing key. Must be URL-safe; an empty slug is a data defect surfaced
    /// by the data-health report.
    pub slug: String,
    pub city: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// May be empty.
    pub cover_image_url: String,
    pub gallery_image_urls: Vec<String>,
    pub cuisines: Vec<String>,
    pub halal_status: HalalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_body: Option<String>,
    /// 1 (cheap) to 4 (expensive).
    pub price_level: u8,
    pub rating: f64,
    pub review_count: u32,
    pub opening_hours: String,
    pub features: Vec<Feature>,
    pub is_featured: bool,
    pub is_active: bool,
    /// Free text; parsed as a date only for the `newest` ordering.
    pub last_updated: String,
}

impl Restaurant {
    #[must_use]
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    #[must_use]
    pub fn has_slug(&self) -> bool {
        !self.slug.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halal_status_parse_accepts_canonical_names() {
        for status in HalalStatus::ALL {
            assert_eq!(HalalStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn halal_status_parse_is_lenient_about_case_and_separators() {
        assert_eq!(HalalStatus::parse(" Pork-Free "), Some(HalalStatus::PorkFree));
        assert_eq!(
            HalalStatus::parse("alcohol free"),
            Some(HalalStatus::AlcoholFree)
        );
        assert_eq!(HalalStatus::parse("CERTIFIED"), Some(HalalStatus::Certified));
    }

    #[test]
    fn halal_status_parse_rejects_unknown_tokens() {
        assert_eq!(HalalStatus::parse("bogus"), None);
        assert_eq!(HalalStatus::parse(""), None);
    }

    #[test]
    fn halal_status_serializes_snake_case() {
        let json = serde_json::to_string(&HalalStatus::AlcoholFree).unwrap();
        assert_eq!(json, "\"alcohol_free\"");
    }

    #[test]
    fn feature_parse_round_trips_every_variant() {
        for feature in Feature::ALL {
            assert_eq!(Feature::parse(feature.as_str()), Some(feature));
        }
    }

    #[test]
    fn feature_parse_rejects_unknown() {
        assert_eq!(Feature::parse("parking"), None);
    }

    #[test]
    fn feature_parse_accepts_spaces() {
        assert_eq!(Feature::parse("Prayer Space"), Some(Feature::PrayerSpace));
    }
}
