//! `explore`: the explore page's filter, sort and "load more" from the terminal.

use halalfinder_core::{
    filter_restaurants, sort_restaurants, AppData, Feature, HalalStatus, Page, Restaurant,
    RestaurantFilter, SortStrategy,
};

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct ExploreArgs {
    /// Case-insensitive text matched against name, city and cuisines
    #[arg(long)]
    pub search: Option<String>,

    /// Exact city name
    #[arg(long)]
    pub city: Option<String>,

    /// Cuisines; a restaurant needs at least one (comma-separated or repeated)
    #[arg(long = "cuisine", value_delimiter = ',')]
    pub cuisines: Vec<String>,

    /// Accepted halal statuses
    #[arg(long = "halal-status", value_delimiter = ',', value_parser = parse_halal_status)]
    pub halal_status: Vec<HalalStatus>,

    /// Required features; a restaurant needs all of them
    #[arg(long = "feature", value_delimiter = ',', value_parser = parse_feature)]
    pub features: Vec<Feature>,

    /// Accepted price levels (1-4)
    #[arg(
        long = "price-level",
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(1..=4)
    )]
    pub price_level: Vec<u8>,

    /// Minimum rating, inclusive
    #[arg(long, default_value_t = 0.0)]
    pub min_rating: f64,

    /// rating, reviews, featured or newest; anything else keeps sheet order
    #[arg(long, default_value = "rating")]
    pub sort: String,

    /// Number of 12-item pages to show
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl ExploreArgs {
    pub(crate) fn filter(&self) -> RestaurantFilter {
        RestaurantFilter {
            search: self.search.clone(),
            city: self.city.clone(),
            cuisines: self
                .cuisines
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect(),
            halal_status: self.halal_status.clone(),
            features: self.features.clone(),
            price_level: self.price_level.clone(),
            min_rating: self.min_rating,
        }
    }
}

fn parse_halal_status(raw: &str) -> Result<HalalStatus, String> {
    HalalStatus::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = HalalStatus::ALL.into_iter().map(HalalStatus::as_str).collect();
        format!("unknown halal status '{raw}' (expected one of: {})", known.join(", "))
    })
}

fn parse_feature(raw: &str) -> Result<Feature, String> {
    Feature::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Feature::ALL.into_iter().map(Feature::as_str).collect();
        format!("unknown feature '{raw}' (expected one of: {})", known.join(", "))
    })
}

/// Applies the explore pipeline and returns the visible window.
pub(crate) fn explore(data: &AppData, args: &ExploreArgs) -> Page<Restaurant> {
    let matched = filter_restaurants(&data.restaurants, &args.filter());
    let sorted = sort_restaurants(&matched, SortStrategy::from_name(&args.sort));
    Page::load_more(sorted, args.page)
}

pub(crate) fn run_explore(data: &AppData, args: &ExploreArgs) {
    let page = explore(data, args);
    if page.items.is_empty() {
        println!("no restaurants match");
        return;
    }

    let header = format!("{:<32}{:<28}{:<14}{}", "SLUG", "NAME", "CITY", "RATING");
    println!("{header}");
    println!("{}", "-".repeat(header.len()));
    for r in &page.items {
        println!("{}", format_row(r));
    }
    println!();
    println!("showing {} of {}", page.items.len(), page.total);
    if page.has_more {
        println!("more available: rerun with --page {}", page.page + 1);
    }
}

fn format_row(r: &Restaurant) -> String {
    format!(
        "{:<32}{:<28}{:<14}{:.1} ({})",
        truncate(&r.slug, 31),
        truncate(&r.name, 27),
        truncate(&r.city, 13),
        r.rating,
        r.review_count
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
