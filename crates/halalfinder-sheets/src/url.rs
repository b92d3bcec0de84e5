//! Turning a spreadsheet reference into a per-tab CSV export URL.

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Characters left unescaped in a query value, matching the set a browser's
/// `encodeURIComponent` keeps.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static SPREADSHEET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/spreadsheets/d/([^/?#]+)").expect("valid spreadsheet id regex")
});

/// Resolves the CSV export URL for `tab` of the spreadsheet named by `reference`.
///
/// - A "publish to web" link (contains `/d/e/` and `/pub`) keeps its path,
///   drops its query and fragment, and gets `?single=true&output=csv&sheet=<tab>`.
/// - A share/edit link (`/spreadsheets/d/<id>`) maps to the visualization
///   query endpoint `…/d/<id>/gviz/tq?tqx=out:csv&sheet=<tab>`.
/// - Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use halalfinder_sheets::resolve_tab_url;
///
/// assert_eq!(
///     resolve_tab_url("https://docs.google.com/spreadsheets/d/abc/edit#gid=0", "cities"),
///     "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:csv&sheet=cities",
/// );
/// ```
#[must_use]
pub fn resolve_tab_url(reference: &str, tab: &str) -> String {
    let sheet = utf8_percent_encode(tab, QUERY_VALUE);

    if reference.contains("/d/e/") && reference.contains("/pub") {
        let base = reference.split(['?', '#']).next().unwrap_or(reference);
        return format!("{base}?single=true&output=csv&sheet={sheet}");
    }

    if let Some(id) = SPREADSHEET_ID
        .captures(reference)
        .and_then(|caps| caps.get(1))
    {
        return format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={sheet}",
            id.as_str()
        );
    }

    reference.to_string()
}
