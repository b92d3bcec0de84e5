use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use crate::csv::parse_csv;
use crate::error::SheetError;
use crate::types::{RawRow, Tab};
use crate::url::resolve_tab_url;

/// HTTP client for published spreadsheet tabs.
///
/// Every request asks intermediaries for a fresh copy; the sheet is the
/// source of truth and edits should show up on the next fetch. Failures are
/// returned as-is with no retry.
#[derive(Debug, Clone)]
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the given per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw CSV text of `tab` from the spreadsheet at `reference`.
    ///
    /// # Errors
    ///
    /// - [`SheetError::UnexpectedStatus`] for any non-2xx response.
    /// - [`SheetError::Http`] for network, TLS, timeout or body read failures.
    pub async fn fetch_tab_text(&self, reference: &str, tab: &str) -> Result<String, SheetError> {
        let url = resolve_tab_url(reference, tab);
        tracing::info!(tab, url = %url, "fetching sheet tab");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                tab: tab.to_owned(),
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches `tab` and parses it into header-keyed rows.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_tab_text`].
    pub async fn fetch_tab(&self, reference: &str, tab: Tab) -> Result<Vec<RawRow>, SheetError> {
        let text = self.fetch_tab_text(reference, tab.as_str()).await?;
        let rows = parse_csv(&text);
        tracing::debug!(tab = tab.as_str(), count = rows.len(), "parsed sheet tab");
        Ok(rows)
    }
}
