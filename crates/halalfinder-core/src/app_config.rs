use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Spreadsheet reference from `GOOGLE_SHEET_URL`. `None` selects the
    /// bundled sample dataset.
    pub sheet_url: Option<String>,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sheet_timeout_secs: u64,
    pub user_agent: String,
    /// `Cache-Control` max-age advertised on read API responses.
    pub cache_max_age_secs: u64,
    pub rate_limit_per_minute: usize,
}

impl AppConfig {
    #[must_use]
    pub fn sheet_url(&self) -> Option<&str> {
        self.sheet_url.as_deref()
    }
}
