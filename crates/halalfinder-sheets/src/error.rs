use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to fetch tab \"{tab}\": HTTP {status} from {url}")]
    UnexpectedStatus {
        tab: String,
        status: u16,
        url: String,
    },
}

impl SheetError {
    /// The HTTP status for status errors; `None` for transport failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
