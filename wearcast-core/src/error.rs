use thiserror::Error;

/// Why a provider could not produce a snapshot.
///
/// `EmptyCity` and `CityNotFound` are the "not found" signal the presentation
/// layer turns into a friendly message; the rest are transport problems.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No city given")]
    EmptyCity,

    #[error("Could not find weather for '{0}'")]
    CityNotFound(String),

    #[error("Weather provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Weather provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::EmptyCity | FetchError::CityNotFound(_))
    }
}
