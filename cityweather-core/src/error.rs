use thiserror::Error;

/// Why a weather query produced no report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The host reported no connectivity; nothing was sent.
    #[error("no network connectivity")]
    Offline,

    /// The city input was blank after trimming.
    #[error("city input is empty")]
    EmptyInput,

    /// The provider rejected the query with a 4xx status.
    #[error("city not found: {city} (status {status})")]
    CityNotFound { city: String, status: u16 },

    /// Transport failure, 5xx status or an unreadable body.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Text shown to the user, or `None` for errors that are never surfaced.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            FetchError::Offline => Some("Please connect to the internet and try again."),
            FetchError::EmptyInput => None,
            FetchError::CityNotFound { .. } => Some("City not found. Please try again."),
            FetchError::Network(_) => {
                Some("Unable to reach the weather service. Please try again later.")
            }
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}
