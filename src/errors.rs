use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Unexpected response format from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Directory entry {park} has no ZIP code")]
    MissingZip { park: String },

    #[error("No parks found near {zip}")]
    NoParksFound { zip: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for HandlerError {
    fn from(error: url::ParseError) -> Self {
        HandlerError::Config(format!("invalid URL: {error}"))
    }
}

impl HandlerError {
    /// Errors that belong on the Lambda error channel rather than in a fallback reply.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, HandlerError::InvalidInput(_))
    }
}
