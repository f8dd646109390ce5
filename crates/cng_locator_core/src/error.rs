use thiserror::Error;

/// Top-level error type for station search and route planning.
#[derive(Debug, Error)]
pub enum LocatorError {
    // --- User input (surfaced immediately, never retried) ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown vehicle model: {0}")]
    UnknownVehicle(String),

    // --- Remote services ---
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request superseded by a newer one")]
    Cancelled,

    // --- Operational ---
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LocatorError {
    /// Whether the user typed something we cannot use.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnknownVehicle(_))
    }

    /// Whether the failure came from talking to a remote service.
    /// Network, upstream and timeout failures are presented the same way.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Upstream(_) | Self::Timeout(_) | Self::Serialization(_)
        )
    }
}

impl From<reqwest::Error> for LocatorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Upstream(format!("Undecodable response: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for locator operations.
pub type Result<T> = std::result::Result<T, LocatorError>;
