use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("search API returned status: {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid data structure from search API: {reason}")]
    InvalidShape { reason: String },

    #[error("invalid search endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

impl ClientError {
    /// `true` when the upstream answered but the body broke the response
    /// contract, as opposed to the upstream being unreachable or failing.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ClientError::Deserialize { .. } | ClientError::InvalidShape { .. }
        )
    }
}
