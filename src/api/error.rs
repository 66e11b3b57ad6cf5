use thiserror::Error;

/// Errors from a single upstream request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-2xx status. `message` is the upstream
    /// error body's `message` field when present, else the status reason.
    #[error("upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The one human-readable string shown inline in the view. Prefers the
    /// upstream error message body, else the transport error message.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Transport { source, .. } => source.to_string(),
            ApiError::Decode { .. } => self.to_string(),
        }
    }
}
