/// Failure of a single Graph call.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The request never produced a usable response (connection refused,
    /// DNS, TLS, invalid header value, body read failure).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Graph answered with a non-success status.
    #[error("Graph returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphError {
    /// HTTP status of the response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphError::Status { status, .. } => Some(*status),
            GraphError::Request(e) => e.status().map(|s| s.as_u16()),
            GraphError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for Graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
