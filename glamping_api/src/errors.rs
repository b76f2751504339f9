//! Error types for the API client.

/// Errors that can occur when talking to the glamping backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The backend could not be reached (connection refused, DNS, timeout).
    #[error("Could not connect to the server: {0}")]
    Network(String),
    /// The backend answered with a non-success status. `body` is kept whole
    /// so structured error payloads can still be parsed.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// A request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl Error {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
