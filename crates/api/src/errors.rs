use hearth_transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),

    #[error("Failed to decode response: {0}")]
    DecodeError(String),
}

// Convert serde_json errors to ApiError
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::DecodeError(err.to_string())
    }
}
