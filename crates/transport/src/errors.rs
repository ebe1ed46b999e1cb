use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

// Convert reqwest errors to TransportError
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::HttpError(err.to_string())
    }
}
