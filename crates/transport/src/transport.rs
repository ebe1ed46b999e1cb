use crate::errors::TransportError;
use crate::models::ApiRequest;
use bytes::Bytes;

/// HTTP seam between the typed panel client and the wire.
/// Error classification, timeouts and connection handling live behind this
/// trait; callers only see a body or a [`TransportError`].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Executes a request and returns the raw response body
    async fn execute(&self, request: ApiRequest) -> Result<Bytes, TransportError>;
}
