use crate::errors::TransportError;
use crate::models::ApiRequest;
use crate::transport::Transport;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// In-memory transport double: hands out canned responses in FIFO order and
/// records every request it sees. Used by the store and client tests instead
/// of a live backend.
#[derive(Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<Bytes, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response body
    pub fn push_json(&self, value: serde_json::Value) {
        self.responses
            .lock()
            .push_back(Ok(Bytes::from(value.to_string())));
    }

    /// Queues a raw text response body
    pub fn push_text<S: Into<String>>(&self, body: S) {
        self.responses
            .lock()
            .push_back(Ok(Bytes::from(body.into())));
    }

    /// Queues a failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests executed so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Bytes, TransportError> {
        let path = request.path.clone();
        self.requests.lock().push(request);

        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(TransportError::HttpError(format!(
                "no canned response left for {}",
                path
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiBase, ApiRequest};

    #[tokio::test]
    async fn test_responses_are_served_in_order() {
        let transport = RecordingTransport::new();
        transport.push_text("first");
        transport.push_text("second");

        let a = transport
            .execute(ApiRequest::get(ApiBase::Panel, "servers"))
            .await
            .unwrap();
        let b = transport
            .execute(ApiRequest::get(ApiBase::Panel, "servers"))
            .await
            .unwrap();

        assert_eq!(a, Bytes::from("first"));
        assert_eq!(b, Bytes::from("second"));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_queue_fails() {
        let transport = RecordingTransport::new();
        let result = transport
            .execute(ApiRequest::get(ApiBase::Panel, "servers/abc"))
            .await;
        assert!(result.is_err());
    }
}
