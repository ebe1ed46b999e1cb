use crate::errors::ApiError;
use bytes::Bytes;
use hearth_transport::{ApiRequest, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ApiError>;

/// Typed client over the panel and catalog endpoints.
/// One method per backend operation; no caching, no retries.
#[derive(Clone)]
pub struct PanelClient {
    pub(super) transport: Arc<dyn Transport>,
}

impl PanelClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub(super) async fn send_raw(&self, request: ApiRequest) -> Result<Bytes> {
        Ok(self.transport.execute(request).await?)
    }

    pub(super) async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let bytes = self.transport.execute(request).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Executes a request whose response body is irrelevant
    pub(super) async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.transport.execute(request).await?;
        Ok(())
    }
}

pub(super) fn json_body<T: Serialize>(body: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}
