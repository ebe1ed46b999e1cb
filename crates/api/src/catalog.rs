use crate::client::PanelClient;
use crate::errors::ApiError;
use hearth_models::{ModpackVersion, Project};
use hearth_transport::{ApiBase, ApiRequest};

type Result<T> = std::result::Result<T, ApiError>;

// Catalog lookups are public; no session credential is attached.
impl PanelClient {
    /// Resolves version metadata for a modpack
    pub async fn get_version(&self, version_id: &str) -> Result<ModpackVersion> {
        self.send_json(ApiRequest::get(ApiBase::Catalog, format!("version/{}", version_id)))
            .await
    }

    /// Resolves project metadata from the catalog
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.send_json(ApiRequest::get(ApiBase::Catalog, format!("project/{}", project_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_transport::RecordingTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_catalog_requests_are_unauthenticated() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "ver1", "project_id": "proj1" }));
        let client = PanelClient::new(Arc::clone(&transport));

        let version = client.get_version("ver1").await.unwrap();
        assert_eq!(version.project_id, "proj1");

        let requests = transport.requests();
        assert_eq!(requests[0].base, ApiBase::Catalog);
        assert_eq!(requests[0].path, "version/ver1");
        assert!(requests[0].auth.is_none());
    }
}
