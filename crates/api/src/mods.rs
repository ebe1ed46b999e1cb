use crate::client::{json_body, PanelClient};
use crate::errors::ApiError;
use crate::models::{ModInstallRequest, RinthIds, VersionRef};
use hearth_transport::{ApiBase, ApiRequest, SessionToken};

type Result<T> = std::result::Result<T, ApiError>;

impl PanelClient {
    pub async fn install_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        project_id: &str,
        version_id: &str,
    ) -> Result<()> {
        let body = json_body(&ModInstallRequest {
            rinth_ids: RinthIds {
                project_id: project_id.to_string(),
                version_id: version_id.to_string(),
            },
        })?;
        self.send_unit(
            ApiRequest::post(ApiBase::Panel, format!("servers/{}/mods", server_id))
                .authed(auth)
                .json(body),
        )
        .await
    }

    pub async fn remove_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        mod_id: &str,
    ) -> Result<()> {
        self.send_unit(
            ApiRequest::delete(
                ApiBase::Panel,
                format!("servers/{}/mods/{}", server_id, mod_id),
            )
            .authed(auth),
        )
        .await
    }

    /// Reinstalls an already-installed mod at a specific version
    pub async fn reinstall_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        mod_id: &str,
        version_id: &str,
    ) -> Result<()> {
        let body = json_body(&VersionRef {
            version_id: version_id.to_string(),
        })?;
        self.send_unit(
            ApiRequest::post(
                ApiBase::Panel,
                format!("servers/{}/mods/{}", server_id, mod_id),
            )
            .authed(auth)
            .json(body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_transport::{RecordingTransport, RequestBody, SessionToken};
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_install_mod_nests_rinth_ids() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({}));
        let client = PanelClient::new(Arc::clone(&transport));
        let auth = SessionToken::new("tok");

        client
            .install_mod(&auth, "srv1", "proj-a", "ver-b")
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "servers/srv1/mods");
        match &requests[0].body {
            Some(RequestBody::Json(body)) => assert_eq!(
                body,
                &json!({ "rinth_ids": { "project_id": "proj-a", "version_id": "ver-b" } })
            ),
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
