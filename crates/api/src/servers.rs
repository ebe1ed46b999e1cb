use crate::client::{json_body, PanelClient};
use crate::errors::ApiError;
use crate::models::{NameRequest, PowerRequest, ReinstallRequest, WebsocketTicket};
use hearth_models::{PowerAction, Server};
use hearth_transport::{ApiBase, ApiRequest, SessionToken};

type Result<T> = std::result::Result<T, ApiError>;

impl PanelClient {
    /// Fetches a single server record (without backups; see `list_backups`)
    pub async fn get_server(&self, auth: &SessionToken, server_id: &str) -> Result<Server> {
        self.send_json(ApiRequest::get(ApiBase::Panel, format!("servers/{}", server_id)).authed(auth))
            .await
    }

    /// Fetches every server visible to the session
    pub async fn list_servers(&self, auth: &SessionToken) -> Result<Vec<Server>> {
        self.send_json(ApiRequest::get(ApiBase::Panel, "servers").authed(auth))
            .await
    }

    pub async fn request_websocket(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<WebsocketTicket> {
        self.send_json(ApiRequest::get(ApiBase::Panel, format!("servers/{}/ws", server_id)).authed(auth))
            .await
    }

    pub async fn send_power_action(
        &self,
        auth: &SessionToken,
        server_id: &str,
        action: PowerAction,
    ) -> Result<()> {
        let body = json_body(&PowerRequest { action })?;
        self.send_unit(
            ApiRequest::post(ApiBase::Panel, format!("servers/{}/power", server_id))
                .authed(auth)
                .json(body),
        )
        .await
    }

    pub async fn rename_server(
        &self,
        auth: &SessionToken,
        server_id: &str,
        name: &str,
    ) -> Result<()> {
        let body = json_body(&NameRequest {
            name: name.to_string(),
        })?;
        self.send_unit(
            ApiRequest::post(ApiBase::Panel, format!("servers/{}/name", server_id))
                .authed(auth)
                .json(body),
        )
        .await
    }

    /// Reprovisions the server onto a different project/version
    pub async fn reinstall_server(
        &self,
        auth: &SessionToken,
        server_id: &str,
        project_id: &str,
        version_id: &str,
    ) -> Result<()> {
        let body = json_body(&ReinstallRequest {
            project_id: project_id.to_string(),
            version_id: version_id.to_string(),
        })?;
        self.send_unit(
            ApiRequest::post(ApiBase::Panel, format!("servers/{}/reinstall", server_id))
                .authed(auth)
                .json(body),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_transport::{Method, RecordingTransport, RequestBody};
    use serde_json::json;
    use std::sync::Arc;

    fn client_with(transport: Arc<RecordingTransport>) -> PanelClient {
        PanelClient::new(transport)
    }

    #[tokio::test]
    async fn test_power_action_posts_action_body() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({}));
        let client = client_with(Arc::clone(&transport));
        let auth = SessionToken::new("tok");

        client
            .send_power_action(&auth, "srv1", PowerAction::Restart)
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "servers/srv1/power");
        assert!(requests[0].auth.is_some());
        match &requests[0].body {
            Some(RequestBody::Json(body)) => assert_eq!(body, &json!({ "action": "restart" })),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rename_posts_name_body() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({}));
        let client = client_with(Arc::clone(&transport));
        let auth = SessionToken::new("tok");

        client.rename_server(&auth, "srv1", "Skyblock").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "servers/srv1/name");
        match &requests[0].body {
            Some(RequestBody::Json(body)) => assert_eq!(body, &json!({ "name": "Skyblock" })),
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
