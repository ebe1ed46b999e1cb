use super::models::ServerStore;
use crate::backups::sort_newest_first;
use crate::errors::StoreError;
use hearth_api::{ApiError, WebsocketTicket};
use hearth_events::StoreEvent;
use hearth_models::{ModpackVersion, PowerAction, Project, Server, ServerPatch};
use hearth_transport::SessionToken;

type Result<T> = std::result::Result<T, StoreError>;

impl ServerStore {
    /// Fetches one server record, resolving the installed modpack (version
    /// then project) and the backup list before caching. The cache entry is
    /// replaced wholesale on success and left untouched on failure.
    pub async fn fetch_server(&self, auth: &SessionToken, server_id: &str) -> Result<Server> {
        match self.resolve_server(auth, server_id).await {
            Ok(server) => {
                self.servers.insert(server_id.to_string(), server.clone());
                self.clear_error();
                self.events.emit(StoreEvent::ServerCached {
                    server_id: server_id.to_string(),
                });
                Ok(server)
            }
            Err(e) => {
                tracing::error!("Failed to fetch server {}: {}", server_id, e);
                Err(self.record_failure("fetch_server", e))
            }
        }
    }

    async fn resolve_server(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> std::result::Result<Server, ApiError> {
        let mut server = self.api.get_server(auth, server_id).await?;

        if let Some(modpack) = server.modpack.clone() {
            let version = self.api.get_version(&modpack).await?;
            let project = self.api.get_project(&version.project_id).await?;
            server.modpack_id = Some(version.id);
            server.project = Some(project);
        }

        let mut backups = self.api.list_backups(auth, server_id).await?;
        sort_newest_first(&mut backups);
        server.backups = backups;

        Ok(server)
    }

    /// Fetches every server visible to the session. Read-through only: the
    /// result is not cached and the error slot stays untouched.
    pub async fn list_servers(&self, auth: &SessionToken) -> Result<Vec<Server>> {
        self.api.list_servers(auth).await.map_err(|e| {
            tracing::error!("Failed to list servers: {}", e);
            StoreError::new("list_servers", e)
        })
    }

    /// Resolves modpack version metadata from the catalog
    pub async fn fetch_modpack_version(&self, modpack_id: &str) -> Result<ModpackVersion> {
        self.api.get_version(modpack_id).await.map_err(|e| {
            tracing::error!("Failed to fetch modpack version {}: {}", modpack_id, e);
            StoreError::new("fetch_modpack_version", e)
        })
    }

    /// Resolves project metadata from the catalog
    pub async fn fetch_project(&self, project_id: &str) -> Result<Project> {
        self.api.get_project(project_id).await.map_err(|e| {
            tracing::error!("Failed to fetch project {}: {}", project_id, e);
            StoreError::new("fetch_project", e)
        })
    }

    /// Requests a live-connection ticket; no cache effect
    pub async fn request_websocket(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<WebsocketTicket> {
        self.api
            .request_websocket(auth, server_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to request websocket for {}: {}", server_id, e);
                self.record_failure("request_websocket", e)
            })
    }

    /// Issues a power command; callers re-fetch to observe the state change
    pub async fn send_power_action(
        &self,
        auth: &SessionToken,
        server_id: &str,
        action: PowerAction,
    ) -> Result<()> {
        self.api
            .send_power_action(auth, server_id, action)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send power action to {}: {}", server_id, e);
                self.record_failure("send_power_action", e)
            })
    }

    /// Renames the server, then merges the new name into the cache entry
    /// when one exists
    pub async fn update_server_name(
        &self,
        auth: &SessionToken,
        server_id: &str,
        new_name: &str,
    ) -> Result<()> {
        self.api
            .rename_server(auth, server_id, new_name)
            .await
            .map_err(|e| {
                tracing::error!("Failed to rename server {}: {}", server_id, e);
                self.record_failure("update_server_name", e)
            })?;

        self.update_server(
            server_id,
            ServerPatch {
                name: Some(new_name.to_string()),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Reprovisions the server onto a different project/version; no cache
    /// effect
    pub async fn reinstall_server(
        &self,
        auth: &SessionToken,
        server_id: &str,
        project_id: &str,
        version_id: &str,
    ) -> Result<()> {
        self.api
            .reinstall_server(auth, server_id, project_id, version_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reinstall server {}: {}", server_id, e);
                self.record_failure("reinstall_server", e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_api::PanelClient;
    use hearth_events::EventBus;
    use hearth_transport::{RecordingTransport, TransportError};
    use serde_json::json;
    use std::sync::Arc;

    fn store_with(transport: Arc<RecordingTransport>) -> ServerStore {
        ServerStore::new(PanelClient::new(transport), EventBus::new(16))
    }

    fn auth() -> SessionToken {
        SessionToken::new("session-token")
    }

    #[tokio::test]
    async fn test_fetch_server_resolves_modpack_and_sorts_backups() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({
            "id": "srv1",
            "name": "Skyblock",
            "state": "running",
            "modpack": "ver-9"
        }));
        transport.push_json(json!({ "id": "ver-9", "project_id": "proj-3" }));
        transport.push_json(json!({ "id": "proj-3", "title": "Skyblock Pack" }));
        transport.push_json(json!([
            { "id": "b1", "name": "old", "created_at": "2024-01-01T00:00:00Z" },
            { "id": "b2", "name": "recent", "created_at": "2024-03-01T00:00:00Z" }
        ]));

        let store = store_with(Arc::clone(&transport));
        let server = store.fetch_server(&auth(), "srv1").await.unwrap();

        assert_eq!(server.modpack_id.as_deref(), Some("ver-9"));
        assert_eq!(server.project.as_ref().unwrap().title, "Skyblock Pack");
        assert_eq!(server.backups[0].id, "b2");
        assert_eq!(server.backups[1].id, "b1");

        let cached = store.get_server("srv1").unwrap();
        assert_eq!(cached.name, "Skyblock");
        assert!(!store.has_error());

        let paths: Vec<String> = transport.requests().iter().map(|r| r.path.clone()).collect();
        assert_eq!(
            paths,
            vec!["servers/srv1", "version/ver-9", "project/proj-3", "servers/srv1/backups"]
        );
    }

    #[tokio::test]
    async fn test_fetch_server_without_modpack_skips_catalog() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "srv1", "name": "Vanilla" }));
        transport.push_json(json!([]));

        let store = store_with(Arc::clone(&transport));
        let server = store.fetch_server(&auth(), "srv1").await.unwrap();

        assert!(server.modpack_id.is_none());
        assert!(server.project.is_none());
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_server_failure_keeps_prior_entry_and_sets_error() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "srv1", "name": "Before" }));
        transport.push_json(json!([]));
        transport.push_error(TransportError::Status {
            status: 500,
            message: "boom".to_string(),
        });

        let store = store_with(Arc::clone(&transport));
        store.fetch_server(&auth(), "srv1").await.unwrap();

        let result = store.fetch_server(&auth(), "srv1").await;
        assert!(result.is_err());

        // Prior record survives the failed refresh
        assert_eq!(store.get_server("srv1").unwrap().name, "Before");
        assert!(store.has_error());
        assert_eq!(store.last_error().unwrap().operation, "fetch_server");
    }

    #[tokio::test]
    async fn test_fetch_server_success_clears_error_slot() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_error(TransportError::HttpError("offline".to_string()));
        transport.push_json(json!({ "id": "srv1", "name": "Back" }));
        transport.push_json(json!([]));

        let store = store_with(Arc::clone(&transport));
        assert!(store.fetch_server(&auth(), "srv1").await.is_err());
        assert!(store.has_error());

        store.fetch_server(&auth(), "srv1").await.unwrap();
        assert!(!store.has_error());
    }

    #[tokio::test]
    async fn test_failed_backup_fetch_fails_whole_server_fetch() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "srv1", "name": "Skyblock" }));
        transport.push_error(TransportError::Status {
            status: 502,
            message: "bad gateway".to_string(),
        });

        let store = store_with(Arc::clone(&transport));
        assert!(store.fetch_server(&auth(), "srv1").await.is_err());
        assert!(store.get_server("srv1").is_none());
        assert!(store.has_error());
    }

    #[tokio::test]
    async fn test_list_servers_failure_leaves_error_slot_untouched() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_error(TransportError::HttpError("offline".to_string()));

        let store = store_with(Arc::clone(&transport));
        let result = store.list_servers(&auth()).await;

        let error = result.unwrap_err();
        assert_eq!(error.operation, "list_servers");
        assert!(!store.has_error());
    }

    #[tokio::test]
    async fn test_update_server_name_on_uncached_server_warns_and_noops() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({}));

        let store = store_with(Arc::clone(&transport));
        store.update_server_name(&auth(), "srv1", "new").await.unwrap();

        assert!(store.get_server("srv1").is_none());
        assert!(store.cached_servers().is_empty());
        assert!(!store.has_error());
    }

    #[tokio::test]
    async fn test_update_server_name_merges_into_cached_entry() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "srv1", "name": "Old" }));
        transport.push_json(json!([]));
        transport.push_json(json!({}));

        let store = store_with(Arc::clone(&transport));
        store.fetch_server(&auth(), "srv1").await.unwrap();
        store.update_server_name(&auth(), "srv1", "New").await.unwrap();

        assert_eq!(store.get_server("srv1").unwrap().name, "New");
    }

    #[tokio::test]
    async fn test_fetch_emits_server_cached_event() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_json(json!({ "id": "srv1", "name": "Skyblock" }));
        transport.push_json(json!([]));

        let store = store_with(Arc::clone(&transport));
        let mut events = store.subscribe();

        store.fetch_server(&auth(), "srv1").await.unwrap();

        match events.recv().await.unwrap() {
            hearth_events::StoreEvent::ServerCached { server_id } => {
                assert_eq!(server_id, "srv1")
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
