use super::models::ServerStore;
use crate::errors::StoreError;
use hearth_transport::SessionToken;

type Result<T> = std::result::Result<T, StoreError>;

// Mod lifecycle management. None of these touch the cache; the server's mod
// list lives backend-side and callers re-fetch to observe changes.
impl ServerStore {
    pub async fn install_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        project_id: &str,
        version_id: &str,
    ) -> Result<()> {
        self.api
            .install_mod(auth, server_id, project_id, version_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to install mod {} on {}: {}", project_id, server_id, e);
                self.record_failure("install_mod", e)
            })
    }

    pub async fn remove_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        mod_id: &str,
    ) -> Result<()> {
        self.api
            .remove_mod(auth, server_id, mod_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove mod {} from {}: {}", mod_id, server_id, e);
                self.record_failure("remove_mod", e)
            })
    }

    pub async fn reinstall_mod(
        &self,
        auth: &SessionToken,
        server_id: &str,
        mod_id: &str,
        version_id: &str,
    ) -> Result<()> {
        self.api
            .reinstall_mod(auth, server_id, mod_id, version_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reinstall mod {} on {}: {}", mod_id, server_id, e);
                self.record_failure("reinstall_mod", e)
            })
    }
}
