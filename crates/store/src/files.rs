use super::models::ServerStore;
use crate::errors::StoreError;
use hearth_transport::SessionToken;

type Result<T> = std::result::Result<T, StoreError>;

impl ServerStore {
    /// Reads a named configuration file; contents are opaque to the store
    pub async fn fetch_config_file(
        &self,
        auth: &SessionToken,
        server_id: &str,
        file_name: &str,
    ) -> Result<String> {
        self.api
            .get_config_file(auth, server_id, file_name)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch config file {} of {}: {}", file_name, server_id, e);
                self.record_failure("fetch_config_file", e)
            })
    }

    /// Writes a named configuration file verbatim
    pub async fn save_config_file(
        &self,
        auth: &SessionToken,
        server_id: &str,
        file_name: &str,
        data: &str,
    ) -> Result<()> {
        self.api
            .put_config_file(auth, server_id, file_name, data)
            .await
            .map_err(|e| {
                tracing::error!("Failed to save config file {} of {}: {}", file_name, server_id, e);
                self.record_failure("save_config_file", e)
            })
    }
}
