use super::models::ServerStore;
use crate::errors::StoreError;
use bytes::Bytes;
use hearth_models::ServerBackup;
use hearth_transport::SessionToken;

type Result<T> = std::result::Result<T, StoreError>;

/// Most recent first; the stable sort keeps equal timestamps in input order
pub(crate) fn sort_newest_first(backups: &mut [ServerBackup]) {
    backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl ServerStore {
    /// Fetches the backup list sorted newest-first
    pub async fn fetch_server_backups(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<Vec<ServerBackup>> {
        let mut backups = self.api.list_backups(auth, server_id).await.map_err(|e| {
            tracing::error!("Failed to fetch backups for {}: {}", server_id, e);
            StoreError::new("fetch_server_backups", e)
        })?;
        sort_newest_first(&mut backups);
        Ok(backups)
    }

    /// Creates a named backup and returns its id. The cache is not touched;
    /// callers re-fetch the backup list to observe the change.
    pub async fn create_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        name: &str,
    ) -> Result<String> {
        self.api
            .create_backup(auth, server_id, name)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create backup for {}: {}", server_id, e);
                self.record_failure("create_backup", e)
            })
    }

    pub async fn rename_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
        name: &str,
    ) -> Result<()> {
        self.api
            .rename_backup(auth, server_id, backup_id, name)
            .await
            .map_err(|e| {
                tracing::error!("Failed to rename backup {} of {}: {}", backup_id, server_id, e);
                self.record_failure("rename_backup", e)
            })
    }

    pub async fn delete_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<()> {
        self.api
            .delete_backup(auth, server_id, backup_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete backup {} of {}: {}", backup_id, server_id, e);
                self.record_failure("delete_backup", e)
            })
    }

    pub async fn restore_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<()> {
        self.api
            .restore_backup(auth, server_id, backup_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to restore backup {} of {}: {}", backup_id, server_id, e);
                self.record_failure("restore_backup", e)
            })
    }

    /// Downloads the backup archive into memory
    pub async fn download_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<Bytes> {
        self.api
            .download_backup(auth, server_id, backup_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to download backup {} of {}: {}", backup_id, server_id, e);
                self.record_failure("download_backup", e)
            })
    }

    /// Asks the backend to start exporting the server world
    pub async fn initiate_world_download(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<()> {
        self.api
            .initiate_world_download(auth, server_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to initiate world download for {}: {}", server_id, e);
                self.record_failure("initiate_world_download", e)
            })
    }

    /// Retrieves the download link for a previously initiated world export
    pub async fn get_world_download_url(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<String> {
        self.api
            .world_download_url(auth, server_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get world download URL for {}: {}", server_id, e);
                self.record_failure("get_world_download_url", e)
            })
    }
}
