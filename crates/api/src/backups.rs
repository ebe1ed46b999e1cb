use crate::client::{json_body, PanelClient};
use crate::errors::ApiError;
use crate::models::{CreatedBackup, NameRequest, WorldDownloadUrl};
use bytes::Bytes;
use hearth_models::ServerBackup;
use hearth_transport::{ApiBase, ApiRequest, SessionToken};

type Result<T> = std::result::Result<T, ApiError>;

impl PanelClient {
    /// Fetches the backup list in whatever order the backend returns it
    pub async fn list_backups(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<Vec<ServerBackup>> {
        self.send_json(
            ApiRequest::get(ApiBase::Panel, format!("servers/{}/backups", server_id)).authed(auth),
        )
        .await
    }

    /// Creates a named backup and returns its id
    pub async fn create_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        name: &str,
    ) -> Result<String> {
        let body = json_body(&NameRequest {
            name: name.to_string(),
        })?;
        let created: CreatedBackup = self
            .send_json(
                ApiRequest::post(ApiBase::Panel, format!("servers/{}/backups", server_id))
                    .authed(auth)
                    .json(body),
            )
            .await?;
        Ok(created.id)
    }

    pub async fn rename_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
        name: &str,
    ) -> Result<()> {
        let body = json_body(&NameRequest {
            name: name.to_string(),
        })?;
        self.send_unit(
            ApiRequest::post(
                ApiBase::Panel,
                format!("servers/{}/backups/{}/rename", server_id, backup_id),
            )
            .authed(auth)
            .json(body),
        )
        .await
    }

    pub async fn delete_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<()> {
        self.send_unit(
            ApiRequest::delete(
                ApiBase::Panel,
                format!("servers/{}/backups/{}", server_id, backup_id),
            )
            .authed(auth),
        )
        .await
    }

    pub async fn restore_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<()> {
        self.send_unit(
            ApiRequest::post(
                ApiBase::Panel,
                format!("servers/{}/backups/{}/restore", server_id, backup_id),
            )
            .authed(auth),
        )
        .await
    }

    /// Downloads the backup archive into memory
    pub async fn download_backup(
        &self,
        auth: &SessionToken,
        server_id: &str,
        backup_id: &str,
    ) -> Result<Bytes> {
        self.send_raw(
            ApiRequest::get(
                ApiBase::Panel,
                format!("servers/{}/backups/{}/download", server_id, backup_id),
            )
            .authed(auth),
        )
        .await
    }

    /// Asks the backend to start exporting the server world
    pub async fn initiate_world_download(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<()> {
        self.send_unit(
            ApiRequest::post(
                ApiBase::Panel,
                format!("servers/{}/world/download", server_id),
            )
            .authed(auth),
        )
        .await
    }

    /// Retrieves the download link for a previously initiated world export
    pub async fn world_download_url(
        &self,
        auth: &SessionToken,
        server_id: &str,
    ) -> Result<String> {
        let response: WorldDownloadUrl = self
            .send_json(
                ApiRequest::get(
                    ApiBase::Panel,
                    format!("servers/{}/world/download", server_id),
                )
                .authed(auth),
            )
            .await?;
        Ok(response.url)
    }
}
