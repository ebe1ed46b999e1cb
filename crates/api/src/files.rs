use crate::client::PanelClient;
use crate::errors::ApiError;
use hearth_transport::{ApiBase, ApiRequest, SessionToken};

type Result<T> = std::result::Result<T, ApiError>;

impl PanelClient {
    /// Reads a named configuration file; contents are opaque text
    pub async fn get_config_file(
        &self,
        auth: &SessionToken,
        server_id: &str,
        file_name: &str,
    ) -> Result<String> {
        let bytes = self
            .send_raw(
                ApiRequest::get(
                    ApiBase::Panel,
                    format!("servers/{}/config/{}", server_id, file_name),
                )
                .authed(auth),
            )
            .await?;

        String::from_utf8(bytes.to_vec())
            .map_err(|e| ApiError::DecodeError(format!("config file is not UTF-8: {}", e)))
    }

    /// Writes a named configuration file verbatim
    pub async fn put_config_file(
        &self,
        auth: &SessionToken,
        server_id: &str,
        file_name: &str,
        data: &str,
    ) -> Result<()> {
        self.send_unit(
            ApiRequest::put(
                ApiBase::Panel,
                format!("servers/{}/config/{}", server_id, file_name),
            )
            .authed(auth)
            .text(data),
        )
        .await
    }
}
