use crate::client::{json_body, PanelClient};
use crate::errors::ApiError;
use crate::models::{SubdomainAvailability, SubdomainRequest};
use hearth_transport::{ApiBase, ApiRequest, SessionToken};

type Result<T> = std::result::Result<T, ApiError>;

impl PanelClient {
    /// Public availability query; no session credential is attached
    pub async fn subdomain_availability(&self, subdomain: &str) -> Result<bool> {
        let response: SubdomainAvailability = self
            .send_json(ApiRequest::get(
                ApiBase::Panel,
                format!("subdomains/{}/availability", subdomain),
            ))
            .await?;
        Ok(response.available)
    }

    /// Reassigns the server's public subdomain
    pub async fn change_subdomain(
        &self,
        auth: &SessionToken,
        server_id: &str,
        subdomain: &str,
    ) -> Result<()> {
        let body = json_body(&SubdomainRequest {
            subdomain: subdomain.to_string(),
        })?;
        self.send_unit(
            ApiRequest::post(ApiBase::Panel, format!("servers/{}/subdomain", server_id))
                .authed(auth)
                .json(body),
        )
        .await
    }
}
