use super::models::ServerStore;
use crate::errors::StoreError;
use hearth_transport::SessionToken;

type Result<T> = std::result::Result<T, StoreError>;

impl ServerStore {
    /// Public availability query; no session credential required
    pub async fn check_subdomain_availability(&self, subdomain: &str) -> Result<bool> {
        self.api
            .subdomain_availability(subdomain)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check subdomain {}: {}", subdomain, e);
                self.record_failure("check_subdomain_availability", e)
            })
    }

    /// Reassigns the server's public subdomain; no cache effect
    pub async fn change_subdomain(
        &self,
        auth: &SessionToken,
        server_id: &str,
        subdomain: &str,
    ) -> Result<()> {
        self.api
            .change_subdomain(auth, server_id, subdomain)
            .await
            .map_err(|e| {
                tracing::error!("Failed to change subdomain of {}: {}", server_id, e);
                self.record_failure("change_subdomain", e)
            })
    }
}
