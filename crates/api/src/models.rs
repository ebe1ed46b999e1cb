use serde::{Deserialize, Serialize};

// Request bodies

#[derive(Debug, Clone, Serialize)]
pub struct PowerRequest {
    pub action: hearth_models::PowerAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct NameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubdomainRequest {
    pub subdomain: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModInstallRequest {
    pub rinth_ids: RinthIds,
}

#[derive(Debug, Clone, Serialize)]
pub struct RinthIds {
    pub project_id: String,
    pub version_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReinstallRequest {
    pub project_id: String,
    pub version_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionRef {
    pub version_id: String,
}

// Response bodies

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBackup {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubdomainAvailability {
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorldDownloadUrl {
    pub url: String,
}

/// Live-connection handle returned by the websocket endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct WebsocketTicket {
    pub url: String,
    pub token: String,
}
