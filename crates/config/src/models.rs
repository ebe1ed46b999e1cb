use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiSettings,
    #[serde(default = "super::defaults::http_settings")]
    pub http: HttpSettings,
    #[serde(default = "super::defaults::store_settings")]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the panel backend (the `servers/...` and `subdomains/...` routes)
    pub panel_url: String,
    /// Base URL of the modpack catalog (the `version/...` and `project/...` routes)
    pub catalog_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpSettings {
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default = "super::defaults::event_channel_capacity")]
    pub event_channel_capacity: usize,
}
