/// Default values for configuration fields

pub fn timeout_secs() -> u64 {
    30
}

pub fn user_agent() -> String {
    format!("hearth/{}", env!("CARGO_PKG_VERSION"))
}

pub fn event_channel_capacity() -> usize {
    64  // Buffered store events before slow subscribers start lagging
}

pub fn http_settings() -> super::models::HttpSettings {
    super::models::HttpSettings {
        timeout_secs: timeout_secs(),
        user_agent: user_agent(),
    }
}

pub fn store_settings() -> super::models::StoreSettings {
    super::models::StoreSettings {
        event_channel_capacity: event_channel_capacity(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Hearth panel client configuration

[api]
# Base URL of the panel backend
panel_url = "https://panel.example.com/api/v1"
# Base URL of the modpack catalog
catalog_url = "https://catalog.example.com/v2"

[http]
timeout_secs = 30

[store]
event_channel_capacity = 64
"#;
