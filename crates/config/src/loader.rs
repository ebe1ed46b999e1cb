use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::models::Config;
use std::path::Path;

impl Config {
    /// Loads configuration from a TOML file, creating a default file first
    /// if none exists yet
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            create_default_config(path).await?;
            tracing::info!("Created default configuration at: {}", path.display());
        }

        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.panel_url.is_empty() {
            return Err(ConfigError::InvalidConfig("api.panel_url is empty".to_string()));
        }
        if self.api.catalog_url.is_empty() {
            return Err(ConfigError::InvalidConfig("api.catalog_url is empty".to_string()));
        }
        Ok(())
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}
