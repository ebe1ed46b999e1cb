use crate::errors::TransportError;
use crate::models::{ApiBase, ApiRequest, Method, RequestBody};
use crate::transport::Transport;
use bytes::Bytes;
use hearth_config::Config;
use std::time::Duration;

type Result<T> = std::result::Result<T, TransportError>;

/// reqwest-backed transport routing requests to the panel and catalog bases
pub struct HttpTransport {
    panel_url: String,
    catalog_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(config.http.user_agent.clone())
            .build()?;

        Ok(Self {
            panel_url: config.api.panel_url.trim_end_matches('/').to_string(),
            catalog_url: config.api.catalog_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url_for(&self, base: ApiBase, path: &str) -> String {
        let root = match base {
            ApiBase::Panel => &self.panel_url,
            ApiBase::Catalog => &self.catalog_url,
        };
        format!("{}/{}", root, path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Bytes> {
        let url = self.url_for(request.base, &request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        if let Some(auth) = &request.auth {
            builder = builder.header("Authorization", format!("Bearer {}", auth.as_str()));
        }

        match request.body {
            Some(RequestBody::Json(value)) => builder = builder.json(&value),
            Some(RequestBody::Text(text)) => builder = builder.body(text),
            None => {}
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_config::Config;

    fn test_config() -> Config {
        Config::from_toml(
            "[api]\npanel_url = \"https://panel.example/api/v1/\"\ncatalog_url = \"https://catalog.example/v2\"\n",
        )
        .unwrap()
    }

    #[test]
    fn test_url_routing_strips_redundant_slashes() {
        let transport = HttpTransport::new(&test_config()).unwrap();

        assert_eq!(
            transport.url_for(ApiBase::Panel, "servers/abc"),
            "https://panel.example/api/v1/servers/abc"
        );
        assert_eq!(
            transport.url_for(ApiBase::Catalog, "/version/xyz"),
            "https://catalog.example/v2/version/xyz"
        );
    }
}
