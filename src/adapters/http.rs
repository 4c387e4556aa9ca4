use crate::domain::ports::UpstreamApi;
use crate::utils::error::UpstreamError;
use async_trait::async_trait;
use reqwest::Client;

/// `UpstreamApi` backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    weather_base_url: String,
    currency_base_url: String,
}

impl HttpUpstream {
    pub fn new(weather_base_url: impl Into<String>, currency_base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            weather_base_url: weather_base_url.into(),
            currency_base_url: currency_base_url.into(),
        }
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, UpstreamError> {
        // Query strings carry API keys: only the base URL is logged and
        // reqwest errors lose their URL on conversion.
        tracing::debug!("Making upstream request to: {}", url);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl UpstreamApi for HttpUpstream {
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.get_json(
            &self.weather_base_url,
            &[("q", city), ("units", "metric"), ("appid", api_key)],
        )
        .await
    }

    async fn latest_rates(&self, api_key: &str) -> Result<serde_json::Value, UpstreamError> {
        self.get_json(
            &self.currency_base_url,
            &[
                ("apikey", api_key),
                ("base_currency", "INR"),
                ("currencies", "USD,EUR"),
            ],
        )
        .await
    }
}
