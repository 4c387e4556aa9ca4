use crate::utils::error::UpstreamError;
use async_trait::async_trait;

/// Outbound calls to the third-party providers, one method per upstream.
///
/// Payloads are returned as untyped JSON; the services pick out only the
/// fields they consume.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Current conditions for `city` in metric units.
    async fn current_weather(
        &self,
        city: &str,
        api_key: &str,
    ) -> std::result::Result<serde_json::Value, UpstreamError>;

    /// Latest rate table for USD and EUR against an INR base.
    async fn latest_rates(
        &self,
        api_key: &str,
    ) -> std::result::Result<serde_json::Value, UpstreamError>;
}

pub trait ConfigProvider: Send + Sync {
    fn weather_api_key(&self) -> Option<&str>;
    fn city(&self) -> Option<&str>;
    fn currency_api_key(&self) -> Option<&str>;
}
