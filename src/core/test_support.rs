use crate::domain::ports::{ConfigProvider, UpstreamApi};
use crate::utils::error::UpstreamError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned upstream with per-endpoint call counters.
#[derive(Default)]
pub struct FakeUpstream {
    weather: Option<serde_json::Value>,
    rates: Option<serde_json::Value>,
    pub weather_calls: AtomicUsize,
    pub rates_calls: AtomicUsize,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, payload: serde_json::Value) -> Self {
        self.weather = Some(payload);
        self
    }

    pub fn with_rates(mut self, payload: serde_json::Value) -> Self {
        self.rates = Some(payload);
        self
    }

    pub fn weather_calls(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }

    pub fn rates_calls(&self) -> usize {
        self.rates_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamApi for FakeUpstream {
    async fn current_weather(
        &self,
        _city: &str,
        _api_key: &str,
    ) -> Result<serde_json::Value, UpstreamError> {
        self.weather_calls.fetch_add(1, Ordering::SeqCst);
        self.weather
            .clone()
            .ok_or(UpstreamError::Status { status: 503 })
    }

    async fn latest_rates(&self, _api_key: &str) -> Result<serde_json::Value, UpstreamError> {
        self.rates_calls.fetch_add(1, Ordering::SeqCst);
        self.rates.clone().ok_or(UpstreamError::Status { status: 503 })
    }
}

#[derive(Default)]
pub struct FakeConfig {
    pub weather_api_key: Option<String>,
    pub city: Option<String>,
    pub currency_api_key: Option<String>,
}

impl FakeConfig {
    pub fn complete() -> Self {
        Self {
            weather_api_key: Some("weather-key".to_string()),
            city: Some("Hyderabad".to_string()),
            currency_api_key: Some("currency-key".to_string()),
        }
    }
}

impl ConfigProvider for FakeConfig {
    fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn currency_api_key(&self) -> Option<&str> {
        self.currency_api_key.as_deref()
    }
}
