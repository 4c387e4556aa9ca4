use crate::core::format::round_half_up;
use crate::domain::model::WeatherReport;
use crate::domain::ports::{ConfigProvider, UpstreamApi};
use crate::utils::error::{HubError, Result, UpstreamError};
use serde_json::Value;

pub struct WeatherService<'a> {
    config: &'a dyn ConfigProvider,
    upstream: &'a dyn UpstreamApi,
}

impl<'a> WeatherService<'a> {
    pub fn new(config: &'a dyn ConfigProvider, upstream: &'a dyn UpstreamApi) -> Self {
        Self { config, upstream }
    }

    /// Current conditions for the configured city.
    ///
    /// Fails with a configuration error before any upstream call when the
    /// API key or the city is missing.
    pub async fn report(&self) -> Result<WeatherReport> {
        let (Some(api_key), Some(city)) = (self.config.weather_api_key(), self.config.city())
        else {
            tracing::warn!("Weather request rejected: API key or city not configured");
            return Err(HubError::Configuration {
                message: "Weather API Key or City is missing.".to_string(),
            });
        };

        tracing::debug!(city = %city, "Fetching current weather");

        let payload = self.upstream.current_weather(city, api_key).await;
        payload
            .and_then(|payload| parse_report(&payload))
            .map_err(|source| {
                tracing::error!(city = %city, error = %source, "Weather API error");
                HubError::Upstream {
                    message: format!(
                        "Failed to fetch weather data for {}. Check API key and city spelling.",
                        city
                    ),
                    source,
                }
            })
    }
}

fn parse_report(payload: &Value) -> std::result::Result<WeatherReport, UpstreamError> {
    let city = string_at(payload, "/name")?;
    let temp = payload
        .pointer("/main/temp")
        .and_then(Value::as_f64)
        .ok_or_else(|| UpstreamError::malformed("missing numeric 'main.temp'"))?;
    let condition = string_at(payload, "/weather/0/description")?;
    let icon = string_at(payload, "/weather/0/icon")?;

    Ok(WeatherReport {
        city,
        temperature_celsius: format!("{}°C", round_half_up(temp) as i64),
        condition,
        icon_code: icon,
    })
}

fn string_at(payload: &Value, pointer: &str) -> std::result::Result<String, UpstreamError> {
    payload
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| UpstreamError::malformed(format!("missing string at '{}'", pointer)))
}
