pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    present, validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::path::PathBuf;
use toml_config::FileConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_CURRENCY_BASE_URL: &str = "https://api.freecurrencyapi.com/v1/latest";

/// Process-wide settings, built once at startup and shared read-only with
/// every handler.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "api-hub")]
#[command(about = "Weather, currency and quote APIs behind one REST façade")]
pub struct HubConfig {
    /// OpenWeatherMap API key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: Option<String>,

    /// City whose weather is reported
    #[arg(long, env = "HARDCODED_CITY")]
    pub city: Option<String>,

    /// Currency rate provider API key
    #[arg(long, env = "CURRENCY_API_KEY", hide_env_values = true)]
    pub currency_api_key: Option<String>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 5000]
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Weather endpoint URL
    #[arg(long, env = "WEATHER_BASE_URL")]
    pub weather_base_url: Option<String>,

    /// Exchange rate endpoint URL
    #[arg(long, env = "CURRENCY_BASE_URL")]
    pub currency_base_url: Option<String>,

    /// Comma-separated CORS origins, or "*" [default: any origin]
    #[arg(long, env = "CORS_ALLOWED_ORIGINS")]
    pub cors_allowed_origins: Option<String>,

    /// TOML file supplying settings not given as flags or env vars
    #[arg(short, long, env = "API_HUB_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl HubConfig {
    /// Fills every setting still unset from `file`.
    pub fn merge_file(&mut self, file: FileConfig) {
        let server = file.server.unwrap_or_default();
        let weather = file.weather.unwrap_or_default();
        let currency = file.currency.unwrap_or_default();

        fill(&mut self.host, server.host);
        fill(&mut self.port, server.port);
        fill(&mut self.cors_allowed_origins, server.cors_allowed_origins);
        fill(&mut self.weather_api_key, weather.api_key);
        fill(&mut self.city, weather.city);
        fill(&mut self.weather_base_url, weather.base_url);
        fill(&mut self.currency_api_key, currency.api_key);
        fill(&mut self.currency_base_url, currency.base_url);
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn weather_base_url(&self) -> &str {
        self.weather_base_url
            .as_deref()
            .unwrap_or(DEFAULT_WEATHER_BASE_URL)
    }

    pub fn currency_base_url(&self) -> &str {
        self.currency_base_url
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_BASE_URL)
    }

    pub fn cors_allowed_origins(&self) -> Option<&str> {
        present(&self.cors_allowed_origins)
    }

    /// Missing credentials only disable their endpoint, so they are reported
    /// here instead of failing validation.
    pub fn warn_missing_credentials(&self) {
        if self.weather_api_key().is_none() || self.city().is_none() {
            tracing::warn!("WEATHER_API_KEY or HARDCODED_CITY not set; /api/weather will fail");
        }
        if self.currency_api_key().is_none() {
            tracing::warn!("CURRENCY_API_KEY not set; /api/convert will fail");
        }
    }
}

fn fill<T>(slot: &mut Option<T>, fallback: Option<T>) {
    if slot.is_none() {
        *slot = fallback;
    }
}

impl Validate for HubConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", self.host())?;
        validate_positive_number("port", usize::from(self.port()), 1)?;
        validate_url("weather_base_url", self.weather_base_url())?;
        validate_url("currency_base_url", self.currency_base_url())?;
        Ok(())
    }
}

impl ConfigProvider for HubConfig {
    fn weather_api_key(&self) -> Option<&str> {
        present(&self.weather_api_key)
    }

    fn city(&self) -> Option<&str> {
        present(&self.city)
    }

    fn currency_api_key(&self) -> Option<&str> {
        present(&self.currency_api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.port(), 5000);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.weather_base_url(), DEFAULT_WEATHER_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_parse() {
        let config = HubConfig::try_parse_from([
            "api-hub",
            "--city",
            "Hyderabad",
            "--weather-api-key",
            "k1",
            "--port",
            "8081",
        ])
        .unwrap();

        assert_eq!(config.city(), Some("Hyderabad"));
        assert_eq!(config.weather_api_key(), Some("k1"));
        assert_eq!(config.port(), 8081);
    }

    #[test]
    fn test_blank_credentials_are_absent() {
        let config = HubConfig {
            weather_api_key: Some(String::new()),
            city: Some("  ".to_string()),
            currency_api_key: Some("key".to_string()),
            ..Default::default()
        };

        assert_eq!(config.weather_api_key(), None);
        assert_eq!(config.city(), None);
        assert_eq!(config.currency_api_key(), Some("key"));
    }

    #[test]
    fn test_merge_file_keeps_explicit_values() {
        let mut config = HubConfig {
            city: Some("Mumbai".to_string()),
            ..Default::default()
        };
        let file = FileConfig::from_toml_str(
            r#"
[server]
port = 7000

[weather]
city = "Hyderabad"
api_key = "file-key"
"#,
        )
        .unwrap();

        config.merge_file(file);

        assert_eq!(config.city(), Some("Mumbai"));
        assert_eq!(config.weather_api_key(), Some("file-key"));
        assert_eq!(config.port(), 7000);
        assert_eq!(config.currency_api_key(), None);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = HubConfig {
            port: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = HubConfig {
            currency_base_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
