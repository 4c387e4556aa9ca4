use crate::utils::error::{HubError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file layer underneath flags and environment variables.
///
/// ```toml
/// [server]
/// port = 5000
///
/// [weather]
/// api_key = "${WEATHER_API_KEY}"
/// city = "Hyderabad"
///
/// [currency]
/// api_key = "${CURRENCY_API_KEY}"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
    pub weather: Option<WeatherSection>,
    pub currency: Option<CurrencySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_allowed_origins: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSection {
    pub api_key: Option<String>,
    pub city: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencySection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HubError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of environment variable `VAR`.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080
cors_allowed_origins = "http://localhost:5173"

[weather]
api_key = "weather-key"
city = "Hyderabad"

[currency]
api_key = "currency-key"
base_url = "https://rates.example.com/latest"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        let server = config.server.unwrap();
        assert_eq!(server.port, Some(8080));
        assert_eq!(server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.weather.unwrap().city.as_deref(), Some("Hyderabad"));
        assert_eq!(
            config.currency.unwrap().base_url.as_deref(),
            Some("https://rates.example.com/latest")
        );
    }

    #[test]
    fn test_sections_are_optional() {
        let config = FileConfig::from_toml_str("[weather]\ncity = \"Pune\"\n").unwrap();
        assert!(config.server.is_none());
        assert!(config.currency.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("API_HUB_TEST_WEATHER_KEY", "from-env");

        let toml_content = r#"
[weather]
api_key = "${API_HUB_TEST_WEATHER_KEY}"
city = "${API_HUB_TEST_UNSET_CITY}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        let weather = config.weather.unwrap();
        assert_eq!(weather.api_key.as_deref(), Some("from-env"));
        assert_eq!(weather.city.as_deref(), Some("${API_HUB_TEST_UNSET_CITY}"));

        std::env::remove_var("API_HUB_TEST_WEATHER_KEY");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = FileConfig::from_toml_str("[server]\nport = \"not a number\"\n").unwrap_err();
        assert!(matches!(err, HubError::Toml(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 6000\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().port, Some(6000));
    }
}
