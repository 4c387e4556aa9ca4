use thiserror::Error;

/// Failure of a single outbound call to an upstream provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Holds reqwest errors with the request URL removed, since query
    /// strings carry API keys.
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Upstream responded with status {status}")]
    Status { status: u16 },

    #[error("Malformed upstream payload: {message}")]
    MalformedPayload { message: String },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl UpstreamError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("Server configuration error: {message}")]
    Configuration { message: String },

    #[error("{message}")]
    Upstream {
        message: String,
        #[source]
        source: UpstreamError,
    },

    #[error("{message}")]
    Internal { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl HubError {
    /// HTTP status the error maps to when it reaches a client.
    pub fn status_code(&self) -> u16 {
        match self {
            HubError::InvalidInput { .. } => 400,
            _ => 500,
        }
    }

    /// Message safe to hand to a client. Upstream detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            HubError::InvalidInput { message }
            | HubError::Upstream { message, .. }
            | HubError::Internal { message } => message.clone(),
            HubError::Configuration { .. } => self.to_string(),
            HubError::InvalidConfigValue { .. }
            | HubError::Io(_)
            | HubError::Toml(_)
            | HubError::Regex(_) => {
                "Internal server error.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_is_prefixed() {
        let err = HubError::Configuration {
            message: "Currency API Key is missing.".to_string(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.client_message(),
            "Server configuration error: Currency API Key is missing."
        );
    }

    #[test]
    fn test_upstream_detail_not_in_client_message() {
        let err = HubError::Upstream {
            message: "Failed to fetch currency rates.".to_string(),
            source: UpstreamError::Status { status: 401 },
        };
        assert_eq!(err.client_message(), "Failed to fetch currency rates.");
        assert!(!err.client_message().contains("401"));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = HubError::InvalidInput {
            message: "bad amount".to_string(),
        };
        assert_eq!(err.status_code(), 400);
    }
}
