use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    #[serde(rename = "temperature")]
    pub temperature_celsius: String,
    pub condition: String,
    #[serde(rename = "icon")]
    pub icon_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    #[serde(rename = "converted_amount_inr")]
    pub amount_inr: String,
    #[serde(rename = "converted_to_usd")]
    pub amount_usd: String,
    #[serde(rename = "converted_to_eur")]
    pub amount_eur: String,
    #[serde(rename = "base_rate_usd_to_inr")]
    pub usd_to_inr_rate: String,
}

/// Success wrapper shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}
