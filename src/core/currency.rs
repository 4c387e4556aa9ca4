use crate::core::format::to_fixed;
use crate::domain::model::ConversionResult;
use crate::domain::ports::{ConfigProvider, UpstreamApi};
use crate::utils::error::{HubError, Result, UpstreamError};
use serde_json::Value;

const UPSTREAM_FAILURE: &str =
    "Failed to fetch currency rates. Check API key and external service status.";

/// Parses the `amount` query value.
///
/// Anything that is not a finite decimal number is rejected. Negative
/// amounts pass through. The whole string must parse, so `"100abc"` is a
/// 400 rather than being read as `100` the way a prefix parser would.
pub fn parse_amount(raw: Option<&str>) -> Result<f64> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or_else(|| HubError::InvalidInput {
            message: "Invalid or missing \"amount\" query parameter.".to_string(),
        })
}

/// USD-relative rates pulled out of the upstream table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub inr_per_usd: f64,
    pub eur_per_usd: f64,
}

impl Rates {
    /// Reads `conversion_rates.INR` and `conversion_rates.EUR`. A missing,
    /// non-numeric or zero rate makes the table unusable.
    pub fn from_payload(payload: &Value) -> std::result::Result<Self, UpstreamError> {
        let table = payload
            .get("conversion_rates")
            .and_then(Value::as_object)
            .ok_or_else(|| UpstreamError::malformed("missing 'conversion_rates' table"))?;

        let rate = |code: &str| {
            table
                .get(code)
                .and_then(Value::as_f64)
                .filter(|r| *r != 0.0)
        };

        match (rate("INR"), rate("EUR")) {
            (Some(inr_per_usd), Some(eur_per_usd)) => Ok(Self {
                inr_per_usd,
                eur_per_usd,
            }),
            _ => Err(UpstreamError::malformed(
                "Missing rate data (INR or EUR) from external API.",
            )),
        }
    }

    pub fn convert(&self, amount_inr: f64) -> ConversionResult {
        let usd_per_inr = 1.0 / self.inr_per_usd;
        let eur_per_inr = self.eur_per_usd / self.inr_per_usd;

        ConversionResult {
            amount_inr: to_fixed(amount_inr, 2),
            amount_usd: to_fixed(amount_inr * usd_per_inr, 2),
            amount_eur: to_fixed(amount_inr * eur_per_inr, 2),
            usd_to_inr_rate: to_fixed(self.inr_per_usd, 4),
        }
    }
}

pub struct ConversionService<'a> {
    config: &'a dyn ConfigProvider,
    upstream: &'a dyn UpstreamApi,
}

impl<'a> ConversionService<'a> {
    pub fn new(config: &'a dyn ConfigProvider, upstream: &'a dyn UpstreamApi) -> Self {
        Self { config, upstream }
    }

    /// Converts the raw `amount` (INR) into USD and EUR.
    ///
    /// Input is validated first, then the API key; the upstream is only
    /// called once both pass.
    pub async fn convert(&self, raw_amount: Option<&str>) -> Result<ConversionResult> {
        let amount = parse_amount(raw_amount)?;

        let Some(api_key) = self.config.currency_api_key() else {
            tracing::warn!("Conversion request rejected: currency API key not configured");
            return Err(HubError::Configuration {
                message: "Currency API Key is missing.".to_string(),
            });
        };

        tracing::debug!(amount, "Fetching exchange rates");

        let payload = self.upstream.latest_rates(api_key).await;
        let rates = payload
            .and_then(|payload| Rates::from_payload(&payload))
            .map_err(|source| {
                tracing::error!(amount, error = %source, "Currency API error");
                HubError::Upstream {
                    message: UPSTREAM_FAILURE.to_string(),
                    source,
                }
            })?;

        Ok(rates.convert(amount))
    }
}
