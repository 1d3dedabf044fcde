use async_trait::async_trait;
use reqwest::Url;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::core::conversion::{ConversionClient, ConversionError, ConversionRequest, RateEntry};

const CONVERT_PATH: &str = "/v2/currency/convert";

/// Conversion client for the GeoAPI currency endpoint.
pub struct GeoApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl GeoApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("fxconv/0.1")
            .timeout(timeout)
            .build()?;
        Ok(GeoApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn convert_url(&self, request: &ConversionRequest) -> Result<Url, ConversionError> {
        let amount = request.amount.normalize().to_string();
        Url::parse_with_params(
            &format!("{}{}", self.base_url, CONVERT_PATH),
            [
                ("access_key", request.api_key.expose()),
                ("from", request.from.as_str()),
                ("to", request.to.as_str()),
                ("amount", amount.as_str()),
                ("format", "json"),
            ],
        )
        .map_err(|e| ConversionError::Transport(format!("Invalid base URL {}: {e}", self.base_url)))
    }
}

#[derive(Debug, Deserialize)]
struct ConvertResponse {
    status: String,
    #[serde(default)]
    rates: HashMap<String, RawRate>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawRate {
    rate_for_amount: Decimal,
    #[serde(default)]
    rate: Option<Decimal>,
}

fn parse_response(body: &str, request: &ConversionRequest) -> Result<RateEntry, ConversionError> {
    let data: ConvertResponse = serde_json::from_str(body).map_err(|e| {
        ConversionError::MalformedResponse(format!(
            "Failed to parse JSON response for {}: {e}",
            request.pair_key()
        ))
    })?;

    match data.status.as_str() {
        "success" => {}
        "fail" => {
            debug!(reason = ?data.error, "Conversion API returned fail");
            return Err(ConversionError::ApiFailure);
        }
        other => {
            return Err(ConversionError::MalformedResponse(format!(
                "Unexpected status: {other}"
            )));
        }
    }

    let mut rates = data.rates;
    let raw = match rates.remove(&request.pair_key()) {
        Some(raw) => raw,
        None => match rates.remove(request.to.as_str()) {
            Some(raw) => raw,
            None if rates.len() == 1 => rates.into_values().next().ok_or_else(|| {
                ConversionError::MalformedResponse("Empty rate table".to_string())
            })?,
            None => {
                return Err(ConversionError::MalformedResponse(format!(
                    "No rate data found for currency pair: {}",
                    request.pair_key()
                )));
            }
        },
    };

    Ok(RateEntry {
        target_currency: request.to,
        rate_for_amount: raw.rate_for_amount,
        rate: raw.rate,
    })
}

#[async_trait]
impl ConversionClient for GeoApiClient {
    #[instrument(
        name = "GeoApiConvert",
        skip(self, request),
        fields(from = %request.from, to = %request.to, amount = %request.amount)
    )]
    async fn fetch_rate(&self, request: &ConversionRequest) -> Result<RateEntry, ConversionError> {
        let url = self.convert_url(request)?;
        debug!("Requesting conversion from {}{}", self.base_url, CONVERT_PATH);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ConversionError::Transport(e.without_url().to_string()))?;

        if !response.status().is_success() {
            return Err(ConversionError::Http(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ConversionError::Transport(e.without_url().to_string()))?;

        parse_response(&text, request).inspect_err(|e| {
            if let ConversionError::MalformedResponse(_) = e {
                error!(error = %e, response = %text, "Failed to parse conversion response");
            }
        })
    }
}
