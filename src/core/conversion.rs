//! Conversion request/response types and the client abstraction

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

use super::currency::CurrencyCode;

/// Reason reported for every `status: "fail"` response; the API's own
/// reason is not surfaced.
pub const FAIL_REASON: &str = "request failed";

/// Credential for the conversion API. Never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

impl Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("****")
    }
}

/// Local rejections raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input a value to convert, the result will be shown below")]
    EmptyAmount,
    #[error("You are not connected to the internet")]
    Offline,
    #[error("Not a number: {0:?}")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
}

/// Failures of a single conversion call.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Conversion API reported failure")]
    ApiFailure,
    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode),
    #[error("Request error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub api_key: ApiKey,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: Decimal,
}

impl ConversionRequest {
    pub fn new(
        api_key: ApiKey,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: Decimal,
    ) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self {
            api_key,
            from,
            to,
            amount,
        })
    }

    /// Key of this pair in the API's rate table, e.g. `USD_EUR`.
    pub fn pair_key(&self) -> String {
        format!("{}_{}", self.from, self.to)
    }
}

/// One row of the API's rate table.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    pub target_currency: CurrencyCode,
    pub rate_for_amount: Decimal,
    pub rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionResult {
    Loading,
    Success { converted_amount: Decimal },
    Fail { reason: String },
    Error { cause: String },
}

impl ConversionResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConversionResult::Loading)
    }
}

impl From<Result<RateEntry, ConversionError>> for ConversionResult {
    fn from(outcome: Result<RateEntry, ConversionError>) -> Self {
        match outcome {
            Ok(entry) => ConversionResult::Success {
                converted_amount: entry.rate_for_amount,
            },
            Err(ConversionError::ApiFailure) => ConversionResult::Fail {
                reason: FAIL_REASON.to_string(),
            },
            Err(e) => ConversionResult::Error {
                cause: e.to_string(),
            },
        }
    }
}

#[async_trait]
pub trait ConversionClient: Send + Sync {
    /// Performs exactly one outbound call for `request`.
    async fn fetch_rate(&self, request: &ConversionRequest) -> Result<RateEntry, ConversionError>;

    /// Terminal result for `request`; never `Loading`.
    async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        self.fetch_rate(request).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_request_rejects_non_positive_amounts() {
        let key = ApiKey::new("k");
        assert_eq!(
            ConversionRequest::new(key.clone(), code("USD"), code("EUR"), Decimal::ZERO),
            Err(ValidationError::NonPositiveAmount)
        );
        assert_eq!(
            ConversionRequest::new(key.clone(), code("USD"), code("EUR"), Decimal::NEGATIVE_ONE),
            Err(ValidationError::NonPositiveAmount)
        );

        let same = ConversionRequest::new(key, code("USD"), code("USD"), Decimal::ONE).unwrap();
        assert_eq!(same.pair_key(), "USD_USD");
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
        assert_eq!(key.to_string(), "****");
        assert_eq!(key.expose(), "super-secret");

        let request =
            ConversionRequest::new(key, code("USD"), code("EUR"), Decimal::ONE).unwrap();
        assert!(!format!("{request:?}").contains("super-secret"));
    }

    #[test]
    fn test_outcome_mapping() {
        let entry = RateEntry {
            target_currency: code("EUR"),
            rate_for_amount: Decimal::from_str("92.50").unwrap(),
            rate: None,
        };
        assert_eq!(
            ConversionResult::from(Ok(entry)),
            ConversionResult::Success {
                converted_amount: Decimal::from_str("92.5").unwrap()
            }
        );
        assert_eq!(
            ConversionResult::from(Err(ConversionError::ApiFailure)),
            ConversionResult::Fail {
                reason: FAIL_REASON.to_string()
            }
        );
        assert_eq!(
            ConversionResult::from(Err(ConversionError::Transport("timed out".into()))),
            ConversionResult::Error {
                cause: "Request error: timed out".to_string()
            }
        );
        assert!(!ConversionResult::Loading.is_terminal());
    }
}
