//! Currency code type

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

use super::regions::REGIONS;

/// An ISO 4217 code used by at least one region in the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(&'static str);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyCodeError {
    #[error("Currency code must be three letters, got: {0:?}")]
    Malformed(String),
    #[error("Unknown currency code: {0}")]
    Unknown(String),
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::Malformed(s.to_string()));
        }

        REGIONS
            .iter()
            .filter_map(|r| r.currency)
            .find(|c| *c == code)
            .map(CurrencyCode)
            .ok_or(CurrencyCodeError::Unknown(code))
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let code: CurrencyCode = "usd".parse().unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code.to_string(), "USD");

        let code: CurrencyCode = " eur ".parse().unwrap();
        assert_eq!(code.as_str(), "EUR");
    }

    #[test]
    fn test_parse_rejects_malformed_codes() {
        assert_eq!(
            "".parse::<CurrencyCode>(),
            Err(CurrencyCodeError::Malformed(String::new()))
        );
        assert!(matches!(
            "US".parse::<CurrencyCode>(),
            Err(CurrencyCodeError::Malformed(_))
        ));
        assert!(matches!(
            "U5D".parse::<CurrencyCode>(),
            Err(CurrencyCodeError::Malformed(_))
        ));
        assert!(matches!(
            "USDT".parse::<CurrencyCode>(),
            Err(CurrencyCodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_codes_not_in_circulation() {
        assert_eq!(
            "ABC".parse::<CurrencyCode>(),
            Err(CurrencyCodeError::Unknown("ABC".to_string()))
        );
    }

    #[test]
    fn test_serde_as_plain_string() {
        let code: CurrencyCode = "GBP".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""GBP""#);
        let back: CurrencyCode = serde_json::from_str(r#""gbp""#).unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<CurrencyCode>(r#""XYZ""#).is_err());
    }
}
