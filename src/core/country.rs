//! Country to currency resolution over the static region table.

use std::str::FromStr;

use super::currency::CurrencyCode;
use super::regions::{REGIONS, Region};

/// Pure lookups from country display names to region and currency codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryCurrencyResolver;

impl CountryCurrencyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Every region in table order.
    pub fn regions(&self) -> &'static [Region] {
        REGIONS
    }

    /// Distinct, non-blank display names sorted ascending.
    pub fn list_countries(&self) -> Vec<&'static str> {
        let mut countries: Vec<&'static str> = REGIONS
            .iter()
            .map(|r| r.name)
            .filter(|name| !name.trim().is_empty())
            .collect();
        countries.sort_unstable();
        countries.dedup();
        countries
    }

    /// First region code whose display name equals `name` exactly.
    pub fn country_code_for(&self, name: &str) -> Option<&'static str> {
        REGIONS.iter().find(|r| r.name == name).map(|r| r.code)
    }

    /// Currency code for a region, or `""` when the region is missing,
    /// unknown, or has no circulating currency.
    pub fn currency_code_for(&self, country_code: Option<&str>) -> &'static str {
        country_code
            .and_then(|code| REGIONS.iter().find(|r| r.code == code))
            .and_then(|r| r.currency)
            .unwrap_or("")
    }

    pub fn currency_for(&self, country_code: Option<&str>) -> Option<CurrencyCode> {
        CurrencyCode::from_str(self.currency_code_for(country_code)).ok()
    }

    /// Accepts either a currency code ("EUR") or a country display name
    /// ("Germany") and returns the currency it stands for.
    pub fn resolve_currency(&self, input: &str) -> Option<CurrencyCode> {
        if let Ok(code) = CurrencyCode::from_str(input) {
            return Some(code);
        }
        self.currency_for(self.country_code_for(input.trim()))
    }
}
