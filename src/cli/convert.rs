use super::ui;
use crate::core::{
    ConversionOrchestrator, ConversionResult, CountryCurrencyResolver, CurrencyCode,
    ValidationError,
};
use anyhow::{Result, bail};
use tracing::{debug, warn};

/// Message shown for every failed conversion, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong, try again";

/// What the user ends up seeing for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    Converted(String),
    Rejected(ValidationError),
    Failed,
    Superseded,
}

impl ConvertOutcome {
    pub fn render(&self) -> String {
        match self {
            ConvertOutcome::Converted(line) => ui::style_text(line, ui::StyleType::Result),
            ConvertOutcome::Rejected(e) => ui::style_text(&e.to_string(), ui::StyleType::Error),
            ConvertOutcome::Failed => ui::style_text(FAILURE_MESSAGE, ui::StyleType::Error),
            ConvertOutcome::Superseded => {
                ui::style_text("Conversion was superseded", ui::StyleType::Subtle)
            }
        }
    }
}

/// Resolves a currency code or country name, refusing selections that have
/// no circulating currency.
pub fn resolve_selection(resolver: &CountryCurrencyResolver, input: &str) -> Result<CurrencyCode> {
    match resolver.resolve_currency(input) {
        Some(code) => Ok(code),
        None => match resolver.country_code_for(input.trim()) {
            Some(country) => bail!("{input} ({country}) has no currency to convert"),
            None => bail!("Unknown country or currency: {input}"),
        },
    }
}

pub async fn run_conversion(
    orchestrator: &mut ConversionOrchestrator,
    amount_text: &str,
    from: CurrencyCode,
    to: CurrencyCode,
) -> ConvertOutcome {
    let pending = match orchestrator.convert(amount_text, from, to).await {
        Ok(pending) => pending,
        Err(e) => {
            debug!(error = %e, "Conversion rejected");
            return ConvertOutcome::Rejected(e);
        }
    };

    let spinner = ui::new_spinner(&format!("Converting {from} to {to}..."));
    let outcome = pending.outcome().await;
    spinner.finish_and_clear();

    match outcome {
        Some(ConversionResult::Success { converted_amount }) => {
            let amount = orchestrator
                .converted_amount()
                .unwrap_or(converted_amount);
            ConvertOutcome::Converted(format!(
                "{} {from} = {} {to}",
                amount_text.trim(),
                ui::format_amount(amount)
            ))
        }
        Some(ConversionResult::Fail { reason }) => {
            warn!(reason = %reason, "Conversion API reported failure");
            ConvertOutcome::Failed
        }
        Some(ConversionResult::Error { cause }) => {
            warn!(cause = %cause, "Conversion request failed");
            ConvertOutcome::Failed
        }
        Some(ConversionResult::Loading) | None => ConvertOutcome::Superseded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_selection() {
        let resolver = CountryCurrencyResolver::new();
        assert_eq!(
            resolve_selection(&resolver, "United Kingdom").unwrap().as_str(),
            "GBP"
        );
        assert_eq!(resolve_selection(&resolver, "chf").unwrap().as_str(), "CHF");

        let err = resolve_selection(&resolver, "Antarctica").unwrap_err();
        assert_eq!(err.to_string(), "Antarctica (AQ) has no currency to convert");

        let err = resolve_selection(&resolver, "Narnia").unwrap_err();
        assert_eq!(err.to_string(), "Unknown country or currency: Narnia");
    }

    #[test]
    fn test_render_uses_generic_failure_message() {
        let rendered = ConvertOutcome::Failed.render();
        assert!(rendered.contains(FAILURE_MESSAGE));

        let rendered = ConvertOutcome::Rejected(ValidationError::Offline).render();
        assert!(rendered.contains("You are not connected to the internet"));
    }
}
