pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{ConversionOrchestrator, CountryCurrencyResolver};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    Countries {
        filter: Option<String>,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let resolver = CountryCurrencyResolver::new();

    match command {
        AppCommand::Countries { filter } => {
            println!(
                "{}",
                cli::countries::display_countries(&resolver, filter.as_deref())
            );
            Ok(())
        }
        AppCommand::Convert { amount, from, to } => {
            let config = match config_path {
                Some(path) => AppConfig::load_from_path(path)?,
                None => AppConfig::load()?,
            };
            debug!("Loaded config: {config:#?}");

            let from = cli::convert::resolve_selection(&resolver, &from)?;
            let to = cli::convert::resolve_selection(&resolver, &to)?;

            let mut orchestrator = build_orchestrator(&config)?;
            info!(%from, %to, "Converting");
            let outcome =
                cli::convert::run_conversion(&mut orchestrator, &amount, from, to).await;
            println!("{}", outcome.render());
            Ok(())
        }
    }
}

/// Wires the HTTP client and connectivity probe described by `config`.
pub fn build_orchestrator(config: &AppConfig) -> Result<ConversionOrchestrator> {
    let provider = &config.provider;
    let client = providers::GeoApiClient::new(&provider.base_url, provider.timeout())?;
    let probe = providers::TcpProbe::for_base_url(&provider.base_url, provider.timeout())?;

    Ok(ConversionOrchestrator::new(
        Arc::new(client),
        Arc::new(probe),
        config.api_key()?,
    ))
}
