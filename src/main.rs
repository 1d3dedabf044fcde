use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::core::ApiKey;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup {
        /// API key to store in the new configuration
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Amount in the source currency
        amount: String,
        /// Source country name or currency code
        #[arg(short, long)]
        from: String,
        /// Target country name or currency code
        #[arg(short, long)]
        to: String,
    },
    /// List countries with their currency codes
    Countries {
        /// Only show countries matching this text
        #[arg(long)]
        filter: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup { api_key }) => fxconv::cli::setup::setup(api_key.map(ApiKey::new)),
        Some(Commands::Convert { amount, from, to }) => {
            fxconv::run_command(
                fxconv::AppCommand::Convert { amount, from, to },
                cli.config_path.as_deref(),
            )
            .await
        }
        Some(Commands::Countries { filter }) => {
            fxconv::run_command(
                fxconv::AppCommand::Countries { filter },
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
