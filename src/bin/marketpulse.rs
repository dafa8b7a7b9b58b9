//! MarketPulse CLI - one-shot sentiment queries from the terminal.
//!
//! Uses the same configuration and headline sources as the server. Logs go to
//! stderr; results are printed to stdout as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use marketpulse::application::AnalysisService;
use marketpulse::application::sentiment::{label, round_score, score};
use marketpulse::config::Config;
use marketpulse::infrastructure::SourceFactory;
use marketpulse::infrastructure::observability::Metrics;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Headline sentiment for stock tickers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, score and aggregate headlines for a ticker
    Analyze {
        /// Stock symbol, 1-5 letters
        ticker: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// List the unscored headlines for a ticker
    Headlines {
        /// Stock symbol, 1-5 letters
        ticker: String,
    },
    /// Score a single piece of text with the lexicon
    Score {
        /// Text to score
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { ticker, pretty } => {
            let service = build_service()?;
            let result = service.analyze(&ticker).await?;
            let output = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", output);
        }
        Commands::Headlines { ticker } => {
            let service = build_service()?;
            let headlines = service.headlines(&ticker).await?;
            println!("{}", serde_json::to_string_pretty(&headlines)?);
        }
        Commands::Score { text } => {
            let value = round_score(score(&text));
            let output = json!({
                "text": text,
                "score": value,
                "label": label(value),
            });
            println!("{}", output);
        }
    }

    Ok(())
}

fn build_service() -> Result<AnalysisService> {
    let config = Config::from_env()?;
    let metrics = Metrics::new().context("Failed to register metrics")?;
    let sources = SourceFactory::create_sources(&config.news)?;
    Ok(AnalysisService::from_config(sources, &config.cache, metrics))
}
