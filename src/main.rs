use analytics::AnalyticsEngine;
use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{TradeOrdering, init_tracing, load_config};
use core_types::{TradeRecord, parse_trades};
use std::path::PathBuf;

mod render;

/// The main entry point for the tradelog application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging).context("Failed to initialise logging")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, config.analytics).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance analytics for a trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute performance metrics for a JSON export of closed trades.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// JSON file holding an array of trades, or `{ "count": n, "trades": [...] }`.
    #[arg(long, short)]
    input: PathBuf,

    /// Only analyze trades booked on this account.
    #[arg(long)]
    account: Option<String>,

    /// Only analyze trades taken on or after this date (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Only analyze trades taken on or before this date (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Override the configured ordering of the history.
    #[arg(long, value_enum)]
    ordering: Option<TradeOrdering>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

async fn handle_analyze(
    args: AnalyzeArgs,
    mut settings: configuration::AnalyticsSettings,
) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let batch = parse_trades(&raw)
        .with_context(|| format!("Failed to parse trades from {}", args.input.display()))?;

    let loaded = batch.trades.len();
    let trades = filter_trades(batch.trades, &args);
    tracing::info!(
        loaded,
        selected = trades.len(),
        input = %args.input.display(),
        "Trade history loaded."
    );

    if let Some(ordering) = args.ordering {
        settings.ordering = ordering;
    }
    let engine = AnalyticsEngine::new(settings);

    // The engine is synchronous; keep it off the async worker threads.
    let metrics = tokio::task::spawn_blocking(move || engine.calculate(&trades))
        .await
        .context("Analytics task failed")??;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
        OutputFormat::Table => render::print_report(&metrics),
    }

    Ok(())
}

/// Applies the account and date-range filters, preserving the input order.
fn filter_trades(trades: Vec<TradeRecord>, args: &AnalyzeArgs) -> Vec<TradeRecord> {
    trades
        .into_iter()
        .filter(|t| {
            args.account
                .as_ref()
                .is_none_or(|account| &t.entry.account_id == account)
        })
        .filter(|t| args.from.is_none_or(|from| t.entry.date >= from))
        .filter(|t| args.to.is_none_or(|to| t.entry.date <= to))
        .collect()
}
