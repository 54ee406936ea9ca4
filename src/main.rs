//! solbatch - Batch SOL Transfer Utility
//!
//! Process entry point: loads configuration and the funding keypair,
//! reports the funding account's balance, then builds and submits one
//! atomic transaction carrying every configured transfer.

use anyhow::{Context, Result};
use clap::Parser;
use solana_sdk::native_token::lamports_to_sol;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solbatch::config::{Config, PAYER_KEY_ENV};
use solbatch::tx_builder::BatchTransferBuilder;
use solbatch::types::TransferRequest;
use solbatch::wallet::WalletManager;
use solbatch::Signature;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    info!("🚀 Starting solbatch batch transfer");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    info!("📋 Loading configuration from: {}", args.config);
    let config = load_config(&args.config)?;

    let wallet = load_wallet(&config)?;
    info!("💼 Funding account: {}", wallet.pubkey());

    let requests = config.transfer_requests()?;
    if requests.is_empty() {
        warn!("No recipients configured; the cluster will reject an empty batch");
    }
    info!("📦 Recipients ({}):", requests.len());
    for request in &requests {
        info!("   {} ({} SOL)", request.recipient, request.amount_sol);
    }

    let builder = BatchTransferBuilder::new_with_timeout(
        config.rpc.endpoint.clone(),
        Duration::from_secs(config.rpc.timeout_secs),
        config.rpc.commitment_config()?,
        wallet,
    );
    info!("🌐 RPC endpoint: {}", config.rpc.endpoint);

    match run_batch(&builder, &requests).await {
        Ok(signature) => {
            info!("✅ Transaction successful");
            info!("Signature: {}", signature);
            Ok(())
        }
        Err(e) => {
            error!(category = e.category(), "❌ Batch transfer failed: {}", e);
            Err(e.into())
        }
    }
}

/// Build, preflight, and submit the configured batch
async fn run_batch(
    builder: &BatchTransferBuilder,
    requests: &[TransferRequest],
) -> solbatch::BatchTransferResult<Signature> {
    let balance_before = builder.payer_balance().await?;
    info!("💰 Current balance: {} SOL", lamports_to_sol(balance_before));

    let draft = builder.build_draft(requests).await?;
    info!(
        "🧱 Constructed batch transaction with {} transfers ({} SOL total)",
        draft.instruction_count(),
        draft.total_sol(),
    );

    // Transfers only; the cluster charges its fee on top
    builder.check_balance_sufficient(draft.total_lamports()).await?;

    let signature = builder.submit(draft).await?;

    let balance_after = builder.payer_balance().await?;
    info!("💰 Final balance: {} SOL", lamports_to_sol(balance_after));

    Ok(signature)
}

/// Initialize logging subsystem
fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        "solbatch=debug,info"
    } else {
        "solbatch=info,warn,error"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    Ok(())
}

/// Load configuration from file with fallback to defaults
fn load_config(path: &str) -> Result<Config> {
    if std::path::Path::new(path).exists() {
        Config::from_file_with_env(path)
            .with_context(|| format!("Failed to load config from {}", path))
    } else {
        warn!("Config file '{}' not found, using defaults", path);
        Ok(Config::default())
    }
}

/// Load the funding wallet: environment key wins over keypair file
fn load_wallet(config: &Config) -> Result<WalletManager> {
    if std::env::var(PAYER_KEY_ENV).is_ok() {
        info!("🔑 Loading funding key from {}", PAYER_KEY_ENV);
        return WalletManager::from_env(PAYER_KEY_ENV).context("Failed to load wallet from env");
    }

    let path = config.wallet.keypair_path.as_deref().with_context(|| {
        format!(
            "No funding key configured: set {} or wallet.keypair_path",
            PAYER_KEY_ENV
        )
    })?;
    info!("🔑 Loading funding key from: {}", path);
    WalletManager::from_file(path).context("Failed to load wallet")
}
