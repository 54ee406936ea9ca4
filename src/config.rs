//! Configuration module for the batch transfer utility
//!
//! This module handles all configuration loading from TOML files and
//! environment variables. The funding key and recipient list are external
//! configuration, never source literals: the secret key comes from a
//! keypair file or the `SOLBATCH_PAYER_KEY` environment variable.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::types::TransferRequest;
use crate::tx_builder::errors::BatchTransferError;

/// Environment variable holding a base58-encoded funding secret key.
/// Takes precedence over `wallet.keypair_path` when set.
pub const PAYER_KEY_ENV: &str = "SOLBATCH_PAYER_KEY";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint configuration
    pub rpc: RpcConfig,

    /// Wallet configuration
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Batch transfer configuration
    pub transfer: TransferConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// RPC endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_rpc_timeout")]
    pub timeout_secs: u64,

    /// Commitment level to wait for: "processed", "confirmed" or "finalized"
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Path to keypair file (raw 64 bytes or solana-keygen JSON array).
    /// Ignored when the key environment variable is set.
    #[serde(default)]
    pub keypair_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Ordered list of recipients; instruction order follows this order
    pub recipients: Vec<RecipientEntry>,
}

/// One raw recipient entry as written in the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientEntry {
    /// Recipient account address (base58)
    pub address: String,

    /// Amount to send in SOL
    pub amount_sol: f64,
}

// Default value functions
fn default_endpoint() -> String {
    "https://api.devnet.solana.com".to_string()
}
fn default_rpc_timeout() -> u64 {
    30
}
fn default_commitment() -> String {
    "confirmed".to_string()
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variables from a `.env` file
    pub fn from_file_with_env(path: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_file(path)
    }

    /// Convert the raw recipient entries into validated transfer requests
    ///
    /// Fails fast on the first syntactically invalid address or
    /// non-positive amount, before any network round-trip.
    pub fn transfer_requests(&self) -> Result<Vec<TransferRequest>, BatchTransferError> {
        self.transfer
            .recipients
            .iter()
            .map(|entry| TransferRequest::parse(&entry.address, entry.amount_sol))
            .collect()
    }
}

impl RpcConfig {
    /// Parse the configured commitment level
    pub fn commitment_config(&self) -> anyhow::Result<CommitmentConfig> {
        match self.commitment.as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => anyhow::bail!("Unknown commitment level '{}'", other),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc: RpcConfig {
                endpoint: default_endpoint(),
                timeout_secs: default_rpc_timeout(),
                commitment: default_commitment(),
            },
            wallet: WalletConfig::default(),
            transfer: TransferConfig { recipients: vec![] },
        }
    }
}
