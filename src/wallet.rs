//! Funding account management
//!
//! The funding keypair is loaded once at startup, held in memory for the
//! process lifetime, and never persisted or logged. It is the sole fee
//! payer and the sole signer for every batch.

use anyhow::{Context, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use std::sync::Arc;

/// Wallet manager for the funding keypair
pub struct WalletManager {
    keypair: Arc<Keypair>,
}

impl WalletManager {
    /// Create a new wallet manager from a keypair file
    ///
    /// Accepts either raw 64-byte secret-key files or the JSON byte-array
    /// format written by `solana-keygen`.
    pub fn from_file(path: &str) -> Result<Self> {
        let keypair_bytes =
            std::fs::read(path).with_context(|| format!("Failed to read keypair file: {}", path))?;

        let keypair = if keypair_bytes.len() == 64 {
            // Raw bytes format - validate before conversion
            Self::keypair_from_bytes(&keypair_bytes)?
        } else {
            // JSON format
            let json: Vec<u8> = serde_json::from_slice(&keypair_bytes)
                .context("Failed to parse keypair JSON")?;
            Self::keypair_from_bytes(&json)?
        };

        Ok(Self::from_keypair(keypair))
    }

    /// Create a new wallet manager from a base58-encoded secret key string
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .context("Secret key is not valid base58")?;
        let keypair = Self::keypair_from_bytes(&bytes)?;
        Ok(Self::from_keypair(keypair))
    }

    /// Create a new wallet manager from a base58 secret key in an
    /// environment variable
    pub fn from_env(var: &str) -> Result<Self> {
        let encoded = std::env::var(var)
            .with_context(|| format!("Environment variable {} is not set", var))?;
        Self::from_base58(&encoded)
    }

    /// Create a new wallet manager from a keypair
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self {
            keypair: Arc::new(keypair),
        }
    }

    fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
        if bytes.len() != 64 {
            anyhow::bail!(
                "Invalid keypair length: expected 64 bytes, got {}",
                bytes.len()
            );
        }
        if bytes.iter().all(|&b| b == 0) {
            anyhow::bail!("Invalid keypair: all-zero key rejected");
        }
        Keypair::try_from(bytes).context("Invalid keypair bytes")
    }

    /// Get the public key
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get a reference to the keypair
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Get an Arc reference to the keypair (for use with libraries expecting Arc<Keypair>)
    pub fn keypair_arc(&self) -> Arc<Keypair> {
        Arc::clone(&self.keypair)
    }
}

impl Clone for WalletManager {
    fn clone(&self) -> Self {
        Self {
            keypair: Arc::clone(&self.keypair),
        }
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret key; the public key is safe to show.
        f.debug_struct("WalletManager")
            .field("pubkey", &self.keypair.pubkey())
            .finish()
    }
}
