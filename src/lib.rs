//! solbatch - Batch SOL Transfer Utility
//!
//! Builds, signs, and submits a batch of native SOL transfers as one
//! atomic transaction: one transfer instruction per recipient, a single
//! funding account as fee payer and source of funds, submission held to
//! confirmed commitment. Signing, wire encoding, RPC, and confirmation
//! polling are delegated to `solana-sdk` / `solana-client`.

pub mod config;
pub mod tx_builder;
pub mod types;
pub mod wallet;

// Re-export commonly used types
pub use config::Config;
pub use tx_builder::{BatchTransferBuilder, BatchTransferError, BatchTransferResult};
pub use types::{TransactionDraft, TransferRequest};
pub use wallet::WalletManager;

pub use solana_sdk::{pubkey::Pubkey, signature::Signature};

#[cfg(test)]
mod tests;
