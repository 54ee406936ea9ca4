//! Error types for batch transfer construction and submission
//!
//! One variant per failure cause, so callers and tests can distinguish
//! outcomes programmatically instead of parsing log strings:
//! - Input rejection (recipient address, amount)
//! - Funds (preflight shortfall, cluster-reported shortfall)
//! - Blockhash (fetch failure, expiry at submission)
//! - Signing, cluster rejection, RPC transport

use solana_client::client_error::ClientError;
use solana_sdk::{signature::SignerError, transaction::TransactionError};
use thiserror::Error;

/// Error type for all batch transfer operations
#[derive(Error, Debug)]
pub enum BatchTransferError {
    /// Recipient address failed syntactic validation
    #[error("Invalid recipient address '{address}': {reason}")]
    InvalidRecipient {
        /// The raw address string as supplied
        address: String,
        /// Why it was rejected
        reason: String,
    },

    /// Transfer amount is not a positive finite number
    #[error("Invalid amount {amount} for recipient '{address}'")]
    InvalidAmount {
        /// The raw address string the amount was paired with
        address: String,
        /// The rejected amount in SOL
        amount: f64,
    },

    /// Preflight balance check found the funding account short
    #[error("Insufficient balance: required {required} lamports, available {available}")]
    InsufficientBalance {
        /// Lamports needed to cover the batch
        required: u64,
        /// Lamports actually held by the funding account
        available: u64,
    },

    /// The cluster rejected the transaction for lack of funds
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Failed to fetch a recent blockhash
    #[error("Blockhash fetch failed: {0}")]
    Blockhash(String),

    /// The draft's blockhash expired before the cluster accepted it
    ///
    /// The draft is unusable; a new one must be built.
    #[error("Blockhash expired or unknown to the cluster: {0}")]
    BlockhashExpired(String),

    /// Failed to sign the transaction with the funding keypair
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The cluster rejected the transaction for another reason
    /// (malformed instruction, zero instructions, duplicate, ...)
    #[error("Transaction rejected by cluster: {0}")]
    TransactionRejected(String),

    /// RPC transport failure (endpoint unreachable, timeout, bad response)
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl BatchTransferError {
    /// Check if retrying the operation might succeed
    ///
    /// Expired blockhashes are not retryable at the submit level: the
    /// draft itself is dead and must be rebuilt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Blockhash(_) => true,
            Self::Rpc(_) => true,

            Self::InvalidRecipient { .. } => false,
            Self::InvalidAmount { .. } => false,
            Self::InsufficientBalance { .. } => false,
            Self::InsufficientFunds(_) => false,
            Self::BlockhashExpired(_) => false,
            Self::Signing(_) => false,
            Self::TransactionRejected(_) => false,
        }
    }

    /// Get the error category for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRecipient { .. } => "recipient",
            Self::InvalidAmount { .. } => "amount",
            Self::InsufficientBalance { .. } | Self::InsufficientFunds(_) => "funds",
            Self::Blockhash(_) | Self::BlockhashExpired(_) => "blockhash",
            Self::Signing(_) => "signing",
            Self::TransactionRejected(_) => "rejected",
            Self::Rpc(_) => "rpc",
        }
    }

    /// Classify a `solana_client` error into the taxonomy
    ///
    /// Cluster-level causes (stale blockhash, insufficient funds, other
    /// rejection) are pulled out of the transport error when present;
    /// anything else is an RPC failure.
    pub fn from_client_error(err: ClientError) -> Self {
        if let Some(tx_err) = err.get_transaction_error() {
            return match tx_err {
                TransactionError::BlockhashNotFound => Self::BlockhashExpired(err.to_string()),
                TransactionError::InsufficientFundsForFee => {
                    Self::InsufficientFunds(err.to_string())
                }
                other => Self::TransactionRejected(other.to_string()),
            };
        }
        Self::Rpc(err.to_string())
    }

    /// Convert from SignerError
    pub fn from_signer_error(err: SignerError) -> Self {
        Self::Signing(err.to_string())
    }
}

// Convenience constructors for common error scenarios
impl BatchTransferError {
    /// Create an invalid recipient error
    pub fn invalid_recipient(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecipient {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(address: impl Into<String>, amount: f64) -> Self {
        Self::InvalidAmount {
            address: address.into(),
            amount,
        }
    }

    /// Create a blockhash fetch error
    pub fn blockhash_unavailable(reason: impl Into<String>) -> Self {
        Self::Blockhash(reason.into())
    }
}

/// Result type for batch transfer operations
pub type BatchTransferResult<T> = Result<T, BatchTransferError>;
