//! Shared types for batch transfer construction

use serde::{Deserialize, Serialize};
use solana_sdk::{
    hash::Hash,
    native_token::{lamports_to_sol, sol_to_lamports},
    pubkey::Pubkey,
    transaction::Transaction,
};
use std::str::FromStr;

use crate::tx_builder::errors::BatchTransferError;

/// A single transfer: recipient plus amount in SOL.
///
/// Batches are ordered sequences of these; order determines instruction
/// order within the transaction and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Destination account
    pub recipient: Pubkey,

    /// Amount in SOL (human-scale units)
    pub amount_sol: f64,
}

impl TransferRequest {
    /// Create a transfer request from already-validated parts
    pub fn new(recipient: Pubkey, amount_sol: f64) -> Self {
        Self {
            recipient,
            amount_sol,
        }
    }

    /// Parse a transfer request from a raw address string and SOL amount
    ///
    /// Validates address syntax and that the amount is a positive finite
    /// number. Semantic validation (account existence, sufficient funds)
    /// is left to the cluster at submission.
    pub fn parse(address: &str, amount_sol: f64) -> Result<Self, BatchTransferError> {
        let recipient = Pubkey::from_str(address)
            .map_err(|e| BatchTransferError::invalid_recipient(address, e.to_string()))?;

        if !amount_sol.is_finite() || amount_sol <= 0.0 {
            return Err(BatchTransferError::invalid_amount(address, amount_sol));
        }

        Ok(Self {
            recipient,
            amount_sol,
        })
    }

    /// Amount in lamports (1 SOL = 1_000_000_000 lamports)
    ///
    /// Conversion truncates toward zero at sub-lamport precision:
    /// 0.1 SOL is exactly 100_000_000 lamports, while 1.5 nano-SOL
    /// becomes 1 lamport.
    pub fn lamports(&self) -> u64 {
        sol_to_lamports(self.amount_sol)
    }
}

/// An unsigned batch transaction awaiting signature and submission.
///
/// Carries one transfer instruction per request in input order, the fee
/// payer, and the recent blockhash fetched at build time. The draft must
/// be submitted before that blockhash expires or the cluster rejects it.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    transaction: Transaction,
    blockhash: Hash,
    total_lamports: u64,
}

impl TransactionDraft {
    pub(crate) fn new(transaction: Transaction, blockhash: Hash, total_lamports: u64) -> Self {
        Self {
            transaction,
            blockhash,
            total_lamports,
        }
    }

    /// Number of transfer instructions in the draft
    pub fn instruction_count(&self) -> usize {
        self.transaction.message.instructions.len()
    }

    /// The recent blockhash the draft was built against
    pub fn blockhash(&self) -> Hash {
        self.blockhash
    }

    /// The fee payer (first account key of the message)
    pub fn fee_payer(&self) -> Option<&Pubkey> {
        self.transaction.message.account_keys.first()
    }

    /// Total lamports moved by all instructions (informational)
    pub fn total_lamports(&self) -> u64 {
        self.total_lamports
    }

    /// Total SOL moved by all instructions (informational)
    pub fn total_sol(&self) -> f64 {
        lamports_to_sol(self.total_lamports)
    }

    /// Borrow the underlying unsigned transaction
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Consume the draft, yielding the unsigned transaction
    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }
}
