//! Batch transfer builder
//!
//! Owns the RPC connection handle and the funding wallet, and turns an
//! ordered batch of transfer requests into a single atomic transaction:
//! one transfer instruction per recipient, fee payer set to the funding
//! account, recent blockhash fetched immediately before construction.
//!
//! The builder holds no per-call state. Concurrent `send_batch` calls
//! against the same funding account are not coordinated here; each fetches
//! its own blockhash and the cluster serializes or rejects the results.

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, signature::Signature,
    transaction::Transaction,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::tx_builder::errors::{BatchTransferError, BatchTransferResult};
use crate::tx_builder::instructions::plan_transfer_instructions;
use crate::types::{TransactionDraft, TransferRequest};
use crate::wallet::WalletManager;

/// Builds, signs, and submits multi-recipient SOL transfers
pub struct BatchTransferBuilder {
    rpc_client: Arc<RpcClient>,
    wallet: WalletManager,
}

impl BatchTransferBuilder {
    /// Create a builder against an endpoint at confirmed commitment
    pub fn new(endpoint: impl Into<String>, wallet: WalletManager) -> Self {
        let rpc_client = Arc::new(RpcClient::new_with_commitment(
            endpoint.into(),
            CommitmentConfig::confirmed(),
        ));
        Self { rpc_client, wallet }
    }

    /// Create a builder with an explicit request timeout and commitment
    pub fn new_with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
        commitment: CommitmentConfig,
        wallet: WalletManager,
    ) -> Self {
        let rpc_client = Arc::new(RpcClient::new_with_timeout_and_commitment(
            endpoint.into(),
            timeout,
            commitment,
        ));
        Self { rpc_client, wallet }
    }

    /// Create a builder from an existing RPC client
    pub fn from_rpc_client(rpc_client: Arc<RpcClient>, wallet: WalletManager) -> Self {
        Self { rpc_client, wallet }
    }

    /// Get the shared RPC client
    pub fn rpc_client(&self) -> Arc<RpcClient> {
        Arc::clone(&self.rpc_client)
    }

    /// Build an unsigned draft for a batch of transfers
    ///
    /// Performs exactly one network query, for the recent blockhash; all
    /// assembly is local. Requests are not validated here: syntactic
    /// checks happen when `TransferRequest`s are parsed, and semantic
    /// rejection is the cluster's at submission. An empty batch produces
    /// a zero-instruction draft without error.
    ///
    /// # Errors
    ///
    /// Returns `BatchTransferError::Blockhash` if the blockhash fetch
    /// fails.
    pub async fn build_draft(
        &self,
        requests: &[TransferRequest],
    ) -> BatchTransferResult<TransactionDraft> {
        let blockhash = self
            .rpc_client
            .get_latest_blockhash()
            .await
            .map_err(|e| BatchTransferError::blockhash_unavailable(e.to_string()))?;

        debug!(%blockhash, batch_size = requests.len(), "Fetched recent blockhash");

        Ok(self.compile_draft(requests, blockhash))
    }

    /// Assemble a draft against a known blockhash (no I/O)
    ///
    /// Deterministic: the same requests and blockhash always produce the
    /// same message bytes.
    pub fn compile_draft(&self, requests: &[TransferRequest], blockhash: Hash) -> TransactionDraft {
        let payer = self.wallet.pubkey();
        let plan = plan_transfer_instructions(&payer, requests);

        #[cfg(debug_assertions)]
        debug_assert!(
            crate::tx_builder::instructions::sanity_check_transfer_plan(
                &plan.instructions,
                requests
            )
            .is_ok()
        );

        let mut transaction = Transaction::new_with_payer(&plan.instructions, Some(&payer));
        transaction.message.recent_blockhash = blockhash;

        TransactionDraft::new(transaction, blockhash, plan.total_lamports)
    }

    /// Sign a draft with the funding keypair and submit it, waiting for
    /// confirmed commitment
    ///
    /// A failure is terminal for the draft: there is no blockhash refresh
    /// or retry on top of what the RPC client already does internally.
    ///
    /// # Errors
    ///
    /// - `Signing` if the keypair cannot sign the message
    /// - `BlockhashExpired` if the draft's blockhash is no longer valid
    /// - `InsufficientFunds` if the funding account cannot cover the batch
    /// - `TransactionRejected` for any other cluster-side rejection
    /// - `Rpc` for transport failures
    pub async fn submit(&self, draft: TransactionDraft) -> BatchTransferResult<Signature> {
        let blockhash = draft.blockhash();
        let mut transaction = draft.into_transaction();

        transaction
            .try_sign(&[self.wallet.keypair()], blockhash)
            .map_err(BatchTransferError::from_signer_error)?;

        let signature = self
            .rpc_client
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(BatchTransferError::from_client_error)?;

        debug!(%signature, "Transaction confirmed");

        Ok(signature)
    }

    /// Build and submit in one call
    ///
    /// Exactly `build_draft` followed by `submit`; the result or failure
    /// of `submit` is returned unchanged.
    pub async fn send_batch(
        &self,
        requests: &[TransferRequest],
    ) -> BatchTransferResult<Signature> {
        let draft = self.build_draft(requests).await?;
        self.submit(draft).await
    }

    /// Fetch the funding account's current balance in lamports
    pub async fn payer_balance(&self) -> BatchTransferResult<u64> {
        self.rpc_client
            .get_balance(&self.wallet.pubkey())
            .await
            .map_err(|e| BatchTransferError::Rpc(format!("Failed to fetch balance: {}", e)))
    }

    /// Check balance before submission to avoid a doomed round-trip
    ///
    /// `required` covers transfers only; the cluster still charges fees on
    /// top, so a passing check does not guarantee acceptance.
    pub async fn check_balance_sufficient(&self, required: u64) -> BatchTransferResult<u64> {
        let available = self.payer_balance().await?;

        if available < required {
            return Err(BatchTransferError::InsufficientBalance {
                required,
                available,
            });
        }

        Ok(available)
    }
}
