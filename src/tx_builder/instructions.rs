//! Transfer instruction planning and shape validation
//!
//! Stateless helpers that turn an ordered batch of transfer requests into
//! system-program transfer instructions, preserving input order. Planning
//! performs no I/O and no validation beyond what the types already carry;
//! an empty batch yields an empty plan.

use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction, system_program};

use crate::types::TransferRequest;

#[cfg(any(debug_assertions, test))]
use crate::tx_builder::errors::BatchTransferError;

/// Planned transfer instructions with batch totals
#[derive(Debug, Clone)]
pub struct InstructionPlan {
    /// One transfer instruction per request, in request order
    pub instructions: Vec<Instruction>,

    /// Sum of all transfer amounts in lamports
    pub total_lamports: u64,
}

/// Plan one system-program transfer per request, in input order
///
/// Amounts are converted from SOL to lamports here, at the fixed
/// 1-SOL = 1_000_000_000-lamport multiplier.
pub fn plan_transfer_instructions(payer: &Pubkey, requests: &[TransferRequest]) -> InstructionPlan {
    let mut instructions = Vec::with_capacity(requests.len());
    let mut total_lamports: u64 = 0;

    for request in requests {
        let lamports = request.lamports();
        instructions.push(system_instruction::transfer(
            payer,
            &request.recipient,
            lamports,
        ));
        total_lamports = total_lamports.saturating_add(lamports);
    }

    InstructionPlan {
        instructions,
        total_lamports,
    }
}

/// Validate that a plan is all transfers in request order (debug/test only)
///
/// Checks each instruction is a system-program transfer whose destination
/// matches the corresponding request. Not compiled into release binaries.
///
/// # Errors
///
/// Returns `BatchTransferError::TransactionRejected` describing the first
/// mismatch found.
#[cfg(any(debug_assertions, test))]
pub fn sanity_check_transfer_plan(
    instructions: &[Instruction],
    requests: &[TransferRequest],
) -> Result<(), BatchTransferError> {
    if instructions.len() != requests.len() {
        return Err(BatchTransferError::TransactionRejected(format!(
            "Instruction count {} does not match request count {}",
            instructions.len(),
            requests.len()
        )));
    }

    // Helper: Check if instruction is a system-program transfer
    // Transfer has discriminator 2: [2, 0, 0, 0] (u32 little-endian),
    // followed by the u64 lamports amount
    let is_transfer = |ix: &Instruction| -> bool {
        ix.program_id == system_program::id()
            && ix.data.len() == 12
            && ix.data[0] == 2
            && ix.data[1] == 0
            && ix.data[2] == 0
            && ix.data[3] == 0
    };

    for (idx, (ix, request)) in instructions.iter().zip(requests).enumerate() {
        if !is_transfer(ix) {
            return Err(BatchTransferError::TransactionRejected(format!(
                "Instruction at position {} is not a system transfer (program_id: {})",
                idx, ix.program_id
            )));
        }
        // Account order for transfer: [source, destination]
        let destination = ix.accounts.get(1).map(|meta| meta.pubkey);
        if destination != Some(request.recipient) {
            return Err(BatchTransferError::TransactionRejected(format!(
                "Instruction at position {} targets {:?}, expected {}",
                idx, destination, request.recipient
            )));
        }
    }

    Ok(())
}
