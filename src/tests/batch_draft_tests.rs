//! Draft construction properties over the public crate surface
//!
//! Covers the batch scenario from end to end minus the cluster: counts
//! and ordering, amount totals, empty batches, and draft determinism
//! (the composition `send_batch` relies on).

use proptest::prelude::*;
use solana_sdk::{hash::Hash, native_token::lamports_to_sol, pubkey::Pubkey, system_program};

use crate::tests::test_helpers::{distinct_requests, local_builder};
use crate::tx_builder::plan_transfer_instructions;
use crate::types::TransferRequest;

#[test]
fn test_two_transfers_to_same_recipient() {
    // recipients = [(A, 0.1), (A, 0.2)] -> 2 instructions, 0.3 SOL total
    let builder = local_builder();
    let recipient = Pubkey::new_unique();
    let requests = vec![
        TransferRequest::new(recipient, 0.1),
        TransferRequest::new(recipient, 0.2),
    ];

    let draft = builder.compile_draft(&requests, Hash::new_unique());

    assert_eq!(draft.instruction_count(), 2);
    assert_eq!(draft.total_lamports(), 300_000_000);
    assert!((draft.total_sol() - 0.3).abs() < 1e-12);
}

#[test]
fn test_draft_count_matches_batch_size() {
    let builder = local_builder();
    for n in [1, 2, 7, 32] {
        let requests = distinct_requests(n);
        let draft = builder.compile_draft(&requests, Hash::new_unique());
        assert_eq!(draft.instruction_count(), n);
    }
}

#[test]
fn test_empty_batch_builds_without_error() {
    let builder = local_builder();
    let draft = builder.compile_draft(&[], Hash::new_unique());
    assert_eq!(draft.instruction_count(), 0);
    // Fee payer is still present even with nothing to transfer
    assert!(draft.fee_payer().is_some());
}

#[test]
fn test_draft_deterministic_for_fixed_blockhash() {
    let builder = local_builder();
    let requests = distinct_requests(3);
    let blockhash = Hash::new_unique();

    let first = builder.compile_draft(&requests, blockhash);
    let second = builder.compile_draft(&requests, blockhash);

    assert_eq!(
        first.transaction().message_data(),
        second.transaction().message_data()
    );
}

#[test]
fn test_drafts_differ_across_blockhashes() {
    let builder = local_builder();
    let requests = distinct_requests(2);

    let first = builder.compile_draft(&requests, Hash::new_unique());
    let second = builder.compile_draft(&requests, Hash::new_unique());

    assert_ne!(
        first.transaction().message_data(),
        second.transaction().message_data()
    );
}

proptest! {
    /// Instruction count equals input count and instruction order matches
    /// input order, for arbitrary batches
    #[test]
    fn prop_plan_preserves_count_and_order(
        entries in proptest::collection::vec((any::<[u8; 32]>(), 1u64..10_000_000_000u64), 0..16)
    ) {
        let payer = Pubkey::new_unique();
        let requests: Vec<TransferRequest> = entries
            .iter()
            .map(|(bytes, lamports)| {
                TransferRequest::new(Pubkey::new_from_array(*bytes), lamports_to_sol(*lamports))
            })
            .collect();

        let plan = plan_transfer_instructions(&payer, &requests);

        prop_assert_eq!(plan.instructions.len(), requests.len());
        for (ix, request) in plan.instructions.iter().zip(&requests) {
            prop_assert_eq!(ix.program_id, system_program::id());
            prop_assert_eq!(ix.accounts[0].pubkey, payer);
            prop_assert_eq!(ix.accounts[1].pubkey, request.recipient);
        }
    }

    /// Whole-SOL amounts convert exactly (product stays below 2^53)
    #[test]
    fn prop_whole_sol_amounts_exact(sol in 1u64..9_000u64) {
        let request = TransferRequest::new(Pubkey::new_unique(), sol as f64);
        prop_assert_eq!(request.lamports(), sol * 1_000_000_000);
    }

    /// The SOL round-trip of an arbitrary lamport amount is never off by
    /// more than one lamport (f64 rounding at the multiplier's precision
    /// boundary truncates toward zero)
    #[test]
    fn prop_lamports_round_trip_within_one(lamports in 1u64..10_000_000_000_000u64) {
        let request = TransferRequest::new(Pubkey::new_unique(), lamports_to_sol(lamports));
        let round_tripped = request.lamports();
        prop_assert!(round_tripped.abs_diff(lamports) <= 1);
    }
}
