//! Batch transfer transaction building
//!
//! This module turns an ordered list of (recipient, amount) pairs into a
//! single atomic Solana transaction and drives it through signing and
//! confirmed submission:
//! - **errors**: error taxonomy with retryability and category helpers
//! - **instructions**: stateless transfer instruction planning
//! - **builder**: draft construction, signing, and submission
//!
//! The whole batch succeeds or fails together; there is no per-recipient
//! partial success.

// Public API - Error types
pub mod errors;
pub use errors::{BatchTransferError, BatchTransferResult};

pub mod instructions;
pub use instructions::{plan_transfer_instructions, InstructionPlan};

mod builder;
pub use builder::BatchTransferBuilder;
