use alloy_primitives::{Address, I256, TxHash};

use crate::planner::{MAX_TICK, MIN_TICK};

/// Rejected planner input. Raised before any transaction is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("invalid tick spacing {0}, must be positive and at most {max}", max = MAX_TICK)]
    InvalidTickSpacing(i32),
    #[error("invalid current tick {0}, outside [{min}, {max}]", min = MIN_TICK, max = MAX_TICK)]
    InvalidTick(i32),
    #[error("invalid desired amount {0}, must not be negative")]
    InvalidAmount(I256)
}

#[derive(Debug, thiserror::Error)]
pub enum MinterError {
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
    #[error("approval of token {token:?} reverted in tx {tx_hash:?}")]
    ApprovalFailed { token: Address, tx_hash: TxHash },
    #[error("transaction {0:?} reverted")]
    TransactionReverted(TxHash),
    #[error("no uniswap v3 deployment known for chain id {0}")]
    UnsupportedChain(u64),
    #[error("fee {0} is not an enabled fee tier")]
    UnsupportedFee(u32)
}
