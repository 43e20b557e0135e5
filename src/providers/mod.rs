mod eth;
pub use eth::*;

use alloy_primitives::Address;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolCall;

use crate::types::ConfirmedTx;

/// Minimal chain access the mint workflow is written against.
pub trait EthProvider: Clone + Send + 'static {
    async fn chain_id(&self) -> eyre::Result<u64>;

    /// Account that signs outgoing transactions and receives the position.
    fn signer_address(&self) -> Address;

    async fn view_call<IC>(&self, contract: Address, call: IC) -> eyre::Result<IC::Return>
    where
        IC: SolCall + Send;

    /// Broadcasts `tx` and waits for one confirmation.
    async fn send_transaction(&self, tx: TransactionRequest) -> eyre::Result<ConfirmedTx>;
}
