use alloy_primitives::{Address, TxHash, TxKind};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use tracing::info;

use crate::{
    providers::EthProvider,
    types::{GasConfig, INonfungiblePositionManager, MintPlan, MinterError}
};

pub trait MintApi: EthProvider {
    /// Sends `mint(plan)` to the position manager and waits for it to be
    /// mined.
    async fn submit_mint(
        &self,
        position_manager: Address,
        plan: &MintPlan,
        gas: &GasConfig
    ) -> eyre::Result<TxHash> {
        let call = INonfungiblePositionManager::mintCall { params: plan.into() };

        let tx = TransactionRequest {
            from: Some(self.signer_address()),
            to: Some(TxKind::Call(position_manager)),
            input: TransactionInput::new(call.abi_encode().into()),
            gas: Some(gas.gas_limit),
            max_fee_per_gas: Some(gas.max_fee_per_gas),
            max_priority_fee_per_gas: Some(gas.max_priority_fee_per_gas),
            ..Default::default()
        };

        let confirmed = self.send_transaction(tx).await?;
        if !confirmed.success {
            return Err(MinterError::TransactionReverted(confirmed.tx_hash).into());
        }
        info!(tx_hash = ?confirmed.tx_hash, block = ?confirmed.block_number, "minted position");

        Ok(confirmed.tx_hash)
    }
}

impl<P: EthProvider> MintApi for P {}
