use alloy_primitives::{Address, TxKind, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_sol_types::SolCall;
use tracing::{debug, info};

use crate::{
    providers::EthProvider,
    types::{ConfirmedTx, GasConfig, IERC20, MinterError}
};

pub trait ApprovalApi: EthProvider {
    /// Makes sure `spender` may pull `amount` of `token` from the signer.
    ///
    /// Returns `None` when the current allowance already covers `amount`,
    /// otherwise the confirmed `approve` transaction.
    async fn ensure_approval(
        &self,
        token: Address,
        amount: U256,
        spender: Address,
        gas: &GasConfig
    ) -> eyre::Result<Option<ConfirmedTx>> {
        let owner = self.signer_address();
        let allowance = self
            .view_call(token, IERC20::allowanceCall { owner, spender })
            .await?;

        if allowance >= amount {
            debug!(?token, ?spender, %allowance, %amount, "allowance already sufficient");
            return Ok(None);
        }

        let tx = TransactionRequest {
            from: Some(owner),
            to: Some(TxKind::Call(token)),
            input: TransactionInput::new(IERC20::approveCall { spender, amount }.abi_encode().into()),
            max_fee_per_gas: Some(gas.max_fee_per_gas),
            max_priority_fee_per_gas: Some(gas.max_priority_fee_per_gas),
            ..Default::default()
        };

        let confirmed = self.send_transaction(tx).await?;
        if !confirmed.success {
            return Err(MinterError::ApprovalFailed { token, tx_hash: confirmed.tx_hash }.into());
        }
        info!(?token, ?spender, %amount, tx_hash = ?confirmed.tx_hash, "approved token transfer");

        Ok(Some(confirmed))
    }
}

impl<P: EthProvider> ApprovalApi for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::MockEthProvider,
        types::DAI
    };

    const SPENDER: Address = Address::repeat_byte(0x55);

    #[tokio::test]
    async fn test_sufficient_allowance_sends_nothing() {
        let provider = MockEthProvider::default();
        provider.mock_call::<IERC20::allowanceCall>(DAI, U256::from(1_000u64));

        let res = provider
            .ensure_approval(DAI, U256::from(1_000u64), SPENDER, &GasConfig::default())
            .await
            .unwrap();

        assert!(res.is_none());
        assert!(provider.sent_transactions().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_allowance_approves() {
        let provider = MockEthProvider::default();
        provider.mock_call::<IERC20::allowanceCall>(DAI, U256::from(10u64));
        let gas = GasConfig::default();

        let confirmed = provider
            .ensure_approval(DAI, U256::from(1_000u64), SPENDER, &gas)
            .await
            .unwrap()
            .unwrap();
        assert!(confirmed.success);

        let sent = provider.sent_transactions();
        assert_eq!(sent.len(), 1);

        let tx = &sent[0];
        assert_eq!(tx.from, Some(provider.signer_address()));
        assert_eq!(tx.to, Some(TxKind::Call(DAI)));
        assert_eq!(tx.max_fee_per_gas, Some(gas.max_fee_per_gas));
        assert_eq!(tx.gas, None);

        let call = IERC20::approveCall::abi_decode(tx.input.input().unwrap()).unwrap();
        assert_eq!(call.spender, SPENDER);
        assert_eq!(call.amount, U256::from(1_000u64));
    }

    #[tokio::test]
    async fn test_reverted_approval_fails() {
        let provider = MockEthProvider::default().with_reverting_transactions();
        provider.mock_call::<IERC20::allowanceCall>(DAI, U256::ZERO);

        let err = provider
            .ensure_approval(DAI, U256::from(1u64), SPENDER, &GasConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MinterError>(),
            Some(MinterError::ApprovalFailed { token, .. }) if *token == DAI
        ));
    }

    #[tokio::test]
    async fn test_zero_amount_needs_no_approval() {
        let provider = MockEthProvider::default();
        provider.mock_call::<IERC20::allowanceCall>(DAI, U256::ZERO);

        let res = provider
            .ensure_approval(DAI, U256::ZERO, SPENDER, &GasConfig::default())
            .await
            .unwrap();

        assert!(res.is_none());
    }
}
