use alloy_network::{EthereumWallet, ReceiptResponse};
use alloy_primitives::{Address, TxKind};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolCall;
use tracing::debug;

use super::EthProvider;
use crate::types::{ConfirmedTx, MinterConfig};

#[derive(Debug, Clone)]
pub struct EthRpcProvider<P = DynProvider>
where
    P: Provider + Clone
{
    eth_provider:   P,
    signer_address: Address
}

impl EthRpcProvider {
    /// Connects to `config.rpc_url()` (http, ws or ipc, parsed from the url)
    /// with a wallet built from `config.private_key()`.
    pub async fn connect(config: &MinterConfig) -> eyre::Result<Self> {
        let signer: PrivateKeySigner = config.private_key().parse()?;
        let signer_address = signer.address();

        let eth_provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect(config.rpc_url())
            .await?
            .erased();

        Ok(Self { eth_provider, signer_address })
    }
}

impl<P: Provider + Clone> EthRpcProvider<P> {
    /// `eth_provider` must already sign for `signer_address`.
    pub fn new_with_provider(eth_provider: P, signer_address: Address) -> Self {
        Self { eth_provider, signer_address }
    }

    pub fn provider(&self) -> &P {
        &self.eth_provider
    }
}

impl<P> EthProvider for EthRpcProvider<P>
where
    P: Provider + Clone + 'static
{
    async fn chain_id(&self) -> eyre::Result<u64> {
        Ok(self.eth_provider.get_chain_id().await?)
    }

    fn signer_address(&self) -> Address {
        self.signer_address
    }

    async fn view_call<IC>(&self, contract: Address, call: IC) -> eyre::Result<IC::Return>
    where
        IC: SolCall + Send,
    {
        let tx = TransactionRequest {
            to: Some(TxKind::Call(contract)),
            input: TransactionInput::both(call.abi_encode().into()),
            ..Default::default()
        };

        let data = self.eth_provider.call(tx).await?;
        Ok(IC::abi_decode_returns(&data)?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> eyre::Result<ConfirmedTx> {
        let pending = self.eth_provider.send_transaction(tx).await?;
        debug!(tx_hash = ?pending.tx_hash(), "waiting for confirmation");

        let receipt = pending.get_receipt().await?;

        Ok(ConfirmedTx {
            tx_hash:      ReceiptResponse::transaction_hash(&receipt),
            block_number: ReceiptResponse::block_number(&receipt),
            gas_used:     ReceiptResponse::gas_used(&receipt),
            success:      ReceiptResponse::status(&receipt)
        })
    }
}
