use std::{collections::HashMap, sync::Arc};

use alloy_primitives::{Address, B256, U256};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::SolCall;
use parking_lot::Mutex;

use crate::{providers::EthProvider, types::ConfirmedTx};

pub const MOCK_SIGNER: Address = Address::repeat_byte(0x5e);

#[derive(Debug, Default)]
struct MockState {
    calls: HashMap<(Address, [u8; 4]), Vec<u8>>,
    sent:  Vec<TransactionRequest>
}

/// In-memory [`EthProvider`]. View calls answer with canned return data keyed
/// by contract and selector, sent transactions are recorded and mined
/// immediately.
#[derive(Debug, Clone)]
pub struct MockEthProvider {
    state:          Arc<Mutex<MockState>>,
    chain_id:       u64,
    signer_address: Address,
    revert_txs:     bool
}

impl Default for MockEthProvider {
    fn default() -> Self {
        Self {
            state:          Default::default(),
            chain_id:       1,
            signer_address: MOCK_SIGNER,
            revert_txs:     false
        }
    }
}

impl MockEthProvider {
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Every transaction sent afterwards is mined with a failed status.
    pub fn with_reverting_transactions(mut self) -> Self {
        self.revert_txs = true;
        self
    }

    /// Answers every later `IC` call to `contract` with `ret`.
    pub fn mock_call<IC: SolCall>(&self, contract: Address, ret: IC::Return) {
        self.state
            .lock()
            .calls
            .insert((contract, IC::SELECTOR), IC::abi_encode_returns(&ret));
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state.lock().sent.clone()
    }

    /// Hash the mock assigns to the `index`th sent transaction.
    pub fn tx_hash_for(index: usize) -> B256 {
        B256::from(U256::from(index + 1))
    }
}

impl EthProvider for MockEthProvider {
    async fn chain_id(&self) -> eyre::Result<u64> {
        Ok(self.chain_id)
    }

    fn signer_address(&self) -> Address {
        self.signer_address
    }

    async fn view_call<IC>(&self, contract: Address, _call: IC) -> eyre::Result<IC::Return>
    where
        IC: SolCall + Send,
    {
        let data = self
            .state
            .lock()
            .calls
            .get(&(contract, IC::SELECTOR))
            .cloned()
            .ok_or_else(|| eyre::eyre!("no mocked return for {} on {contract:?}", IC::SIGNATURE))?;

        Ok(IC::abi_decode_returns(&data)?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> eyre::Result<ConfirmedTx> {
        let mut state = self.state.lock();
        let index = state.sent.len();
        state.sent.push(tx);

        Ok(ConfirmedTx {
            tx_hash:      Self::tx_hash_for(index),
            block_number: Some(index as u64 + 1),
            gas_used:     21_000,
            success:      !self.revert_txs
        })
    }
}
