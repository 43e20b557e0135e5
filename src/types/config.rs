use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MINT_GAS_LIMIT: u64 = 3_000_000;
pub const DEFAULT_MAX_FEE_PER_GAS: u128 = 100_000_000_000;
pub const DEFAULT_MAX_PRIORITY_FEE_PER_GAS: u128 = 100_000_000_000;

/// Fixed gas parameters attached to outgoing transactions. The gas limit only
/// applies to the mint; approvals are left to estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasConfig {
    pub gas_limit:                u64,
    pub max_fee_per_gas:          u128,
    pub max_priority_fee_per_gas: u128
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gas_limit:                DEFAULT_MINT_GAS_LIMIT,
            max_fee_per_gas:          DEFAULT_MAX_FEE_PER_GAS,
            max_priority_fee_per_gas: DEFAULT_MAX_PRIORITY_FEE_PER_GAS
        }
    }
}

#[derive(Debug, Clone)]
pub struct MinterConfig {
    rpc_url:          String,
    private_key:      String,
    gas:              GasConfig,
    factory:          Option<Address>,
    position_manager: Option<Address>
}

impl MinterConfig {
    pub fn new(rpc_url: impl ToString, private_key: impl ToString) -> Self {
        Self {
            rpc_url:          rpc_url.to_string(),
            private_key:      private_key.to_string(),
            gas:              GasConfig::default(),
            factory:          None,
            position_manager: None
        }
    }

    pub fn with_gas(mut self, gas: GasConfig) -> Self {
        self.gas = gas;
        self
    }

    pub fn with_factory(mut self, factory: Address) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_position_manager(mut self, position_manager: Address) -> Self {
        self.position_manager = Some(position_manager);
        self
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn gas(&self) -> GasConfig {
        self.gas
    }

    pub fn factory(&self) -> Option<Address> {
        self.factory
    }

    pub fn position_manager(&self) -> Option<Address> {
        self.position_manager
    }
}
