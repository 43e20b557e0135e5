use alloy_primitives::{
    Address, TxHash, U256,
    aliases::{I24, U24, U160},
    keccak256
};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use super::{INonfungiblePositionManager::MintParams, POOL_INIT_CODE_HASH};

/// Resolved ERC-20 metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address:  Address,
    pub symbol:   String,
    pub decimals: u8
}

pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b { (token_a, token_b) } else { (token_b, token_a) }
}

/// Identifies a V3 pool. `token0 < token1` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    pub token0: Address,
    pub token1: Address,
    pub fee:    u32
}

impl PoolKey {
    pub fn new(token_a: Address, token_b: Address, fee: u32) -> Self {
        let (token0, token1) = sort_tokens(token_a, token_b);
        Self { token0, token1, fee }
    }

    /// CREATE2 address of the pool deployed by `factory` for this key.
    pub fn pool_address(&self, factory: Address) -> Address {
        let salt = keccak256((self.token0, self.token1, U24::from(self.fee)).abi_encode());
        factory.create2(salt, POOL_INIT_CODE_HASH)
    }
}

/// Pool state read right before planning. Never reused across mints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub pool_key:       PoolKey,
    pub pool_address:   Address,
    pub tick_spacing:   i32,
    pub current_tick:   i32,
    pub sqrt_price_x96: U160,
    pub liquidity:      u128
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32
}

/// Everything the position manager's `mint` needs, built once per mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintPlan {
    pub token0:          Address,
    pub token1:          Address,
    pub fee:             u32,
    pub tick_lower:      i32,
    pub tick_upper:      i32,
    pub amount0_desired: U256,
    pub amount1_desired: U256,
    pub amount0_min:     U256,
    pub amount1_min:     U256,
    pub recipient:       Address,
    pub deadline:        u64
}

impl MintPlan {
    pub fn tick_range(&self) -> TickRange {
        TickRange { tick_lower: self.tick_lower, tick_upper: self.tick_upper }
    }
}

/// Panics if a tick does not fit in `int24`. Plans built by
/// [`crate::planner::PositionPlanner`] always fit.
impl From<&MintPlan> for MintParams {
    fn from(plan: &MintPlan) -> Self {
        MintParams {
            token0:         plan.token0,
            token1:         plan.token1,
            fee:            U24::from(plan.fee),
            tickLower:      I24::unchecked_from(plan.tick_lower),
            tickUpper:      I24::unchecked_from(plan.tick_upper),
            amount0Desired: plan.amount0_desired,
            amount1Desired: plan.amount1_desired,
            amount0Min:     plan.amount0_min,
            amount1Min:     plan.amount1_min,
            recipient:      plan.recipient,
            deadline:       U256::from(plan.deadline)
        }
    }
}

/// The parts of a mined receipt the mint workflow looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedTx {
    pub tx_hash:      TxHash,
    pub block_number: Option<u64>,
    pub gas_used:     u64,
    pub success:      bool
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;
    use crate::types::{DAI, UNISWAP_V3_CONSTANTS_MAINNET, USDC, WETH};

    #[test]
    fn test_pool_key_sorts_tokens() {
        let key = PoolKey::new(WETH, USDC, 500);
        assert_eq!(key.token0, USDC);
        assert_eq!(key.token1, WETH);
        assert_eq!(key, PoolKey::new(USDC, WETH, 500));

        let key = PoolKey::new(USDC, DAI, 100);
        assert_eq!(key.token0, DAI);
        assert_eq!(key.token1, USDC);
    }

    #[test]
    fn test_pool_address() {
        let factory = UNISWAP_V3_CONSTANTS_MAINNET.factory_address();

        assert_eq!(
            PoolKey::new(USDC, WETH, 500).pool_address(factory),
            address!("0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640")
        );
        assert_eq!(
            PoolKey::new(WETH, USDC, 3000).pool_address(factory),
            address!("0x8ad599c3A0ff1De082011EFDDc58f1908eb6e6D8")
        );
    }

    #[test]
    fn test_mint_params_from_plan() {
        let plan = MintPlan {
            token0:          DAI,
            token1:          USDC,
            fee:             500,
            tick_lower:      -120,
            tick_upper:      0,
            amount0_desired: U256::from(100u64),
            amount1_desired: U256::from(200u64),
            amount0_min:     U256::ZERO,
            amount1_min:     U256::ZERO,
            recipient:       Address::repeat_byte(0x42),
            deadline:        1_700_001_200
        };

        let params = MintParams::from(&plan);
        assert_eq!(params.fee, U24::from(500u32));
        assert_eq!(params.tickLower.as_i32(), -120);
        assert_eq!(params.tickUpper.as_i32(), 0);
        assert_eq!(params.amount1Desired, U256::from(200u64));
        assert_eq!(params.deadline, U256::from(1_700_001_200u64));
        assert_eq!(plan.tick_range(), TickRange { tick_lower: -120, tick_upper: 0 });
    }
}
