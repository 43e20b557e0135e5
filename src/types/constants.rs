use alloy_primitives::{Address, B256, ChainId, address, b256};

/// `keccak256` of the pool contract creation code, the CREATE2 init code hash
/// every V3 pool address is derived from.
pub const POOL_INIT_CODE_HASH: B256 =
    b256!("0xe34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

pub const DAI: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
pub const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniswapV3Constants {
    factory_address:          Address,
    position_manager_address: Address,
    chain_id:                 u64
}

impl UniswapV3Constants {
    pub fn by_chain(chain_id: ChainId) -> Option<Self> {
        match chain_id {
            1 => Some(UNISWAP_V3_CONSTANTS_MAINNET),
            11155111 => Some(UNISWAP_V3_CONSTANTS_SEPOLIA_TESTNET),
            _ => None
        }
    }

    /// Addresses for a deployment the table does not know about (forks, L2s).
    pub const fn custom(
        chain_id: ChainId,
        factory_address: Address,
        position_manager_address: Address
    ) -> Self {
        Self { factory_address, position_manager_address, chain_id }
    }

    pub fn with_factory(mut self, factory_address: Address) -> Self {
        self.factory_address = factory_address;
        self
    }

    pub fn with_position_manager(mut self, position_manager_address: Address) -> Self {
        self.position_manager_address = position_manager_address;
        self
    }

    #[inline]
    pub fn factory_address(&self) -> Address {
        self.factory_address
    }

    #[inline]
    pub fn position_manager_address(&self) -> Address {
        self.position_manager_address
    }

    #[inline]
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }
}

pub const UNISWAP_V3_CONSTANTS_MAINNET: UniswapV3Constants = UniswapV3Constants {
    factory_address:          address!("0x1F98431c8aD98523631AE4a59f267346ea31F984"),
    position_manager_address: address!("0xC36442b4a4522E871399CD717aBDD847Ab11FE88"),
    chain_id:                 1
};

pub const UNISWAP_V3_CONSTANTS_SEPOLIA_TESTNET: UniswapV3Constants = UniswapV3Constants {
    factory_address:          address!("0x0227628f3F023bb0B980b67D528571c95c6DaC1c"),
    position_manager_address: address!("0x1238536071E1c677A632429e3655c799b22cDA52"),
    chain_id:                 11155111
};
